mod dump;
pub use dump::{ThreadDump, ThreadStatus};

mod reply;
pub use reply::{clean_submission, ReplyController};

mod thread;
pub use thread::{CommentNode, Thread};

pub mod api {
    pub use sureddo_api::*;
}
