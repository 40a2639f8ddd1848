use crate::api::CommentId;

/// Tracks the single inline reply form that may be open at any time.
///
/// The open form is state held here, never recovered by querying the
/// document; opening a form for another comment implicitly closes the
/// previous one.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReplyController {
    target: Option<CommentId>,
}

impl ReplyController {
    pub fn new() -> ReplyController {
        ReplyController { target: None }
    }

    pub fn open(&mut self, parent: CommentId) {
        self.target = Some(parent);
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    pub fn target(&self) -> Option<CommentId> {
        self.target
    }

    pub fn is_open_for(&self, comment: CommentId) -> bool {
        self.target == Some(comment)
    }
}

/// Trim a submission, refusing whitespace-only text.
///
/// `None` means "do nothing": no request is sent and the form stays open.
pub fn clean_submission(text: &str) -> Option<String> {
    let text = text.trim();
    match text.is_empty() {
        true => None,
        false => Some(String::from(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Uuid;

    fn id(n: u128) -> CommentId {
        CommentId(Uuid::from_u128(n))
    }

    #[test]
    fn at_most_one_form_open() {
        let mut replies = ReplyController::new();
        assert_eq!(replies.target(), None);

        replies.open(id(1));
        assert!(replies.is_open_for(id(1)));

        // opening for another comment closes the first form
        replies.open(id(2));
        assert!(!replies.is_open_for(id(1)));
        assert!(replies.is_open_for(id(2)));
        assert_eq!(replies.target(), Some(id(2)));

        replies.close();
        assert_eq!(replies.target(), None);
    }

    #[test]
    fn whitespace_submission_is_a_no_op() {
        let mut replies = ReplyController::new();
        replies.open(id(1));

        // the form only posts what clean_submission accepts, so a
        // whitespace-only submit sends nothing and closes nothing
        assert_eq!(clean_submission("   \n\t  "), None);
        assert_eq!(clean_submission(""), None);
        assert!(replies.is_open_for(id(1)));
    }

    #[test]
    fn submissions_are_trimmed() {
        assert_eq!(
            clean_submission("  fixed in rev 2  \n"),
            Some(String::from("fixed in rev 2"))
        );
    }
}
