use sureddo_client::{api::CommentId, Thread};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentListProps {
    pub thread: Thread,
    pub open_reply: Option<CommentId>,
    pub avatar_placeholder: AttrValue,
    pub on_reply_requested: Callback<CommentId>,
    pub on_reply_cancelled: Callback<()>,
    pub on_reply_submitted: Callback<String>,
}

#[function_component(CommentList)]
pub fn comment_list(p: &CommentListProps) -> Html {
    p.thread
        .roots()
        .iter()
        .map(|node| {
            html! {
                <ui::CommentView
                    key={ node.comment.id.0.to_string() }
                    node={ node.clone() }
                    open_reply={ p.open_reply }
                    avatar_placeholder={ p.avatar_placeholder.clone() }
                    on_reply_requested={ p.on_reply_requested.clone() }
                    on_reply_cancelled={ p.on_reply_cancelled.clone() }
                    on_reply_submitted={ p.on_reply_submitted.clone() }
                />
            }
        })
        .collect()
}
