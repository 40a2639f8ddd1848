use sureddo_client::{api::CommentId, CommentNode};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentViewProps {
    pub node: CommentNode,
    pub open_reply: Option<CommentId>,
    pub avatar_placeholder: AttrValue,
    pub on_reply_requested: Callback<CommentId>,
    pub on_reply_cancelled: Callback<()>,
    pub on_reply_submitted: Callback<String>,
}

/// One comment with its replies nested beneath it.
///
/// Rendering is a pure function of the node; the only outside input is the
/// placeholder shown when a commenter has no avatar.
#[function_component(CommentView)]
pub fn comment_view(p: &CommentViewProps) -> Html {
    let id = p.node.comment.id;
    let avatar = match &p.node.comment.avatar_url {
        Some(url) => AttrValue::from(url.clone()),
        None => p.avatar_placeholder.clone(),
    };

    let replies = (!p.node.children.is_empty()).then(|| {
        let children = p
            .node
            .children
            .iter()
            .map(|child| {
                html! {
                    <ui::CommentView
                        key={ child.comment.id.0.to_string() }
                        node={ child.clone() }
                        open_reply={ p.open_reply }
                        avatar_placeholder={ p.avatar_placeholder.clone() }
                        on_reply_requested={ p.on_reply_requested.clone() }
                        on_reply_cancelled={ p.on_reply_cancelled.clone() }
                        on_reply_submitted={ p.on_reply_submitted.clone() }
                    />
                }
            })
            .collect::<Html>();
        html! { <div class="mt-4">{ children }</div> }
    });

    let reply_form = (p.open_reply == Some(id)).then(|| {
        html! {
            <ui::ReplyForm
                on_submit={ p.on_reply_submitted.clone() }
                on_cancel={ p.on_reply_cancelled.clone() }
            />
        }
    });

    html! {
        <div class="d-flex mb-2 border border-dashed rounded p-3">
            <div class="flex-shrink-0">
                <img
                    src={ avatar }
                    alt={ p.node.comment.username.clone() }
                    class="avatar-sm rounded-circle shadow-sm"
                />
            </div>
            <div class="flex-grow-1 ms-2">
                <h5 class="mb-1">
                    { &p.node.comment.username }
                    { " " }
                    <small class="text-muted">
                        { util::format_timestamp(&p.node.comment.timestamp) }
                    </small>
                </h5>
                <p class="mb-2">{ &p.node.comment.text }</p>
                <a
                    href="javascript:void(0);"
                    class="badge bg-light text-muted reply-btn"
                    data-comment-id={ id.0.to_string() }
                    onclick={ p.on_reply_requested.reform(move |_| id) }
                >
                    { "Reply" }
                </a>
                { for replies }
                { for reply_form }
            </div>
        </div>
    }
}
