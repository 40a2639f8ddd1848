use sureddo_client::{
    api::{Comment, CommentId, NewComment},
    clean_submission, ReplyController, ThreadDump, ThreadStatus,
};
use yew::prelude::*;

use crate::{api, ui, PageInfo};

const AVATAR_PLACEHOLDER: &str = "/static/images/users/user-placeholder.jpg";

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
    pub page: PageInfo,
}

pub enum AppMsg {
    ReceivedComments(Vec<Comment>),
    FetchFailed,
    ComposeEdited(String),
    ComposeSubmitted,
    ReplyRequested(CommentId),
    ReplyCancelled,
    ReplySubmitted(String),
    PostComplete,
    PostFailed,
}

pub struct App {
    dump: ThreadDump,
    replies: ReplyController,
    compose: String,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        fetch_comments(ctx);
        App {
            dump: ThreadDump::stub(ctx.props().page.job),
            replies: ReplyController::new(),
            compose: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ReceivedComments(comments) => self.dump.set_comments(comments),
            AppMsg::FetchFailed => self.dump.set_fetch_failed(),
            AppMsg::ComposeEdited(text) => self.compose = text,
            AppMsg::ComposeSubmitted => {
                // whitespace-only drafts are silently ignored
                if let Some(text) = clean_submission(&self.compose) {
                    post_comment(ctx, text, None);
                }
            }
            AppMsg::ReplyRequested(parent) => self.replies.open(parent),
            AppMsg::ReplyCancelled => self.replies.close(),
            AppMsg::ReplySubmitted(text) => {
                let parent = self.replies.target();
                self.replies.close();
                post_comment(ctx, text, parent);
            }
            AppMsg::PostComplete => {
                self.compose.clear();
                fetch_comments(ctx);
            }
            AppMsg::PostFailed => {
                // the compose textarea keeps its text so the user can retry
                let _ = web_sys::window()
                    .expect("running outside a browser window")
                    .alert_with_message("There was an error posting your comment.");
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let thread_area = match &self.dump.status {
            ThreadStatus::Loading => html! {
                <div class="spinner-border spinner-border-sm m-2" role="status"></div>
            },
            ThreadStatus::FetchFailed => html! {
                <p class="text-danger">{ "Could not load comments." }</p>
            },
            ThreadStatus::Ready(thread) if thread.is_empty() => html! {
                <p class="text-muted">{ "No comments yet. Be the first to comment!" }</p>
            },
            ThreadStatus::Ready(thread) => html! {
                <ui::CommentList
                    thread={ thread.clone() }
                    open_reply={ self.replies.target() }
                    avatar_placeholder={ AVATAR_PLACEHOLDER }
                    on_reply_requested={ ctx.link().callback(AppMsg::ReplyRequested) }
                    on_reply_cancelled={ ctx.link().callback(|_| AppMsg::ReplyCancelled) }
                    on_reply_submitted={ ctx.link().callback(AppMsg::ReplySubmitted) }
                />
            },
        };
        html! {
            <div class="card job-comments">
                <div class="card-header">
                    <h5 class="mb-0">
                        { "Comments " }
                        <span class="badge bg-light text-muted">{ self.dump.count }</span>
                    </h5>
                </div>
                <div class="card-body">
                    { thread_area }
                    <ui::ComposeForm
                        value={ self.compose.clone() }
                        on_edit={ ctx.link().callback(AppMsg::ComposeEdited) }
                        on_submit={ ctx.link().callback(|_| AppMsg::ComposeSubmitted) }
                    />
                </div>
            </div>
        }
    }
}

fn fetch_comments(ctx: &Context<App>) {
    let page = ctx.props().page.clone();
    ctx.link().send_future(async move {
        match api::list_comments(&page).await {
            Ok(comments) => AppMsg::ReceivedComments(comments),
            Err(e) => {
                tracing::error!("failed to fetch comments: {:?}", e);
                AppMsg::FetchFailed
            }
        }
    });
}

fn post_comment(ctx: &Context<App>, text: String, parent: Option<CommentId>) {
    let page = ctx.props().page.clone();
    ctx.link().send_future(async move {
        let comment = NewComment {
            text,
            parent_id: parent,
        };
        match api::post_comment(&page, &comment).await {
            Ok(()) => AppMsg::PostComplete,
            Err(e) => {
                tracing::error!("failed to post comment: {:?}", e);
                AppMsg::PostFailed
            }
        }
    });
}
