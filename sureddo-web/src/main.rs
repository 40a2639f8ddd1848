use gloo_storage::{LocalStorage, Storage};
use sureddo_client::api::{AuthToken, JobId, Uuid};

mod api;
mod ui;
mod util;

lazy_static::lazy_static! {
    pub static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

const KEY_AUTH_TOKEN: &str = "auth-token";

/// Context the surrounding page provides: which job this comment area is
/// for, where the API lives, and the session the admin shell opened.
#[derive(Clone, Debug, PartialEq)]
pub struct PageInfo {
    pub host: String,
    pub job: JobId,
    pub token: Option<AuthToken>,
}

fn page_info() -> PageInfo {
    let window = web_sys::window().expect("running outside a browser window");
    let host = window
        .location()
        .origin()
        .expect("failed reading window origin");
    let job = window
        .document()
        .expect("window has no document")
        .body()
        .expect("document has no body")
        .get_attribute("data-job-id")
        .expect("page context did not provide a data-job-id attribute");
    let job = JobId(Uuid::try_parse(&job).expect("data-job-id is not a valid uuid"));
    let token = LocalStorage::get(KEY_AUTH_TOKEN).ok();
    PageInfo { host, job, token }
}

fn main() {
    tracing_wasm::set_as_global_default();
    let page = page_info();
    yew::Renderer::<ui::App>::with_props(ui::AppProps { page }).render();
}
