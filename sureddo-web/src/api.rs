use sureddo_client::api::{Comment, NewComment};

use crate::PageInfo;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("could not reach the server")]
    Network(#[from] reqwest::Error),

    #[error("server answered {0}")]
    Server(reqwest::StatusCode),
}

pub async fn list_comments(page: &PageInfo) -> Result<Vec<Comment>, FetchError> {
    let resp = crate::CLIENT
        .get(format!("{}/api/jobs/{}/comments", page.host, page.job.0))
        .send()
        .await?;
    if !resp.status().is_success() {
        return Err(FetchError::Server(resp.status()));
    }
    Ok(resp.json().await?)
}

pub async fn post_comment(page: &PageInfo, comment: &NewComment) -> Result<(), FetchError> {
    let req = crate::CLIENT
        .post(format!("{}/api/jobs/{}/comments", page.host, page.job.0))
        .json(comment);
    let req = match &page.token {
        Some(token) => req.bearer_auth(token.0),
        None => req,
    };
    let resp = req.send().await?;
    if !resp.status().is_success() {
        return Err(FetchError::Server(resp.status()));
    }
    Ok(())
}
