use anyhow::Context;
use axum::{extract::Path, Json};
use sureddo_api::{AuthToken, Comment, Job, JobId, NewComment, NewJob, NewSession, NewUser};

use crate::{db, extractors::*, Error};

pub async fn admin_create_user(
    AdminAuth: AdminAuth,
    mut conn: PgConn,
    Json(data): Json<NewUser>,
) -> Result<(), Error> {
    data.validate()?;
    db::create_user(&mut *conn, data).await?;
    Ok(())
}

pub async fn admin_create_job(
    AdminAuth: AdminAuth,
    mut conn: PgConn,
    Json(data): Json<NewJob>,
) -> Result<(), Error> {
    data.validate()?;
    db::create_job(&mut *conn, data).await?;
    Ok(())
}

pub async fn auth(
    mut conn: PgConn,
    Json(data): Json<NewSession>,
) -> Result<Json<AuthToken>, Error> {
    Ok(Json(
        db::login_user(&mut *conn, &data)
            .await
            .context("logging user in")?
            .ok_or(Error::permission_denied())?,
    ))
}

pub async fn unauth(user: PreAuth, mut conn: PgConn) -> Result<(), Error> {
    match db::logout_user(&mut *conn, &user.0).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(Error::permission_denied()),
        Err(e) => Err(Error::Anyhow(e)),
    }
}

pub async fn fetch_jobs(mut conn: PgConn) -> Result<Json<Vec<Job>>, Error> {
    Ok(Json(
        db::fetch_jobs(&mut *conn)
            .await
            .context("fetching job list")?,
    ))
}

pub async fn list_comments(
    Path(job): Path<JobId>,
    mut conn: PgConn,
) -> Result<Json<Vec<Comment>>, Error> {
    if !db::job_exists(&mut *conn, job)
        .await
        .with_context(|| format!("checking job {:?} exists", job))?
    {
        return Err(Error::job_not_found(job));
    }
    Ok(Json(
        db::list_comments(&mut *conn, job)
            .await
            .with_context(|| format!("fetching comments for job {:?}", job))?,
    ))
}

pub async fn post_comment(
    Auth(user): Auth,
    Path(job): Path<JobId>,
    mut conn: PgConn,
    Json(data): Json<NewComment>,
) -> Result<(), Error> {
    data.validate()?;
    if !db::job_exists(&mut *conn, job)
        .await
        .with_context(|| format!("checking job {:?} exists", job))?
    {
        return Err(Error::job_not_found(job));
    }
    db::add_comment(&mut *conn, job, user, data)
        .await
        .with_context(|| format!("inserting comment on job {:?}", job))?;
    Ok(())
}
