use anyhow::Context;
use chrono::Utc;
use futures::TryStreamExt;
use sqlx::Row;
use sureddo_api::{
    AuthToken, Comment, CommentId, Job, JobId, NewComment, NewJob, NewSession, NewUser, UserId,
    Uuid,
};

use crate::Error;

pub async fn create_user(conn: &mut sqlx::PgConnection, u: NewUser) -> Result<(), Error> {
    if sqlx::query("SELECT id FROM users WHERE name = $1")
        .bind(&u.name)
        .fetch_optional(&mut *conn)
        .await
        .context("checking for name conflicts")?
        .is_some()
    {
        return Err(Error::name_already_used(u.name));
    }
    if sqlx::query("SELECT id FROM users WHERE id = $1")
        .bind(u.id.0)
        .fetch_optional(&mut *conn)
        .await
        .context("checking for uuid conflicts")?
        .is_some()
    {
        return Err(Error::uuid_already_used(u.id.0));
    }

    let hash = bcrypt::hash(&u.password, bcrypt::DEFAULT_COST).context("hashing password")?;
    sqlx::query("INSERT INTO users VALUES ($1, $2, $3, $4)")
        .bind(u.id.0)
        .bind(&u.name)
        .bind(&hash)
        .bind(&u.avatar_url)
        .execute(conn)
        .await
        .with_context(|| format!("inserting user {:?}", u.id))?;
    Ok(())
}

pub async fn login_user(
    conn: &mut sqlx::PgConnection,
    s: &NewSession,
) -> anyhow::Result<Option<AuthToken>> {
    let row = sqlx::query("SELECT id, password_hash FROM users WHERE name = $1")
        .bind(&s.user)
        .fetch_optional(&mut *conn)
        .await
        .context("querying users table")?;
    let row = match row {
        Some(row) => row,
        None => return Ok(None),
    };

    let hash: String = row
        .try_get("password_hash")
        .context("retrieving the password_hash field")?;
    if !bcrypt::verify(&s.password, &hash).context("verifying password")? {
        return Ok(None);
    }

    let user: Uuid = row.try_get("id").context("retrieving the id field")?;
    let token = AuthToken(Uuid::new_v4());
    sqlx::query("INSERT INTO sessions VALUES ($1, $2)")
        .bind(token.0)
        .bind(user)
        .execute(conn)
        .await
        .context("inserting session")?;
    Ok(Some(token))
}

pub async fn logout_user(conn: &mut sqlx::PgConnection, token: &AuthToken) -> anyhow::Result<bool> {
    let res = sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token.0)
        .execute(conn)
        .await
        .context("deleting session")?;
    Ok(res.rows_affected() > 0)
}

pub async fn recover_session(
    conn: &mut sqlx::PgConnection,
    token: AuthToken,
) -> anyhow::Result<Option<UserId>> {
    Ok(sqlx::query("SELECT user_id FROM sessions WHERE token = $1")
        .bind(token.0)
        .fetch_optional(conn)
        .await
        .context("querying sessions table")?
        .map(|row| {
            row.try_get("user_id")
                .context("retrieving the user_id field")
                .map(UserId)
        })
        .transpose()?)
}

pub async fn create_job(conn: &mut sqlx::PgConnection, j: NewJob) -> Result<(), Error> {
    if sqlx::query("SELECT id FROM jobs WHERE id = $1")
        .bind(j.id.0)
        .fetch_optional(&mut *conn)
        .await
        .context("checking for uuid conflicts")?
        .is_some()
    {
        return Err(Error::uuid_already_used(j.id.0));
    }
    sqlx::query("INSERT INTO jobs VALUES ($1, $2)")
        .bind(j.id.0)
        .bind(&j.name)
        .execute(conn)
        .await
        .with_context(|| format!("inserting job {:?}", j.id))?;
    Ok(())
}

pub async fn fetch_jobs(conn: &mut sqlx::PgConnection) -> anyhow::Result<Vec<Job>> {
    let mut jobs = Vec::new();
    let mut query = sqlx::query("SELECT id, name FROM jobs ORDER BY name, id").fetch(conn);
    while let Some(j) = query.try_next().await.context("querying jobs table")? {
        jobs.push(Job {
            id: JobId(j.try_get("id").context("retrieving the id field")?),
            name: j.try_get("name").context("retrieving the name field")?,
        });
    }
    Ok(jobs)
}

pub async fn job_exists(conn: &mut sqlx::PgConnection, job: JobId) -> anyhow::Result<bool> {
    Ok(sqlx::query("SELECT id FROM jobs WHERE id = $1")
        .bind(job.0)
        .fetch_optional(conn)
        .await
        .context("querying jobs table")?
        .is_some())
}

/// Flat comment list for one job, in arrival order; the nesting is the
/// client's business
pub async fn list_comments(
    conn: &mut sqlx::PgConnection,
    job: JobId,
) -> anyhow::Result<Vec<Comment>> {
    let mut comments = Vec::new();
    let mut query = sqlx::query(
        "
            SELECT c.id, c.parent_id, c.date, c.text, u.name AS username, u.avatar_url
                FROM comments c
            INNER JOIN users u
                ON u.id = c.owner_id
            WHERE c.job_id = $1
            ORDER BY c.date, c.id
        ",
    )
    .bind(job.0)
    .fetch(conn);
    while let Some(c) = query.try_next().await.context("querying comments table")? {
        comments.push(Comment {
            id: CommentId(c.try_get("id").context("retrieving the id field")?),
            parent_id: c
                .try_get::<Option<Uuid>, _>("parent_id")
                .context("retrieving the parent_id field")?
                .map(CommentId),
            text: c.try_get("text").context("retrieving the text field")?,
            username: c
                .try_get("username")
                .context("retrieving the username field")?,
            avatar_url: c
                .try_get("avatar_url")
                .context("retrieving the avatar_url field")?,
            timestamp: c
                .try_get::<chrono::NaiveDateTime, _>("date")
                .context("retrieving the date field")?
                .and_local_timezone(Utc)
                .unwrap(),
        });
    }
    Ok(comments)
}

/// Inserts the comment as-is; parent_id is deliberately not checked against
/// existing comments, unresolvable parents render top-level client-side
pub async fn add_comment(
    conn: &mut sqlx::PgConnection,
    job: JobId,
    owner: UserId,
    c: NewComment,
) -> anyhow::Result<CommentId> {
    let id = CommentId(Uuid::new_v4());
    let res = sqlx::query("INSERT INTO comments VALUES ($1, $2, $3, $4, $5, $6)")
        .bind(id.0)
        .bind(job.0)
        .bind(c.parent_id.map(|p| p.0))
        .bind(owner.0)
        .bind(Utc::now().naive_utc())
        .bind(&c.text)
        .execute(conn)
        .await
        .with_context(|| format!("inserting comment {:?}", id))?;
    anyhow::ensure!(
        res.rows_affected() == 1,
        "insertion of comment {:?} affected {} rows",
        id,
        res.rows_affected()
    );
    Ok(id)
}
