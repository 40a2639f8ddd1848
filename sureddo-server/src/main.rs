use anyhow::Context;
use axum::routing::{get, post};
use std::net::SocketAddr;
use sureddo_api::{AuthToken, Uuid};

mod db;
mod error;
mod extractors;
mod handlers;
mod tests;

pub use error::Error;
use extractors::AppState;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

#[derive(structopt::StructOpt)]
struct Opt {
    /// Address to listen on
    #[structopt(short, long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opt = <Opt as structopt::StructOpt>::from_args();
    tracing_subscriber::fmt::init();

    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let db = sqlx::postgres::PgPoolOptions::new()
        .connect(&db_url)
        .await
        .with_context(|| format!("Error opening database {:?}", db_url))?;
    MIGRATOR
        .run(&db)
        .await
        .context("running pending migrations")?;

    let admin_token = match std::env::var("ADMIN_TOKEN") {
        Ok(t) => Some(AuthToken(
            Uuid::try_parse(&t).context("parsing ADMIN_TOKEN as an auth token")?,
        )),
        Err(_) => None,
    };
    if admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN not set, admin endpoints will reject everything");
    }

    let state = AppState {
        db: extractors::PgPool::new(db),
        admin_token,
    };

    tracing::info!("listening on {}", opt.bind);
    axum::Server::bind(&opt.bind)
        .serve(app(state).into_make_service())
        .await
        .context("serving axum webserver")
}

pub fn app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/api/auth", post(handlers::auth))
        .route("/api/unauth", post(handlers::unauth))
        .route("/api/admin/create-user", post(handlers::admin_create_user))
        .route("/api/admin/create-job", post(handlers::admin_create_job))
        .route("/api/jobs", get(handlers::fetch_jobs))
        .route(
            "/api/jobs/:job_id/comments",
            get(handlers::list_comments).post(handlers::post_comment),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}
