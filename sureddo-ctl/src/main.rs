use anyhow::Context;
use sureddo_api::{AuthToken, NewJob, NewUser, Uuid};

#[derive(structopt::StructOpt)]
struct Opt {
    #[structopt(short, long)]
    host: String,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Create a user
    CreateUser {
        /// Username
        name: String,

        /// Initial password
        initial_password: String,

        /// Avatar shown next to this user's comments
        #[structopt(long)]
        avatar_url: Option<String>,
    },

    /// Create a job
    CreateJob {
        /// Job name
        name: String,
    },

    /// Add general and priority test jobs
    SeedJobs {
        /// How many jobs of each schedule type to create
        #[structopt(long, default_value = "50")]
        count: usize,
    },
}

fn admin_token() -> anyhow::Result<AuthToken> {
    let tok =
        std::env::var("ADMIN_TOKEN").context("retrieving ADMIN_TOKEN environment variable")?;
    let tok = Uuid::try_parse(&tok).context("parsing ADMIN_TOKEN as an auth token")?;
    Ok(AuthToken(tok))
}

async fn create_job(
    client: &reqwest::Client,
    host: &str,
    token: AuthToken,
    name: String,
) -> anyhow::Result<()> {
    client
        .post(format!("{}/api/admin/create-job", host))
        .json(&NewJob::new(name))
        .bearer_auth(token.0)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opt = <Opt as structopt::StructOpt>::from_args();

    let client = reqwest::Client::new();

    match opt.cmd {
        Command::CreateUser {
            name,
            initial_password,
            avatar_url,
        } => {
            client
                .post(format!("{}/api/admin/create-user", opt.host))
                .json(&NewUser::new(name, initial_password, avatar_url))
                .bearer_auth(admin_token()?.0)
                .send()
                .await?
                .error_for_status()?;
        }
        Command::CreateJob { name } => {
            create_job(&client, &opt.host, admin_token()?, name).await?;
        }
        Command::SeedJobs { count } => {
            let token = admin_token()?;
            for i in 1..=count {
                create_job(
                    &client,
                    &opt.host,
                    token,
                    format!("General Maintenance Task #{}", i),
                )
                .await?;
            }
            for i in 1..=count {
                create_job(
                    &client,
                    &opt.host,
                    token,
                    format!("Priority Alert Response #{}", i),
                )
                .await?;
            }
        }
    }

    Ok(())
}
