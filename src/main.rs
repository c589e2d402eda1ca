use clap::{Parser, Subcommand};
use storefront::api::{ApiContext, FetchError, HttpFetcher};
use storefront::config::ApiConfig;
use storefront::service::auth::{SigninParams, signin};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Storefront API client and theme dump")]
struct Cli {
    #[arg(long, env = "API_ROOT_URL")]
    api_root_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print the returned user.
    Signin {
        #[arg(long, env = "STOREFRONT_USERNAME")]
        username: String,
        #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the design-token theme as JSON.
    Theme,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // A missing .env is fine; anything else set in the real environment wins.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut config = ApiConfig::from_env();
    if let Some(url) = cli.api_root_url {
        config.api_root_url = url;
    }

    match cli.command {
        Command::Signin { username, password } => run_signin(&config, SigninParams::new(username, password)).await,
        Command::Theme => print_json(storefront::theme::theme()),
    }
}

async fn run_signin(config: &ApiConfig, params: SigninParams) -> Result<(), CliError> {
    let fetch = HttpFetcher::from_config(config)?;
    let context = ApiContext::from(config);
    tracing::info!(api_root_url = %context.api_root_url, username = %params.username, "signing in");

    match signin(&fetch, &context, &params).await {
        Ok(user) => print_json(&user),
        Err(e) => {
            tracing::error!(error = %e, "signin failed");
            Err(e.into())
        }
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
