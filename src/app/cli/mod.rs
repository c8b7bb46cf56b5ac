//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, PublishOptions};
use crate::domain::AppError;
use crate::domain::publish::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "mlpush")]
#[command(version)]
#[command(
    about = "Package a trained ML-Agents run and push it to a Hugging Face model repository",
    long_about = None
)]
struct Cli {
    /// Name of the run-id folder
    #[arg(long)]
    run_id: String,
    /// Path of the run folder that contains the trained model
    #[arg(long, default_value = "./")]
    local_dir: PathBuf,
    /// Repository id on the hub (organization/name)
    #[arg(long)]
    repo_id: String,
    /// Commit message
    #[arg(long)]
    commit_message: String,
    /// Name of the configuration YAML file
    #[arg(long = "configfile-name", default_value = DEFAULT_CONFIG_FILE)]
    configfile_name: String,
    /// Authenticate git transport with the stored hub token
    #[arg(long = "use_auth_token", default_value_t = true, action = ArgAction::Set)]
    use_auth_token: bool,
    /// Local directory under which the repository is cloned
    #[arg(long, default_value = "hub")]
    local_repo_path: PathBuf,
}

impl From<Cli> for PublishOptions {
    fn from(cli: Cli) -> Self {
        PublishOptions {
            run_id: cli.run_id,
            local_dir: cli.local_dir,
            repo_id: cli.repo_id,
            commit_message: cli.commit_message,
            config_file_name: cli.configfile_name,
            use_auth_token: cli.use_auth_token,
            local_repo_path: cli.local_repo_path,
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mlpush=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    println!("{}", cli.run_id);
    println!("{}", cli.repo_id);

    let result: Result<(), AppError> = api::publish(cli.into()).map(|outcome| {
        println!(
            "Your model is pushed to the hub. You can view your model here: {}",
            outcome.repo_url
        );
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
