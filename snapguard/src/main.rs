// snapguard/src/main.rs

use clap::{Parser, Subcommand};

// Infrastructure (Config & Adapters)
use snapguard_core::infrastructure::adapters::ec2::Ec2StorageClient;
use snapguard_core::infrastructure::config::MaintainerConfig;

// Application (Use Cases)
use snapguard_core::application::{prune_snapshots, run_maintenance};

#[derive(Parser)]
#[command(name = "snapguard")]
#[command(about = "EBS snapshot maintenance: create, tag and prune", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug, Default)]
struct ConfigArgs {
    /// Retention window in days (overrides RETENTION_DAYS)
    #[arg(long)]
    retention_days: Option<u32>,

    /// Value of the Environment tag (overrides ENVIRONMENT_TAG)
    #[arg(long)]
    environment_tag: Option<String>,

    /// Value of the Application tag (overrides APPLICATION_TAG)
    #[arg(long)]
    application_tag: Option<String>,

    /// Value of the Owner tag (overrides OWNER_TAG)
    #[arg(long)]
    owner_tag: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// 📸 Snapshots every visible volume, tags it, and deletes it in the
    /// same pass if already past the retention window
    Run {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output format: text | json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// 🧹 Deletes pre-existing snapshots older than the retention window
    Prune {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output format: text | json
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Environment first, CLI flags layered on top. All defaults live in
/// `MaintainerConfig::default()`.
fn resolve_config(args: &ConfigArgs) -> anyhow::Result<MaintainerConfig> {
    Ok(apply_overrides(MaintainerConfig::from_env()?, args))
}

fn apply_overrides(mut config: MaintainerConfig, args: &ConfigArgs) -> MaintainerConfig {
    if let Some(days) = args.retention_days {
        config.retention_days = days;
    }
    if let Some(val) = &args.environment_tag {
        config.environment_tag = val.clone();
    }
    if let Some(val) = &args.application_tag {
        config.application_tag = val.clone();
    }
    if let Some(val) = &args.owner_tag {
        config.owner_tag = val.clone();
    }
    config
}

fn emit<T: serde::Serialize>(report: &T, format: &str) -> anyhow::Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(report)?);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug snapguard run ... to see the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, format } => {
            // Fail fast on malformed configuration, before any AWS call.
            let config = match resolve_config(&config) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("❌ Configuration error: {}", e);
                    std::process::exit(1);
                }
            };

            let client = Ec2StorageClient::from_env().await;

            match run_maintenance(&config, &client).await {
                Ok(report) => emit(&report, &format)?,
                Err(e) => {
                    eprintln!("💥 MAINTENANCE RUN FAILED: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Prune { config, format } => {
            let config = match resolve_config(&config) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("❌ Configuration error: {}", e);
                    std::process::exit(1);
                }
            };

            let client = Ec2StorageClient::from_env().await;

            match prune_snapshots(&config, &client).await {
                Ok(report) => emit(&report, &format)?,
                Err(e) => {
                    eprintln!("💥 PRUNE FAILED: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
