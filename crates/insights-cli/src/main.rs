mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use insights_core::{load_profile, ConfigOverrides, OutputFormat, ResultsAccessor};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "insights-cli")]
#[command(about = "Query a fetched personality insights profile")]
struct Cli {
    /// Profile document to read (.json, .yaml or .yml); overrides INSIGHTS_PROFILE_PATH
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Output format: text or json; overrides INSIGHTS_OUTPUT
    #[arg(long, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show word count, source, author, language and analysis strength
    Summary,
    /// Print only the analysis strength label
    Level,
    /// Print the results tree as JSON
    Tree {
        /// Normalize the root level only
        #[arg(long)]
        shallow: bool,
    },
    /// Print the trait node with the given id
    Find {
        /// Node id to search for
        id: String,
    },
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            profile_path: self.profile.clone(),
            output: self.output,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = insights_core::load_app_config_with(&cli.overrides())?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let output = config.output;
    let path = config
        .profile_path
        .context("no profile given; pass --profile or set INSIGHTS_PROFILE_PATH")?;

    tracing::debug!(env = %config.env, path = %path.display(), %output, "loading profile");
    let profile = load_profile(&path)
        .with_context(|| format!("failed to load profile from {}", path.display()))?;
    let accessor = ResultsAccessor::new(profile);

    match cli.command {
        Commands::Summary => print!("{}", render::summary(&accessor.summary(), output)?),
        Commands::Level => println!("{}", render::level(accessor.analysis_level(), output)?),
        Commands::Tree { shallow } => {
            let tree = if shallow {
                accessor.tree()
            } else {
                accessor.collect_tree()
            };
            let tree = tree.context("profile has no results tree")?;
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
        Commands::Find { id } => {
            let node = accessor
                .find_insight(&id)
                .ok_or_else(|| anyhow::anyhow!("no insight with id '{id}' in profile"))?;
            println!("{}", serde_json::to_string_pretty(&node)?);
        }
    }

    Ok(())
}
