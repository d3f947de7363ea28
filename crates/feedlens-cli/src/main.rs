mod analyze;
mod report;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::analyze::AnalyzeArgs;

#[derive(Debug, Parser)]
#[command(name = "feedlens")]
#[command(about = "Scroll a social profile and summarize the sentiment of its posts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect posts from a profile and print a sentiment report
    Analyze {
        /// Profile handle, with or without a leading `@`
        handle: String,

        /// Upper bound on scroll iterations (overrides `FEEDLENS_MAX_SCROLLS`)
        #[arg(long)]
        max_scrolls: Option<u32>,

        /// Stop once this many distinct posts are collected (overrides `FEEDLENS_MAX_POSTS`)
        #[arg(long, value_parser = parse_positive)]
        max_posts: Option<usize>,

        /// Number of negative words to report (overrides `FEEDLENS_TOP_K`)
        #[arg(long, value_parser = parse_positive)]
        top_k: Option<usize>,

        /// Print the result as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// Score a single text and show its label and cleaned form
    Score {
        text: String,
    },
    /// Print the cleaned form of a text
    Clean {
        text: String,
    },
}

fn parse_positive(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("must be greater than zero".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = feedlens_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            handle,
            max_scrolls,
            max_posts,
            top_k,
            json,
        } => {
            let args = AnalyzeArgs {
                handle,
                max_scrolls,
                max_posts,
                top_k,
                json,
            };
            analyze::run_analyze(&config, &args)
                .await
                .map(ExitCode::from)
        }
        Commands::Score { text } => {
            analyze::run_score(&config, &text)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Clean { text } => {
            println!("{}", feedlens_sentiment::clean_text(&text));
            Ok(ExitCode::SUCCESS)
        }
    }
}
