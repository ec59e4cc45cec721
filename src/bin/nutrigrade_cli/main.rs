// ABOUTME: NutriGrade CLI - runs the normalization pipeline over raw model answers
// ABOUTME: Analyzes food payloads, normalizes chat replies, and prints upstream prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Normalize and grade a saved model answer
//! nutrigrade-cli analyze --input answer.txt
//!
//! # Same, reading stdin
//! echo '{"name": "Toast"}' | nutrigrade-cli analyze
//!
//! # Normalize a text-chat reply
//! nutrigrade-cli chat --input reply.txt
//!
//! # Print the prompt for a typed meal
//! nutrigrade-cli prompt meal "two eggs and toast"
//!
//! # Print the daily recommendation prompt
//! nutrigrade-cli prompt recommend --calories 850 --protein 40
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrigrade::config::AnalysisConfig;
use nutrigrade::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutrigrade-cli",
    about = "NutriGrade response normalization CLI",
    long_about = "Normalizes and grades nutrition answers produced by an upstream text/vision model."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Normalize and grade a food analysis answer, printing `{"foods": [...]}`
    Analyze {
        /// File holding the raw answer (stdin when omitted)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Normalize a text-chat reply, printing `{"responseText": ...}`
    Chat {
        /// File holding the raw reply (stdin when omitted)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Print a prompt sent to the upstream model
    Prompt {
        #[command(subcommand)]
        kind: PromptCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PromptCommand {
    /// Food photo analysis prompt
    Vision,

    /// Typed meal description prompt
    Meal {
        /// Meal description
        description: String,
    },

    /// Daily recommendation prompt using the configured default goals
    Recommend {
        /// Calories consumed so far
        #[arg(long, default_value = "0")]
        calories: f64,

        /// Protein consumed so far (grams)
        #[arg(long, default_value = "0")]
        protein: f64,

        /// Carbohydrates consumed so far (grams)
        #[arg(long, default_value = "0")]
        carbs: f64,

        /// Fats consumed so far (grams)
        #[arg(long, default_value = "0")]
        fats: f64,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = AnalysisConfig::from_env()?;
    debug!(?config, "Loaded analysis configuration");

    match cli.command {
        Command::Analyze { input } => commands::analyze::run(&config, input.as_deref()).await,
        Command::Chat { input } => commands::chat::run(&config, input.as_deref()).await,
        Command::Prompt { kind } => {
            match kind {
                PromptCommand::Vision => commands::prompt::vision(),
                PromptCommand::Meal { description } => commands::prompt::meal(&description)?,
                PromptCommand::Recommend {
                    calories,
                    protein,
                    carbs,
                    fats,
                } => commands::prompt::recommend(&config, calories, protein, carbs, fats),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
