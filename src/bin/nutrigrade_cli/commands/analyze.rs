// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Analyze command for nutrigrade-cli
// ABOUTME: Runs the normalization and grading pipeline over a raw model answer

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use nutrigrade::config::AnalysisConfig;
use nutrigrade::AppError;
use tracing::info;

use crate::helpers::display::{print_error_response, print_json};
use crate::helpers::input::read_input;

/// Normalize and grade the answer read from `input`
pub async fn run(config: &AnalysisConfig, input: Option<&Path>) -> Result<ExitCode> {
    let raw = read_input(input).await?;

    match config.pipeline().analyze(&raw) {
        Ok(outcome) => {
            info!(
                shape = ?outcome.shape,
                foods = outcome.foods.len(),
                auto_graded = outcome.grading.auto_graded,
                skipped_entries = outcome.skipped_entries,
                "Analysis complete"
            );
            print_json(&outcome.into_response())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            print_error_response(AppError::from(error))?;
            Ok(ExitCode::FAILURE)
        }
    }
}
