// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Chat command for nutrigrade-cli
// ABOUTME: Normalizes a raw text-chat reply into the responseText envelope

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use nutrigrade::config::AnalysisConfig;

use crate::helpers::display::print_json;
use crate::helpers::input::read_input;

/// Normalize the chat reply read from `input`
pub async fn run(config: &AnalysisConfig, input: Option<&Path>) -> Result<ExitCode> {
    let raw = read_input(input).await?;
    print_json(&config.chat_normalizer().normalize(&raw))?;
    Ok(ExitCode::SUCCESS)
}
