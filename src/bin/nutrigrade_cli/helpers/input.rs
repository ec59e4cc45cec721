// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Input helpers for nutrigrade-cli
// ABOUTME: Reads raw model text from a file or standard input

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

/// Read the whole input from `path`, or from stdin when no path is given
pub async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read standard input")?;
            Ok(buffer)
        }
    }
}
