// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for nutrigrade-cli
// ABOUTME: Prints results and error responses as pretty JSON

use anyhow::Result;
use nutrigrade::AppError;
use nutrigrade_core::errors::ErrorResponse;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the transport-facing error body for `error`
pub fn print_error_response(error: AppError) -> Result<()> {
    let status = error.http_status();
    let response = ErrorResponse::from(error);
    eprintln!("HTTP {status}: {}", response.error);
    print_json(&response)
}
