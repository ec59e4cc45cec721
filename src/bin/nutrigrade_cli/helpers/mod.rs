// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for nutrigrade-cli
// ABOUTME: Provides input reading and output formatting utilities

pub mod display;
pub mod input;
