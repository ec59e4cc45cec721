// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutrigrade-cli
// ABOUTME: Provides the analyze, chat, and prompt commands

pub mod analyze;
pub mod chat;
pub mod prompt;
