// ABOUTME: Meal log and profile goals persistence boundary with an in-memory store
// ABOUTME: Appends timestamped graded meals and computes daily macro totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Journal
//!
//! The journal stores what the pipeline produced once the user confirms it.
//! Implementations must serialize read-modify-write access so concurrent
//! appends are never lost.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use nutrigrade_core::errors::{AppError, AppResult};
use nutrigrade_core::models::{FoodItem, MacroTotals, MealLogEntry, NutritionGoals};
use tokio::sync::Mutex;
use tracing::debug;

/// Persistence collaborator for meal logs and profile goals
#[async_trait]
pub trait MealJournal: Send + Sync {
    /// Stamp and store a meal, returning the stored entry
    async fn append(&self, foods: Vec<FoodItem>) -> AppResult<MealLogEntry>;

    /// All stored entries in append order
    async fn entries(&self) -> AppResult<Vec<MealLogEntry>>;

    /// Current goals, defaults when none were stored
    async fn goals(&self) -> AppResult<NutritionGoals>;

    /// Replace the stored goals
    async fn set_goals(&self, goals: NutritionGoals) -> AppResult<()>;
}

#[derive(Debug, Default)]
struct JournalState {
    entries: Vec<MealLogEntry>,
    goals: Option<NutritionGoals>,
}

/// Process-local journal
#[derive(Debug, Default)]
pub struct InMemoryJournal {
    state: Mutex<JournalState>,
    default_goals: NutritionGoals,
}

impl InMemoryJournal {
    /// Create an empty journal with the given default goals
    #[must_use]
    pub fn new(default_goals: NutritionGoals) -> Self {
        Self {
            state: Mutex::new(JournalState::default()),
            default_goals,
        }
    }
}

#[async_trait]
impl MealJournal for InMemoryJournal {
    async fn append(&self, foods: Vec<FoodItem>) -> AppResult<MealLogEntry> {
        if foods.is_empty() {
            return Err(AppError::invalid_input("Cannot log a meal without foods"));
        }
        let entry = MealLogEntry::new(foods, Utc::now());
        let mut state = self.state.lock().await;
        state.entries.push(entry.clone());
        debug!(entry_id = %entry.id, total_entries = state.entries.len(), "Meal logged");
        Ok(entry)
    }

    async fn entries(&self) -> AppResult<Vec<MealLogEntry>> {
        Ok(self.state.lock().await.entries.clone())
    }

    async fn goals(&self) -> AppResult<NutritionGoals> {
        Ok(self.state.lock().await.goals.unwrap_or(self.default_goals))
    }

    async fn set_goals(&self, goals: NutritionGoals) -> AppResult<()> {
        self.state.lock().await.goals = Some(goals);
        Ok(())
    }
}

/// Sum the macros of every entry logged on the given UTC date
#[must_use]
pub fn daily_totals(entries: &[MealLogEntry], day: NaiveDate) -> MacroTotals {
    entries
        .iter()
        .filter(|entry| entry.timestamp.date_naive() == day)
        .map(MealLogEntry::totals)
        .fold(MacroTotals::default(), MacroTotals::merge)
}
