//! # Recipe Journal Module
//!
//! This module keeps the journal a maker writes alongside a recipe: dated
//! entries recording batches, cure results, and tweaks. Entries live in
//! memory; persistence belongs to an external collaborator. Authoring is
//! gated on the session owning the recipe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthSession;

/// A single dated journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub user_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// In-memory journal for one recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeJournal {
    entries: Vec<JournalEntry>,
    next_id: i64,
}

impl Default for RecipeJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeJournal {
    /// Create an empty journal
    pub fn new() -> Self {
        Self { entries: Vec::new(), next_id: 1 }
    }

    /// Append an entry stamped with the current time
    pub fn add_entry(&mut self, user_id: i64, body: &str) -> &JournalEntry {
        let entry = JournalEntry {
            id: self.next_id,
            user_id,
            body: body.to_string(),
            created_at: Utc::now(),
        };

        self.next_id += 1;
        self.entries.push(entry);
        self.entries.last().unwrap()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// The latest `count` entries, newest first
    pub fn latest(&self, count: usize) -> Vec<&JournalEntry> {
        self.entries.iter().rev().take(count).collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the journal has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check whether the session may author journal entries on a recipe:
/// signed in, and the recipe's owner
pub fn is_my_recipe(auth: &AuthSession, recipe_user_id: i64) -> bool {
    auth.is_authenticated() && auth.is_my_id(recipe_user_id)
}
