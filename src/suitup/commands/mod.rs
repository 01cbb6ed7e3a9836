//! Command layer: the business logic of the catalog.
//!
//! Each operation lives in its own submodule and is a plain function over a
//! generic [`crate::store::CatalogStore`]. Commands are UI-agnostic: no stdout, no
//! prompts, no exit codes. They return a structured [`CmdResult`] carrying
//! the affected/listed records and leveled messages; the CLI decides how to
//! render it.
//!
//! Mutating commands follow one shape: load the raw catalog, repair it,
//! apply the change, then persist the whole collection. Persistence is best
//! effort: a failed write becomes an error-level message on the result,
//! and the operation's outcome stands.
//!
//! The lion's share of the crate's tests lives here, against
//! [`crate::store::memory::InMemoryStore`].

use std::path::PathBuf;

use serde::Serialize;

use crate::company::CompanyProfile;
use crate::model::SuitRecord;

pub mod add;
pub mod company;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod list;
pub mod receipt;
pub mod reminders;
pub mod return_status;
pub mod seed;
pub mod update;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created or modified by the operation.
    pub affected_suits: Vec<SuitRecord>,
    /// Records to display (already filtered and sorted).
    pub listed_suits: Vec<SuitRecord>,
    /// Files written by the operation (exports, receipts).
    pub output_paths: Vec<PathBuf>,
    /// Company profile, for the `company` command.
    pub company: Option<CompanyProfile>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_suits(mut self, suits: Vec<SuitRecord>) -> Self {
        self.listed_suits = suits;
        self
    }
}
