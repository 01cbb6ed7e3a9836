//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for every
//! catalog operation, whatever the UI. The facade dispatches to command
//! functions and returns structured results; business logic stays in
//! `commands/*`, I/O formatting stays with the caller.
//!
//! `CatalogApi<S: CatalogStore>` is generic over the storage backend:
//! production wires a `FileStore`, tests wire an `InMemoryStore` so the
//! facade can be exercised without touching the filesystem.
//!
//! The reference date (`today`) is always passed in by the caller. Nothing
//! below this line reads the clock, which keeps every date-driven rule
//! deterministic under test.

use std::path::Path;

use chrono::NaiveDate;

use crate::commands;
use crate::commands::company::CompanyUpdate;
use crate::commands::list::ListFilter;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;
use crate::validation::SuitDraft;

pub struct CatalogApi<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> CatalogApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_suit(&mut self, draft: SuitDraft, today: NaiveDate) -> Result<CmdResult> {
        commands::add::run(&mut self.store, draft, today)
    }

    pub fn update_suit(
        &mut self,
        code: &str,
        draft: SuitDraft,
        today: NaiveDate,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.store, code, draft, today)
    }

    pub fn delete_suit(&mut self, code: &str, today: NaiveDate) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, code, today)
    }

    pub fn set_returned(
        &mut self,
        code: &str,
        returned: bool,
        today: NaiveDate,
    ) -> Result<CmdResult> {
        commands::return_status::run(&mut self.store, code, returned, today)
    }

    pub fn list_suits(&self, filter: ListFilter, today: NaiveDate) -> Result<CmdResult> {
        commands::list::run(&self.store, filter, today)
    }

    pub fn reminders(&self, today: NaiveDate) -> Result<CmdResult> {
        commands::reminders::run(&self.store, today)
    }

    pub fn export_catalog(&self, output: &Path, today: NaiveDate) -> Result<CmdResult> {
        commands::export::run(&self.store, output, today)
    }

    pub fn generate_receipt(
        &self,
        code: &str,
        output: Option<&Path>,
        today: NaiveDate,
    ) -> Result<CmdResult> {
        commands::receipt::run(&self.store, code, output, today)
    }

    pub fn seed(&mut self, force: bool, today: NaiveDate) -> Result<CmdResult> {
        commands::seed::run(&mut self.store, force, today)
    }

    pub fn company(&mut self, update: CompanyUpdate) -> Result<CmdResult> {
        commands::company::run(&mut self.store, update)
    }

    /// Look up one suit by code, repaired. Handy for edit flows that need
    /// the current record before building a draft.
    pub fn get_suit(&self, code: &str, today: NaiveDate) -> Result<crate::model::SuitRecord> {
        let suits = commands::helpers::load_catalog(&self.store, today)?;
        let position = commands::helpers::position_by_code(&suits, code)?;
        Ok(suits[position].clone())
    }
}

pub use crate::commands::list::{BucketFilter, ListFilter as SuitListFilter};
pub use crate::commands::{CmdMessage, CmdResult as CatalogCmdResult, MessageLevel};
