//! Shared command utilities: boundary load, code lookup, best-effort
//! persistence.

use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::{repair, SuitRecord};
use crate::store::CatalogStore;

/// Load the catalog and run every record through the integrity repair.
/// Whatever shape is on disk, the collection in memory is made of valid
/// records.
pub fn load_catalog<S: CatalogStore>(store: &S, today: NaiveDate) -> Result<Vec<SuitRecord>> {
    Ok(store
        .load()?
        .into_iter()
        .map(|raw| repair(raw, today))
        .collect())
}

/// Find a suit by its display code (case-insensitive exact match).
pub fn position_by_code(suits: &[SuitRecord], code: &str) -> Result<usize> {
    suits
        .iter()
        .position(|s| s.code.eq_ignore_ascii_case(code.trim()))
        .ok_or_else(|| CatalogError::SuitNotFound(code.trim().to_string()))
}

/// Persist the whole collection, degrading a failure to an error-level
/// message. The in-memory outcome of the command stands either way.
pub fn persist<S: CatalogStore>(store: &mut S, suits: &[SuitRecord], result: &mut CmdResult) {
    if let Err(e) = store.save(suits) {
        result.add_message(CmdMessage::error(format!(
            "Falha ao salvar o catálogo: {}. As alterações valem apenas para esta sessão.",
            e
        )));
    }
}
