use chrono::NaiveDate;

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::seed::sample_catalog;
use crate::store::CatalogStore;

/// Load the sample catalog. A non-empty catalog is only replaced with
/// `force`.
pub fn run<S: CatalogStore>(store: &mut S, force: bool, today: NaiveDate) -> Result<CmdResult> {
    let existing = helpers::load_catalog(store, today)?;

    let mut result = CmdResult::default();
    if !existing.is_empty() && !force {
        result.add_message(CmdMessage::warning(format!(
            "O catálogo já contém {} ternos. Use --force para substituí-lo pelos dados de exemplo.",
            existing.len()
        )));
        return Ok(result);
    }

    let suits = sample_catalog(today);
    result.add_message(CmdMessage::success(format!(
        "Catálogo de exemplo carregado ({} ternos).",
        suits.len()
    )));
    result.affected_suits = suits.clone();

    helpers::persist(store, &suits, &mut result);
    Ok(result)
}
