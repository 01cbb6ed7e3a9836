use chrono::NaiveDate;

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

/// Remove a suit permanently. Deletion is immediate and final; there is no
/// trash bucket in this catalog.
pub fn run<S: CatalogStore>(store: &mut S, code: &str, today: NaiveDate) -> Result<CmdResult> {
    let mut suits = helpers::load_catalog(store, today)?;
    let position = helpers::position_by_code(&suits, code)?;
    let removed = suits.remove(position);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} foi removido do catálogo.",
        removed.name
    )));
    result.affected_suits.push(removed);

    helpers::persist(store, &suits, &mut result);
    Ok(result)
}
