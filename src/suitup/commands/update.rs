use chrono::NaiveDate;

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::repair;
use crate::store::CatalogStore;
use crate::validation::{self, SuitDraft};

/// Replace the suit with the given code by a re-validated, re-repaired
/// version of `draft`. The record keeps its identity.
pub fn run<S: CatalogStore>(
    store: &mut S,
    code: &str,
    mut draft: SuitDraft,
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut suits = helpers::load_catalog(store, today)?;
    let position = helpers::position_by_code(&suits, code)?;

    draft.id = Some(suits[position].id.to_string());
    let cleaned = validation::validate(&draft).map_err(CatalogError::Validation)?;
    let suit = repair(cleaned.into_raw(), today);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{} foi atualizado.", suit.name)));
    result.affected_suits.push(suit.clone());
    suits[position] = suit;

    helpers::persist(store, &suits, &mut result);
    Ok(result)
}
