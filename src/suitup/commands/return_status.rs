use chrono::NaiveDate;

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::store::CatalogStore;

/// Mark a rented suit as returned, or flip it back to pending.
///
/// Only suits with a rental attachment can change return status; the flag
/// is meaningless without a customer.
pub fn run<S: CatalogStore>(
    store: &mut S,
    code: &str,
    returned: bool,
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut suits = helpers::load_catalog(store, today)?;
    let position = helpers::position_by_code(&suits, code)?;

    if !suits[position].has_rental_history() {
        return Err(CatalogError::Api(format!(
            "Não há informações de aluguel para {}.",
            suits[position].name
        )));
    }

    suits[position].is_returned = returned;

    let status = if returned { "Devolvido" } else { "Pendente" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "O terno {} foi marcado como {}.",
        suits[position].name, status
    )));
    result.affected_suits.push(suits[position].clone());

    helpers::persist(store, &suits, &mut result);
    Ok(result)
}
