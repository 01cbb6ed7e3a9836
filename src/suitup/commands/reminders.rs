use chrono::NaiveDate;

use crate::classify;
use crate::commands::{CmdMessage, CmdResult};
use crate::dates;
use crate::error::Result;
use crate::model::{repair, RawSuit, SuitRecord};
use crate::store::CatalogStore;

/// Suits whose return is due today or tomorrow.
///
/// Works from the raw stored shapes so that a legacy record with an
/// unreadable return date can be reported: repair drops such dates, the
/// selector then skips the record, and the user gets a warning instead of
/// silence.
pub fn run<S: CatalogStore>(store: &S, today: NaiveDate) -> Result<CmdResult> {
    let raw = store.load()?;

    let mut result = CmdResult::default();
    for record in &raw {
        if has_unreadable_return_date(record) {
            let name = record.name.as_deref().unwrap_or("terno sem nome");
            let code = record.code.as_deref().unwrap_or("?");
            result.add_message(CmdMessage::warning(format!(
                "Data de devolução ilegível ignorada para {} (Cód: {}).",
                name, code
            )));
        }
    }

    let suits: Vec<SuitRecord> = raw.into_iter().map(|r| repair(r, today)).collect();
    result.listed_suits = classify::upcoming_returns(&suits, today);
    if result.listed_suits.is_empty() {
        result.add_message(CmdMessage::info(
            "Nenhuma devolução prevista para hoje ou amanhã.",
        ));
    }
    Ok(result)
}

fn has_unreadable_return_date(record: &RawSuit) -> bool {
    let active_rental = record
        .customer_name
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty())
        && !record.is_returned.unwrap_or(false);
    if !active_rental {
        return false;
    }
    match record.return_date.as_deref() {
        Some(date) => !date.trim().is_empty() && dates::parse_iso(date).is_none(),
        None => false,
    }
}
