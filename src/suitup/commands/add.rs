use chrono::NaiveDate;

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::repair;
use crate::store::CatalogStore;
use crate::validation::{self, SuitDraft};

pub fn run<S: CatalogStore>(
    store: &mut S,
    draft: SuitDraft,
    today: NaiveDate,
) -> Result<CmdResult> {
    let cleaned = validation::validate(&draft).map_err(CatalogError::Validation)?;
    let mut suits = helpers::load_catalog(store, today)?;

    let suit = repair(cleaned.into_raw(), today);

    let mut result = CmdResult::default();
    // Codes are unique by convention only; warn instead of refusing
    if suits.iter().any(|s| s.code.eq_ignore_ascii_case(&suit.code)) {
        result.add_message(CmdMessage::warning(format!(
            "Já existe um terno com o código {}.",
            suit.code
        )));
    }

    result.add_message(CmdMessage::success(format!(
        "{} foi adicionado ao catálogo.",
        suit.name
    )));
    result.affected_suits.push(suit.clone());
    suits.push(suit);

    helpers::persist(store, &suits, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::validation::Field;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 21).unwrap()
    }

    fn plain_draft(code: &str, name: &str) -> SuitDraft {
        SuitDraft {
            code: code.to_string(),
            name: name.to_string(),
            purchase_date: "2023-01-15".to_string(),
            suit_price: 500.0,
            rental_price: 80.0,
            ..Default::default()
        }
    }

    #[test]
    fn adds_a_suit_and_persists_it() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, plain_draft("S001", "Classic Black Tuxedo"), today()).unwrap();

        assert_eq!(result.affected_suits.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("adicionado ao catálogo")));

        let stored = helpers::load_catalog(&store, today()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].code, "S001");
    }

    #[test]
    fn invalid_submission_leaves_the_catalog_untouched() {
        let mut store = InMemoryStore::new();
        // Phone filled but no customer name: the rental trigger fires
        let draft = SuitDraft {
            customer_phone: "(11) 91234-5678".to_string(),
            ..plain_draft("S001", "Classic Black Tuxedo")
        };

        let err = run(&mut store, draft, today()).unwrap_err();
        match err {
            CatalogError::Validation(errors) => {
                assert!(errors.iter().any(|e| e.field == Field::CustomerName));
            }
            other => panic!("expected validation error, got {other}"),
        }

        assert!(helpers::load_catalog(&store, today()).unwrap().is_empty());
    }

    #[test]
    fn duplicate_code_warns_but_still_adds() {
        let mut store = InMemoryStore::new();
        run(&mut store, plain_draft("S001", "Classic Black Tuxedo"), today()).unwrap();
        let result = run(&mut store, plain_draft("s001", "Navy Blue Suit"), today()).unwrap();

        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Já existe um terno")));
        assert_eq!(helpers::load_catalog(&store, today()).unwrap().len(), 2);
    }

    #[test]
    fn write_failure_is_reported_without_discarding_the_result() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);

        let result = run(&mut store, plain_draft("S001", "Classic Black Tuxedo"), today()).unwrap();
        assert_eq!(result.affected_suits.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Falha ao salvar")));
    }
}
