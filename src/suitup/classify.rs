//! Rental lifecycle classification.
//!
//! Partitions the catalog into the four views the shop works with:
//!
//! | View | Predicate |
//! |---|---|
//! | Available | no customer, or already returned |
//! | Rented (active) | customer, not returned, not overdue |
//! | Overdue | customer, not returned, valid return date strictly before today |
//! | Returned | customer and returned |
//!
//! A record has exactly one [`RentalStatus`]; the *views* built by
//! [`classify`] overlap in one documented spot: a returned suit shows up
//! both in Available (it can be rented again) and in Returned (history).
//!
//! Date handling is fail-safe throughout: a return date that does not parse
//! never escalates a suit to Overdue, never puts it in the reminder window,
//! and never panics a sort. Comparators treat missing/invalid dates as
//! equal and rely on the sort being stable, so such records keep their
//! insertion order.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::dates;
use crate::model::SuitRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalStatus {
    Available,
    RentedActive,
    Overdue,
    Returned,
}

impl RentalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RentalStatus::Available => "Disponível",
            RentalStatus::RentedActive => "Alugado",
            RentalStatus::Overdue => "Atrasado",
            RentalStatus::Returned => "Devolvido",
        }
    }
}

/// The exclusive status of a single record.
pub fn status_of(suit: &SuitRecord, today: NaiveDate) -> RentalStatus {
    if !suit.has_rental_history() {
        return RentalStatus::Available;
    }
    if suit.is_returned {
        return RentalStatus::Returned;
    }
    match suit.return_date_parsed() {
        Some(due) if due < today => RentalStatus::Overdue,
        _ => RentalStatus::RentedActive,
    }
}

/// The four catalog views, each independently sorted.
#[derive(Debug, Default)]
pub struct Classified {
    /// No customer or already returned. Insertion order.
    pub available: Vec<SuitRecord>,
    /// Out with a customer, not yet due. Most recent delivery first.
    pub rented_active: Vec<SuitRecord>,
    /// Past the return date. Most overdue first.
    pub overdue: Vec<SuitRecord>,
    /// Rental history. Most recently returned first.
    pub returned: Vec<SuitRecord>,
}

pub fn classify(suits: &[SuitRecord], today: NaiveDate) -> Classified {
    let mut views = Classified::default();

    for suit in suits {
        match status_of(suit, today) {
            RentalStatus::Available => views.available.push(suit.clone()),
            RentalStatus::RentedActive => views.rented_active.push(suit.clone()),
            RentalStatus::Overdue => views.overdue.push(suit.clone()),
            RentalStatus::Returned => {
                // Returned suits are rentable again and also kept as history
                views.available.push(suit.clone());
                views.returned.push(suit.clone());
            }
        }
    }

    sort_by_delivery_desc(&mut views.rented_active);
    sort_by_return_asc(&mut views.overdue);
    sort_by_return_desc(&mut views.returned);

    views
}

fn sort_by_delivery_desc(suits: &mut [SuitRecord]) {
    suits.sort_by(|a, b| {
        match (b.delivery_date_parsed(), a.delivery_date_parsed()) {
            (Some(rhs), Some(lhs)) => rhs.cmp(&lhs),
            _ => Ordering::Equal,
        }
    });
}

fn sort_by_return_asc(suits: &mut [SuitRecord]) {
    suits.sort_by(|a, b| match (a.return_date_parsed(), b.return_date_parsed()) {
        (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
        _ => Ordering::Equal,
    });
}

fn sort_by_return_desc(suits: &mut [SuitRecord]) {
    suits.sort_by(|a, b| match (b.return_date_parsed(), a.return_date_parsed()) {
        (Some(rhs), Some(lhs)) => rhs.cmp(&lhs),
        _ => Ordering::Equal,
    });
}

/// Case-insensitive substring filter on the suit name only. An empty or
/// whitespace-only term returns the input unchanged.
pub fn filter_by_name(suits: &[SuitRecord], term: &str) -> Vec<SuitRecord> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return suits.to_vec();
    }
    suits
        .iter()
        .filter(|suit| suit.name.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Suits whose return is due today or tomorrow: customer present, not yet
/// returned, and a valid return date exactly 0 or 1 calendar days away.
/// Overdue and far-future returns are excluded; this is the proactive
/// reminder window, not the overdue list.
pub fn upcoming_returns(suits: &[SuitRecord], today: NaiveDate) -> Vec<SuitRecord> {
    suits
        .iter()
        .filter(|suit| {
            if !suit.has_rental_history() || suit.is_returned {
                return false;
            }
            match suit.return_date_parsed() {
                Some(due) => matches!(dates::calendar_days_from(today, due), 0 | 1),
                None => false,
            }
        })
        .cloned()
        .collect()
}

/// Human label for how far away a return date is.
///
/// Absent date → empty string. A date that is present but fails to parse is
/// reported as invalid rather than silently hidden. The `< 0` branch is the
/// same cutoff the Overdue classification uses.
pub fn days_remaining_text(return_date: Option<&str>, today: NaiveDate) -> String {
    let raw = match return_date {
        Some(s) if !s.trim().is_empty() => s,
        _ => return String::new(),
    };

    let due = match dates::parse_iso(raw) {
        Some(date) => date,
        None => return "Data inválida".to_string(),
    };

    match dates::calendar_days_from(today, due) {
        diff if diff < 0 => {
            let late = diff.abs();
            let unit = if late == 1 { "dia" } else { "dias" };
            format!("Atrasado ({} {})", late, unit)
        }
        0 => "Hoje".to_string(),
        1 => "Amanhã".to_string(),
        diff => format!("Em {} dias", diff),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{repair, RawSuit};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 21).unwrap()
    }

    fn suit(name: &str) -> SuitRecord {
        repair(
            RawSuit {
                name: Some(name.to_string()),
                ..Default::default()
            },
            today(),
        )
    }

    fn rented(name: &str, delivery: &str, ret: &str, returned: bool) -> SuitRecord {
        let mut s = suit(name);
        s.customer_name = Some("John Doe".to_string());
        s.customer_phone = Some("(11) 91234-5678".to_string());
        s.customer_email = Some("john.doe@example.com".to_string());
        s.delivery_date = Some(delivery.to_string());
        s.return_date = Some(ret.to_string());
        s.is_returned = returned;
        s
    }

    #[test]
    fn status_without_customer_is_available() {
        assert_eq!(status_of(&suit("Navy Blue"), today()), RentalStatus::Available);
    }

    #[test]
    fn status_with_future_return_is_rented() {
        let s = rented("Tuxedo", "2024-07-20", "2024-07-25", false);
        assert_eq!(status_of(&s, today()), RentalStatus::RentedActive);
    }

    #[test]
    fn status_due_today_is_not_overdue() {
        // Strictly-before cutoff: due today still counts as active
        let s = rented("Tuxedo", "2024-07-18", "2024-07-21", false);
        assert_eq!(status_of(&s, today()), RentalStatus::RentedActive);
    }

    #[test]
    fn status_past_return_is_overdue() {
        let s = rented("Tuxedo", "2024-07-10", "2024-07-20", false);
        assert_eq!(status_of(&s, today()), RentalStatus::Overdue);
    }

    #[test]
    fn returned_wins_over_overdue() {
        let s = rented("Tuxedo", "2024-07-01", "2024-07-10", true);
        assert_eq!(status_of(&s, today()), RentalStatus::Returned);
    }

    #[test]
    fn unparseable_return_date_never_classifies_overdue() {
        let mut s = rented("Tuxedo", "2024-07-10", "garbage", false);
        // Bypass repair on purpose: legacy rows can carry junk dates
        s.return_date = Some("not-a-date".to_string());
        assert_eq!(status_of(&s, today()), RentalStatus::RentedActive);
    }

    #[test]
    fn missing_return_date_is_not_overdue() {
        let mut s = rented("Tuxedo", "2024-07-10", "2024-07-20", false);
        s.return_date = None;
        assert_eq!(status_of(&s, today()), RentalStatus::RentedActive);
    }

    #[test]
    fn every_suit_gets_exactly_one_status() {
        let suits = vec![
            suit("Plain"),
            rented("Active", "2024-07-20", "2024-07-25", false),
            rented("Late", "2024-07-01", "2024-07-10", false),
            rented("Back", "2024-07-01", "2024-07-10", true),
        ];

        let views = classify(&suits, today());
        let mutually_exclusive =
            views.rented_active.len() + views.overdue.len() + views.returned.len();
        // Returned suits double into Available; the rental-bearing views
        // themselves never overlap
        assert_eq!(mutually_exclusive, 3);
        assert_eq!(views.available.len(), 2);
        assert_eq!(views.rented_active[0].name, "Active");
        assert_eq!(views.overdue[0].name, "Late");
        assert_eq!(views.returned[0].name, "Back");
    }

    #[test]
    fn returned_suit_is_available_again() {
        let suits = vec![rented("Back", "2024-07-01", "2024-07-10", true)];
        let views = classify(&suits, today());
        assert_eq!(views.available.len(), 1);
        assert_eq!(views.returned.len(), 1);
    }

    #[test]
    fn marking_returned_moves_between_views() {
        let mut s = rented("Late", "2024-07-01", "2024-07-10", false);
        let views = classify(std::slice::from_ref(&s), today());
        assert_eq!(views.overdue.len(), 1);
        assert!(views.returned.is_empty());

        s.is_returned = true;
        let views = classify(std::slice::from_ref(&s), today());
        assert!(views.overdue.is_empty());
        assert_eq!(views.returned.len(), 1);
        assert_eq!(views.available.len(), 1);
    }

    #[test]
    fn rented_view_sorts_by_delivery_descending() {
        let suits = vec![
            rented("Older", "2024-07-10", "2024-07-30", false),
            rented("Newer", "2024-07-20", "2024-07-30", false),
        ];
        let views = classify(&suits, today());
        assert_eq!(views.rented_active[0].name, "Newer");
        assert_eq!(views.rented_active[1].name, "Older");
    }

    #[test]
    fn overdue_view_sorts_most_overdue_first() {
        let suits = vec![
            rented("Slightly late", "2024-07-01", "2024-07-19", false),
            rented("Very late", "2024-07-01", "2024-07-05", false),
        ];
        let views = classify(&suits, today());
        assert_eq!(views.overdue[0].name, "Very late");
    }

    #[test]
    fn returned_view_sorts_most_recent_first() {
        let suits = vec![
            rented("Earlier", "2024-06-01", "2024-06-10", true),
            rented("Later", "2024-07-01", "2024-07-10", true),
        ];
        let views = classify(&suits, today());
        assert_eq!(views.returned[0].name, "Later");
    }

    #[test]
    fn missing_dates_keep_insertion_order_in_sorts() {
        let mut a = rented("First", "2024-07-20", "2024-07-30", false);
        a.delivery_date = None;
        let mut b = rented("Second", "2024-07-20", "2024-07-30", false);
        b.delivery_date = None;

        let views = classify(&[a, b], today());
        assert_eq!(views.rented_active[0].name, "First");
        assert_eq!(views.rented_active[1].name, "Second");
    }

    #[test]
    fn filter_empty_term_is_identity() {
        let suits = vec![suit("B Suit"), suit("A Suit")];
        let filtered = filter_by_name(&suits, "   ");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "B Suit");
    }

    #[test]
    fn filter_matches_name_case_insensitively() {
        let suits = vec![suit("Classic Black Tuxedo"), suit("Navy Blue Suit")];
        let filtered = filter_by_name(&suits, "tuxedo");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Classic Black Tuxedo");
    }

    #[test]
    fn filter_ignores_other_fields() {
        let mut s = suit("Navy Blue Suit");
        s.code = "TUXEDO".to_string();
        s.customer_name = Some("Mr. Tuxedo".to_string());
        assert!(filter_by_name(&[s], "tuxedo").is_empty());
    }

    #[test]
    fn reminder_window_is_exactly_today_or_tomorrow() {
        let cases = [
            ("2024-07-20", false), // yesterday: overdue, not a reminder
            ("2024-07-21", true),  // today
            ("2024-07-22", true),  // tomorrow
            ("2024-07-23", false), // day after tomorrow
        ];
        for (date, expected) in cases {
            let s = rented("Tuxedo", "2024-07-18", date, false);
            let hits = upcoming_returns(std::slice::from_ref(&s), today());
            assert_eq!(hits.len() == 1, expected, "return date {date}");
        }
    }

    #[test]
    fn reminders_exclude_returned_and_customerless_suits() {
        let returned = rented("Back", "2024-07-18", "2024-07-21", true);
        let plain = suit("Shelf");
        assert!(upcoming_returns(&[returned, plain], today()).is_empty());
    }

    #[test]
    fn reminders_skip_unparseable_dates() {
        let mut s = rented("Tuxedo", "2024-07-18", "2024-07-21", false);
        s.return_date = Some("tomorrow-ish".to_string());
        assert!(upcoming_returns(std::slice::from_ref(&s), today()).is_empty());
    }

    #[test]
    fn days_text_distinguishes_absent_from_malformed() {
        assert_eq!(days_remaining_text(None, today()), "");
        assert_eq!(days_remaining_text(Some(""), today()), "");
        assert_eq!(days_remaining_text(Some("junk"), today()), "Data inválida");
    }

    #[test]
    fn days_text_overdue_pluralizes() {
        assert_eq!(
            days_remaining_text(Some("2024-07-20"), today()),
            "Atrasado (1 dia)"
        );
        assert_eq!(
            days_remaining_text(Some("2024-07-15"), today()),
            "Atrasado (6 dias)"
        );
    }

    #[test]
    fn days_text_near_branches() {
        assert_eq!(days_remaining_text(Some("2024-07-21"), today()), "Hoje");
        assert_eq!(days_remaining_text(Some("2024-07-22"), today()), "Amanhã");
        assert_eq!(days_remaining_text(Some("2024-07-25"), today()), "Em 4 dias");
    }
}
