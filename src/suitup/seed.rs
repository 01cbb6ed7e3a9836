//! Sample catalog data.
//!
//! Five suits covering every lifecycle state: on the shelf, rented with a
//! future return, returned, and rented with a return due tomorrow so the
//! reminder window has something to show right after seeding. The raw
//! shapes go through [`repair`] like any other boundary input.

use chrono::{Days, NaiveDate};

use crate::dates;
use crate::model::{repair, RawSuit, SuitRecord};

pub fn sample_catalog(today: NaiveDate) -> Vec<SuitRecord> {
    let tomorrow = today
        .checked_add_days(Days::new(1))
        .map(dates::to_iso)
        .unwrap_or_else(|| dates::to_iso(today));

    let raw = vec![
        RawSuit {
            code: Some("S001".into()),
            name: Some("Classic Black Tuxedo".into()),
            photo_url: Some("https://picsum.photos/seed/tuxedo/400/500".into()),
            purchase_date: Some("2023-01-15".into()),
            suit_price: Some(500.0),
            rental_price: Some(80.0),
            delivery_date: Some("2024-07-20".into()),
            return_date: Some("2024-07-22".into()),
            observations: Some("Excellent condition, includes bow tie.".into()),
            customer_name: Some("John Doe".into()),
            customer_phone: Some("(11) 95555-1234".into()),
            customer_email: Some("john.doe@example.com".into()),
            is_returned: Some(false),
            ..Default::default()
        },
        RawSuit {
            code: Some("S002".into()),
            name: Some("Modern Navy Blue Suit".into()),
            photo_url: Some("https://picsum.photos/seed/navysuit/400/500".into()),
            purchase_date: Some("2023-03-10".into()),
            suit_price: Some(450.0),
            rental_price: Some(75.0),
            observations: Some("Slim fit, modern cut.".into()),
            ..Default::default()
        },
        RawSuit {
            code: Some("S003".into()),
            name: Some("Charcoal Grey Business Suit".into()),
            photo_url: Some("https://picsum.photos/seed/greysuit/400/500".into()),
            purchase_date: Some("2022-11-05".into()),
            suit_price: Some(400.0),
            rental_price: Some(70.0),
            customer_name: Some("Jane Smith".into()),
            customer_phone: Some("(11) 95555-5678".into()),
            customer_email: Some("jane.smith@example.com".into()),
            delivery_date: Some("2024-07-01".into()),
            return_date: Some("2024-07-10".into()),
            is_returned: Some(true),
            ..Default::default()
        },
        RawSuit {
            code: Some("S004".into()),
            name: Some("Elegant Beige Linen Suit".into()),
            photo_url: Some("https://picsum.photos/seed/beigesuit/400/500".into()),
            purchase_date: Some("2023-05-20".into()),
            suit_price: Some(350.0),
            rental_price: Some(65.0),
            observations: Some("Perfect for summer events. Lightweight.".into()),
            ..Default::default()
        },
        RawSuit {
            code: Some("S005".into()),
            name: Some("Dark Grey Modern Fit".into()),
            photo_url: Some("https://picsum.photos/seed/darkgreysuit/400/500".into()),
            purchase_date: Some("2023-08-12".into()),
            suit_price: Some(480.0),
            rental_price: Some(85.0),
            customer_name: Some("Robert Brown".into()),
            customer_phone: Some("(11) 95555-0011".into()),
            customer_email: Some("robert.brown@example.com".into()),
            delivery_date: Some(dates::to_iso(today)),
            return_date: Some(tomorrow),
            observations: Some("Needs dry cleaning after return.".into()),
            is_returned: Some(false),
            ..Default::default()
        },
    ];

    raw.into_iter().map(|r| repair(r, today)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 21).unwrap()
    }

    #[test]
    fn seed_has_five_repaired_suits() {
        let suits = sample_catalog(today());
        assert_eq!(suits.len(), 5);
        assert!(suits.iter().all(|s| !s.name.is_empty()));
        // Ids are minted during repair
        let mut ids: Vec<_> = suits.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn seed_exercises_the_reminder_window() {
        let suits = sample_catalog(today());
        let reminders = classify::upcoming_returns(&suits, today());
        assert!(reminders.iter().any(|s| s.code == "S005"));
    }

    #[test]
    fn seed_covers_each_lifecycle_state() {
        let suits = sample_catalog(today());
        let views = classify::classify(&suits, today());
        assert!(!views.available.is_empty());
        assert!(!views.rented_active.is_empty());
        assert!(!views.returned.is_empty());
    }
}
