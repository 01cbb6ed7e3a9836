//! # Domain Model: Suit Records and Integrity Repair
//!
//! This module defines the catalog's core data structures: [`SuitRecord`]
//! (the canonical shape of a catalog item) and [`RawSuit`] (the loose shape
//! records have at the boundaries: seed data, the persisted catalog file,
//! or a half-filled edit).
//!
//! ## The Problem
//!
//! Records arrive in chaotic shapes:
//! - Seed data may omit ids, photos, or the `isReturned` flag.
//! - Legacy catalog files may carry partial rental attachments.
//! - Optional fields oscillate between "missing" and "empty string".
//!
//! Internal logic should never have to special-case both. The catalog
//! standardizes on: **absent** (`None`) vs **present** (`Some`, non-empty),
//! with `photo_url` as the one deliberate exception: it is always a string,
//! and `""` is the canonical "no photo" value.
//!
//! ## Repair Pipeline
//!
//! [`repair`] turns any [`RawSuit`] into a valid [`SuitRecord`]:
//!
//! 1. Id: keep if it parses as a UUID, otherwise mint a fresh one.
//! 2. Code: fall back to a code derived from the id.
//! 3. Name: placeholder when missing.
//! 4. Dates: `purchase_date` falls back to today; rental dates that fail to
//!    parse are dropped to absent rather than kept invalid.
//! 5. Prices: non-finite or negative values become 0.
//! 6. `is_returned` is forced to `false` whenever there is no customer.
//!
//! `repair` is pure (the reference date is injected) and idempotent:
//! repairing an already-repaired record changes nothing.
//!
//! Repair fixes *shape*, not *completeness*: a legacy record with a customer
//! name but no return date survives untouched. Completeness of a rental
//! attachment is enforced at the submission boundary (`validation`), not
//! here, so old catalogs keep loading.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates;

/// A catalog item, optionally carrying one rental attachment.
///
/// The rental attachment is the group of `customer_*`, `delivery_date`,
/// `return_date` and `observations` fields. `customer_name` is the
/// discriminator: a record with a customer name has rental history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitRecord {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    /// Image reference (data URL or external URL). `""` means no photo.
    pub photo_url: String,
    /// ISO `YYYY-MM-DD`. Always a valid date after repair.
    pub purchase_date: String,
    pub suit_price: f64,
    pub rental_price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// Only meaningful while a rental attachment exists; forced `false`
    /// otherwise.
    #[serde(default)]
    pub is_returned: bool,
}

impl SuitRecord {
    /// Whether this suit carries a rental attachment (current or past).
    pub fn has_rental_history(&self) -> bool {
        self.customer_name.is_some()
    }

    /// The return date as a calendar date, if present and parseable.
    pub fn return_date_parsed(&self) -> Option<NaiveDate> {
        self.return_date.as_deref().and_then(dates::parse_iso)
    }

    /// The delivery date as a calendar date, if present and parseable.
    pub fn delivery_date_parsed(&self) -> Option<NaiveDate> {
        self.delivery_date.as_deref().and_then(dates::parse_iso)
    }
}

/// The loose boundary shape of a suit: everything optional, nothing
/// validated. This is what seed data and the catalog file deserialize into
/// before [`repair`] runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSuit {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub suit_price: Option<f64>,
    #[serde(default)]
    pub rental_price: Option<f64>,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub is_returned: Option<bool>,
}

impl From<SuitRecord> for RawSuit {
    fn from(suit: SuitRecord) -> Self {
        RawSuit {
            id: Some(suit.id.to_string()),
            code: Some(suit.code),
            name: Some(suit.name),
            photo_url: Some(suit.photo_url),
            purchase_date: Some(suit.purchase_date),
            suit_price: Some(suit.suit_price),
            rental_price: Some(suit.rental_price),
            delivery_date: suit.delivery_date,
            return_date: suit.return_date,
            observations: suit.observations,
            customer_name: suit.customer_name,
            customer_phone: suit.customer_phone,
            customer_email: suit.customer_email,
            is_returned: Some(suit.is_returned),
        }
    }
}

/// Placeholder name for records that arrive without one.
pub const UNNAMED_SUIT: &str = "Terno sem nome";

/// Repair a raw record into a valid [`SuitRecord`].
///
/// Never fails and never invents rental data; see the module docs for the
/// full rule set. `today` is the fallback for a missing or unparseable
/// purchase date.
pub fn repair(raw: RawSuit, today: NaiveDate) -> SuitRecord {
    let id = raw
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s.trim()).ok())
        .unwrap_or_else(Uuid::new_v4);

    let code = non_empty(raw.code).unwrap_or_else(|| fallback_code(&id));
    let name = non_empty(raw.name).unwrap_or_else(|| UNNAMED_SUIT.to_string());

    let purchase_date = raw
        .purchase_date
        .as_deref()
        .and_then(dates::parse_iso)
        .unwrap_or(today);

    // Rental dates that are present but unparseable are dropped, never
    // stored invalid.
    let delivery_date = valid_date_or_none(raw.delivery_date);
    let return_date = valid_date_or_none(raw.return_date);

    let customer_name = non_empty(raw.customer_name);
    let is_returned = customer_name.is_some() && raw.is_returned.unwrap_or(false);

    SuitRecord {
        id,
        code,
        name,
        photo_url: raw.photo_url.unwrap_or_default(),
        purchase_date: dates::to_iso(purchase_date),
        suit_price: sanitize_price(raw.suit_price),
        rental_price: sanitize_price(raw.rental_price),
        delivery_date,
        return_date,
        observations: non_empty(raw.observations),
        customer_name,
        customer_phone: non_empty(raw.customer_phone),
        customer_email: non_empty(raw.customer_email),
        is_returned,
    }
}

/// Fallback code derived from the record id: `S` + first 4 hex characters.
fn fallback_code(id: &Uuid) -> String {
    let hex = id.simple().to_string();
    format!("S{}", hex[..4].to_uppercase())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn valid_date_or_none(value: Option<String>) -> Option<String> {
    value.filter(|s| dates::parse_iso(s).is_some())
}

fn sanitize_price(value: Option<f64>) -> f64 {
    match value {
        Some(p) if p.is_finite() && p >= 0.0 => p,
        _ => 0.0,
    }
}
