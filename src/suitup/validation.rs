//! Rental validation rules.
//!
//! A suit submission either carries no rental attachment at all or a
//! complete one. The trigger is any customer/rental field being filled in:
//! from that point on, customer name, phone, e-mail and both dates are
//! required, the phone must match the fixed mask and the e-mail must be
//! syntactically valid. Independently of the trigger, the return date may
//! never precede the delivery date.
//!
//! Validation runs where a user-edited record is submitted (create or
//! edit), before the record reaches [`crate::model::repair`]. Failures are
//! reported per field so the caller can surface them next to the offending
//! input; nothing is mutated on failure.
//!
//! The checks are a fixed pipeline of explicit rules rather than a schema
//! chain, and the messages are the user-facing Portuguese strings shown by
//! the CLI.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dates;
use crate::model::RawSuit;

/// Brazilian phone mask: 2-digit area code, 5-digit prefix, 4-digit line.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\d{2}\) \d{5}-\d{4}$").expect("valid regex"));

/// Minimal syntactic e-mail shape: something@something.something
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Code,
    Name,
    CustomerName,
    CustomerPhone,
    CustomerEmail,
    DeliveryDate,
    ReturnDate,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Code => "código",
            Field::Name => "nome",
            Field::CustomerName => "nome do cliente",
            Field::CustomerPhone => "telefone do cliente",
            Field::CustomerEmail => "e-mail do cliente",
            Field::DeliveryDate => "data de entrega",
            Field::ReturnDate => "data de devolução",
        }
    }
}

/// A validation failure attached to a specific field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

/// A suit submission as typed by the user: free text everywhere, empty
/// strings for fields left blank.
#[derive(Debug, Clone, Default)]
pub struct SuitDraft {
    /// Present when editing an existing record, absent on create.
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub photo_url: String,
    pub purchase_date: String,
    pub suit_price: f64,
    pub rental_price: f64,
    pub delivery_date: String,
    pub return_date: String,
    pub observations: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub is_returned: bool,
}

impl SuitDraft {
    /// Convert a validated draft into the raw boundary shape. Fields that
    /// are empty after trimming become absent; this is the detachment
    /// signal for optional fields like observations.
    pub fn into_raw(self) -> RawSuit {
        RawSuit {
            id: opt(self.id.unwrap_or_default()),
            code: opt(self.code),
            name: opt(self.name),
            photo_url: Some(self.photo_url.trim().to_string()),
            purchase_date: opt(self.purchase_date),
            suit_price: Some(self.suit_price),
            rental_price: Some(self.rental_price),
            delivery_date: opt(self.delivery_date),
            return_date: opt(self.return_date),
            observations: opt(self.observations),
            customer_name: opt(self.customer_name),
            customer_phone: opt(self.customer_phone),
            customer_email: opt(self.customer_email),
            is_returned: Some(self.is_returned),
        }
    }
}

fn opt(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validate a submission. On success, returns the cleaned draft (strings
/// trimmed, `is_returned` gated on the customer name). On failure, returns
/// every field error found.
pub fn validate(draft: &SuitDraft) -> Result<SuitDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = draft.name.trim();
    let code = draft.code.trim();
    let customer_name = draft.customer_name.trim();
    let customer_phone = draft.customer_phone.trim();
    let customer_email = draft.customer_email.trim();
    let delivery_date = draft.delivery_date.trim();
    let return_date = draft.return_date.trim();

    if name.chars().count() < 3 {
        errors.push(FieldError::new(
            Field::Name,
            "O nome deve ter pelo menos 3 caracteres.",
        ));
    }
    if code.is_empty() {
        errors.push(FieldError::new(Field::Code, "O código é obrigatório."));
    }

    let attempting_rental = !customer_name.is_empty()
        || !customer_phone.is_empty()
        || !customer_email.is_empty()
        || !delivery_date.is_empty()
        || !return_date.is_empty();

    if attempting_rental {
        if customer_name.is_empty() {
            errors.push(FieldError::new(
                Field::CustomerName,
                "O nome do cliente é obrigatório para registrar um aluguel.",
            ));
        }

        if customer_phone.is_empty() {
            errors.push(FieldError::new(
                Field::CustomerPhone,
                "O telefone do cliente é obrigatório para registrar um aluguel.",
            ));
        } else if !PHONE_PATTERN.is_match(customer_phone) {
            errors.push(FieldError::new(
                Field::CustomerPhone,
                "Formato de telefone inválido. Use (XX) XXXXX-XXXX.",
            ));
        }

        if customer_email.is_empty() {
            errors.push(FieldError::new(
                Field::CustomerEmail,
                "O e-mail do cliente é obrigatório para registrar um aluguel.",
            ));
        } else if !EMAIL_PATTERN.is_match(customer_email) {
            errors.push(FieldError::new(
                Field::CustomerEmail,
                "Endereço de e-mail inválido.",
            ));
        }

        if delivery_date.is_empty() {
            errors.push(FieldError::new(
                Field::DeliveryDate,
                "A data de entrega é obrigatória para aluguel.",
            ));
        } else if dates::parse_iso(delivery_date).is_none() {
            errors.push(FieldError::new(
                Field::DeliveryDate,
                "Data inválida. Use o formato AAAA-MM-DD.",
            ));
        }

        if return_date.is_empty() {
            errors.push(FieldError::new(
                Field::ReturnDate,
                "A data de devolução é obrigatória para aluguel.",
            ));
        } else if dates::parse_iso(return_date).is_none() {
            errors.push(FieldError::new(
                Field::ReturnDate,
                "Data inválida. Use o formato AAAA-MM-DD.",
            ));
        }
    }

    // Independent of the trigger: ordering of the two dates.
    if let (Some(delivery), Some(ret)) = (
        dates::parse_iso(delivery_date),
        dates::parse_iso(return_date),
    ) {
        if ret < delivery {
            errors.push(FieldError::new(
                Field::ReturnDate,
                "A data de devolução não pode ser anterior à data de entrega.",
            ));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(SuitDraft {
        id: draft.id.clone(),
        code: code.to_string(),
        name: name.to_string(),
        photo_url: draft.photo_url.trim().to_string(),
        purchase_date: draft.purchase_date.trim().to_string(),
        suit_price: draft.suit_price,
        rental_price: draft.rental_price,
        delivery_date: delivery_date.to_string(),
        return_date: return_date.to_string(),
        observations: draft.observations.trim().to_string(),
        customer_name: customer_name.to_string(),
        customer_phone: customer_phone.to_string(),
        customer_email: customer_email.to_string(),
        is_returned: !customer_name.is_empty() && draft.is_returned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_draft() -> SuitDraft {
        SuitDraft {
            code: "S001".to_string(),
            name: "Classic Black Tuxedo".to_string(),
            purchase_date: "2023-01-15".to_string(),
            suit_price: 500.0,
            rental_price: 80.0,
            ..Default::default()
        }
    }

    fn rental_draft() -> SuitDraft {
        SuitDraft {
            customer_name: "John Doe".to_string(),
            customer_phone: "(11) 91234-5678".to_string(),
            customer_email: "john.doe@example.com".to_string(),
            delivery_date: "2024-07-20".to_string(),
            return_date: "2024-07-22".to_string(),
            ..base_draft()
        }
    }

    fn fields_of(errors: &[FieldError]) -> Vec<Field> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn accepts_a_suit_without_rental() {
        assert!(validate(&base_draft()).is_ok());
    }

    #[test]
    fn accepts_a_complete_rental() {
        assert!(validate(&rental_draft()).is_ok());
    }

    #[test]
    fn rejects_short_name_and_missing_code() {
        let draft = SuitDraft {
            code: "".to_string(),
            name: "ab".to_string(),
            ..Default::default()
        };
        let errors = validate(&draft).unwrap_err();
        let fields = fields_of(&errors);
        assert!(fields.contains(&Field::Name));
        assert!(fields.contains(&Field::Code));
    }

    #[test]
    fn phone_alone_triggers_the_full_attachment() {
        // A phone with no customer name fails on every other rental field
        let draft = SuitDraft {
            customer_phone: "(11) 91234-5678".to_string(),
            ..base_draft()
        };
        let errors = validate(&draft).unwrap_err();
        let fields = fields_of(&errors);

        assert!(fields.contains(&Field::CustomerName));
        assert!(fields.contains(&Field::CustomerEmail));
        assert!(fields.contains(&Field::DeliveryDate));
        assert!(fields.contains(&Field::ReturnDate));
        assert!(!fields.contains(&Field::CustomerPhone));
    }

    #[test]
    fn delivery_date_alone_triggers_the_attachment() {
        let draft = SuitDraft {
            delivery_date: "2024-07-20".to_string(),
            ..base_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert!(fields_of(&errors).contains(&Field::CustomerName));
    }

    #[test]
    fn rejects_phone_outside_the_mask() {
        for phone in ["555-1234", "(11) 1234-5678", "11912345678", "(1) 91234-5678"] {
            let draft = SuitDraft {
                customer_phone: phone.to_string(),
                ..rental_draft()
            };
            let errors = validate(&draft).unwrap_err();
            assert!(
                fields_of(&errors).contains(&Field::CustomerPhone),
                "{phone} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["john", "john@", "@example.com", "john@example", "a b@c.d"] {
            let draft = SuitDraft {
                customer_email: email.to_string(),
                ..rental_draft()
            };
            let errors = validate(&draft).unwrap_err();
            assert!(
                fields_of(&errors).contains(&Field::CustomerEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_return_before_delivery() {
        let draft = SuitDraft {
            delivery_date: "2024-07-22".to_string(),
            return_date: "2024-07-20".to_string(),
            ..rental_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::ReturnDate);
    }

    #[test]
    fn accepts_same_day_delivery_and_return() {
        let draft = SuitDraft {
            delivery_date: "2024-07-22".to_string(),
            return_date: "2024-07-22".to_string(),
            ..rental_draft()
        };
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn rejects_unparseable_dates() {
        let draft = SuitDraft {
            delivery_date: "20/07/2024".to_string(),
            return_date: "someday".to_string(),
            ..rental_draft()
        };
        let errors = validate(&draft).unwrap_err();
        let fields = fields_of(&errors);
        assert!(fields.contains(&Field::DeliveryDate));
        assert!(fields.contains(&Field::ReturnDate));
    }

    #[test]
    fn success_trims_every_string_field() {
        let draft = SuitDraft {
            code: "  S001 ".to_string(),
            name: "  Classic Black Tuxedo ".to_string(),
            customer_name: " John Doe ".to_string(),
            customer_phone: " (11) 91234-5678 ".to_string(),
            customer_email: " john.doe@example.com ".to_string(),
            delivery_date: " 2024-07-20 ".to_string(),
            return_date: " 2024-07-22 ".to_string(),
            observations: "  includes bow tie  ".to_string(),
            ..base_draft()
        };
        let cleaned = validate(&draft).unwrap();
        assert_eq!(cleaned.code, "S001");
        assert_eq!(cleaned.customer_name, "John Doe");
        assert_eq!(cleaned.observations, "includes bow tie");
    }

    #[test]
    fn is_returned_forced_false_without_customer() {
        let draft = SuitDraft {
            is_returned: true,
            ..base_draft()
        };
        let cleaned = validate(&draft).unwrap();
        assert!(!cleaned.is_returned);
    }

    #[test]
    fn is_returned_kept_with_customer() {
        let draft = SuitDraft {
            is_returned: true,
            ..rental_draft()
        };
        let cleaned = validate(&draft).unwrap();
        assert!(cleaned.is_returned);
    }

    #[test]
    fn into_raw_drops_empty_fields() {
        let raw = base_draft().into_raw();
        assert!(raw.customer_name.is_none());
        assert!(raw.observations.is_none());
        assert_eq!(raw.code.as_deref(), Some("S001"));
    }
}
