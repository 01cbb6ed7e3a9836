//! Company profile used on rental receipts.
//!
//! The catalog core treats this as an opaque parameter: it is loaded,
//! edited through the `company` command, and handed to the receipt
//! renderer. None of the rental invariants depend on it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address_street: String,
    #[serde(default)]
    pub address_number: String,
    #[serde(default)]
    pub address_complement: String,
    #[serde(default)]
    pub address_neighborhood: String,
    #[serde(default)]
    pub address_city: String,
    /// Two-letter state code, e.g. "SP".
    #[serde(default)]
    pub address_state: String,
    /// CEP, `XXXXX-XXX`.
    #[serde(default)]
    pub address_zip: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(default = "default_true")]
    pub show_cnpj_on_receipt: bool,
    #[serde(default = "default_true")]
    pub show_address_on_receipt: bool,
}

fn default_true() -> bool {
    true
}

// The receipt toggles start enabled, so a profile that was never configured
// still prints a complete header.
impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            address_street: String::new(),
            address_number: String::new(),
            address_complement: String::new(),
            address_neighborhood: String::new(),
            address_city: String::new(),
            address_state: String::new(),
            address_zip: String::new(),
            phone: String::new(),
            email: String::new(),
            cnpj: None,
            logo_url: None,
            show_cnpj_on_receipt: true,
            show_address_on_receipt: true,
        }
    }
}

impl CompanyProfile {
    /// Single-line postal address, skipping empty parts.
    pub fn address_line(&self) -> String {
        let mut parts = Vec::new();
        if !self.address_street.is_empty() {
            let mut street = self.address_street.clone();
            if !self.address_number.is_empty() {
                street.push_str(", ");
                street.push_str(&self.address_number);
            }
            if !self.address_complement.is_empty() {
                street.push_str(" - ");
                street.push_str(&self.address_complement);
            }
            parts.push(street);
        }
        if !self.address_neighborhood.is_empty() {
            parts.push(self.address_neighborhood.clone());
        }
        if !self.address_city.is_empty() {
            let mut city = self.address_city.clone();
            if !self.address_state.is_empty() {
                city.push_str("/");
                city.push_str(&self.address_state);
            }
            parts.push(city);
        }
        if !self.address_zip.is_empty() {
            parts.push(format!("CEP {}", self.address_zip));
        }
        parts.join(" - ")
    }

    /// Fallback shop name when no profile was configured.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "SuitUp Aluguel"
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_line_skips_empty_parts() {
        let profile = CompanyProfile {
            address_street: "Rua Augusta".to_string(),
            address_number: "123".to_string(),
            address_city: "São Paulo".to_string(),
            address_state: "SP".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.address_line(), "Rua Augusta, 123 - São Paulo/SP");
    }

    #[test]
    fn empty_profile_has_empty_address_and_fallback_name() {
        let profile = CompanyProfile::default();
        assert_eq!(profile.address_line(), "");
        assert_eq!(profile.display_name(), "SuitUp Aluguel");
    }

    #[test]
    fn toggles_default_on_for_legacy_profiles() {
        let profile: CompanyProfile = serde_json::from_str(r#"{"name":"Loja"}"#).unwrap();
        assert!(profile.show_cnpj_on_receipt);
        assert!(profile.show_address_on_receipt);
    }
}
