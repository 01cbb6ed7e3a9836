use crate::commands::{CmdMessage, CmdResult};
use crate::company::CompanyProfile;
use crate::error::Result;
use crate::store::CatalogStore;

/// Partial update of the company profile; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct CompanyUpdate {
    pub name: Option<String>,
    pub address_street: Option<String>,
    pub address_number: Option<String>,
    pub address_complement: Option<String>,
    pub address_neighborhood: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub cnpj: Option<String>,
    pub logo_url: Option<String>,
    pub show_cnpj_on_receipt: Option<bool>,
    pub show_address_on_receipt: Option<bool>,
}

impl CompanyUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address_street.is_none()
            && self.address_number.is_none()
            && self.address_complement.is_none()
            && self.address_neighborhood.is_none()
            && self.address_city.is_none()
            && self.address_state.is_none()
            && self.address_zip.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.cnpj.is_none()
            && self.logo_url.is_none()
            && self.show_cnpj_on_receipt.is_none()
            && self.show_address_on_receipt.is_none()
    }

    fn apply(self, profile: &mut CompanyProfile) {
        if let Some(v) = self.name {
            profile.name = v;
        }
        if let Some(v) = self.address_street {
            profile.address_street = v;
        }
        if let Some(v) = self.address_number {
            profile.address_number = v;
        }
        if let Some(v) = self.address_complement {
            profile.address_complement = v;
        }
        if let Some(v) = self.address_neighborhood {
            profile.address_neighborhood = v;
        }
        if let Some(v) = self.address_city {
            profile.address_city = v;
        }
        if let Some(v) = self.address_state {
            profile.address_state = v;
        }
        if let Some(v) = self.address_zip {
            profile.address_zip = v;
        }
        if let Some(v) = self.phone {
            profile.phone = v;
        }
        if let Some(v) = self.email {
            profile.email = v;
        }
        if let Some(v) = self.cnpj {
            profile.cnpj = if v.trim().is_empty() { None } else { Some(v) };
        }
        if let Some(v) = self.logo_url {
            profile.logo_url = if v.trim().is_empty() { None } else { Some(v) };
        }
        if let Some(v) = self.show_cnpj_on_receipt {
            profile.show_cnpj_on_receipt = v;
        }
        if let Some(v) = self.show_address_on_receipt {
            profile.show_address_on_receipt = v;
        }
    }
}

/// Show the stored profile, or apply a partial update first.
pub fn run<S: CatalogStore>(store: &mut S, update: CompanyUpdate) -> Result<CmdResult> {
    let mut profile = store.load_company()?;

    let mut result = CmdResult::default();
    if !update.is_empty() {
        update.apply(&mut profile);
        store.save_company(&profile)?;
        result.add_message(CmdMessage::success("Dados da empresa atualizados."));
    }

    result.company = Some(profile);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn show_without_update_returns_the_stored_profile() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, CompanyUpdate::default()).unwrap();
        assert_eq!(result.company, Some(CompanyProfile::default()));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn partial_update_keeps_other_fields() {
        let mut store = InMemoryStore::new();
        run(
            &mut store,
            CompanyUpdate {
                name: Some("Aluguel de Ternos Silva".to_string()),
                address_city: Some("São Paulo".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let result = run(
            &mut store,
            CompanyUpdate {
                phone: Some("(11) 4002-8922".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let profile = result.company.unwrap();
        assert_eq!(profile.name, "Aluguel de Ternos Silva");
        assert_eq!(profile.phone, "(11) 4002-8922");
    }

    #[test]
    fn blank_cnpj_clears_the_field() {
        let mut store = InMemoryStore::new();
        run(
            &mut store,
            CompanyUpdate {
                cnpj: Some("12.345.678/0001-90".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        let result = run(
            &mut store,
            CompanyUpdate {
                cnpj: Some("".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(result.company.unwrap().cnpj, None);
    }
}
