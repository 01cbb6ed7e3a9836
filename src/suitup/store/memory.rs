use super::CatalogStore;
use crate::company::CompanyProfile;
use crate::error::{CatalogError, Result};
use crate::model::{RawSuit, SuitRecord};

/// In-memory store for testing command logic without filesystem I/O.
///
/// `set_simulate_write_error` makes every write fail, which is how the
/// best-effort persistence policy gets exercised in tests.
#[derive(Default)]
pub struct InMemoryStore {
    suits: Vec<RawSuit>,
    company: CompanyProfile,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load raw records, e.g. legacy shapes that never saw `repair`.
    pub fn with_raw(suits: Vec<RawSuit>) -> Self {
        Self {
            suits,
            ..Default::default()
        }
    }

    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Vec<RawSuit>> {
        Ok(self.suits.clone())
    }

    fn save(&mut self, suits: &[SuitRecord]) -> Result<()> {
        if self.simulate_write_error {
            return Err(CatalogError::Store("Simulated write error".to_string()));
        }
        self.suits = suits.iter().cloned().map(RawSuit::from).collect();
        Ok(())
    }

    fn load_company(&self) -> Result<CompanyProfile> {
        Ok(self.company.clone())
    }

    fn save_company(&mut self, profile: &CompanyProfile) -> Result<()> {
        if self.simulate_write_error {
            return Err(CatalogError::Store("Simulated write error".to_string()));
        }
        self.company = profile.clone();
        Ok(())
    }
}
