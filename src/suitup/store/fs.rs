use std::fs;
use std::path::{Path, PathBuf};

use super::CatalogStore;
use crate::company::CompanyProfile;
use crate::error::{CatalogError, Result};
use crate::model::{RawSuit, SuitRecord};

const CATALOG_FILE: &str = "catalog.json";
const COMPANY_FILE: &str = "company.json";

/// File-backed store: a directory holding `catalog.json` (array of suits,
/// camelCase keys, the legacy storage shape) and `company.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(CATALOG_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CatalogError::Io)?;
        }
        Ok(())
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> Result<Vec<RawSuit>> {
        let path = self.catalog_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let raw: Vec<RawSuit> =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(raw)
    }

    fn save(&mut self, suits: &[SuitRecord]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(suits).map_err(CatalogError::Serialization)?;
        fs::write(self.catalog_path(), content).map_err(CatalogError::Io)?;
        Ok(())
    }

    fn load_company(&self) -> Result<CompanyProfile> {
        let path = self.root.join(COMPANY_FILE);
        if !path.exists() {
            return Ok(CompanyProfile::default());
        }
        let content = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let profile: CompanyProfile =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(profile)
    }

    fn save_company(&mut self, profile: &CompanyProfile) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(profile).map_err(CatalogError::Serialization)?;
        fs::write(self.root.join(COMPANY_FILE), content).map_err(CatalogError::Io)?;
        Ok(())
    }
}
