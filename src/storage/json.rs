//! JSON file storage: one pretty-printed document per entity type.

use super::records::{
    AthleteDocument, AthleteRecord, ContractDocument, ContractRecord, OrganizationDocument,
    OrganizationRecord,
};
use super::ModelStorage;
use crate::domain::{Athlete, Contract, Organization};
use crate::error::StorageError;
use crate::model::ModelSnapshot;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const ATHLETES_FILE: &str = "athletes.json";
pub const ORGANIZATIONS_FILE: &str = "organizations.json";
pub const CONTRACTS_FILE: &str = "contracts.json";

/// Stores `athletes.json`, `organizations.json` and `contracts.json` in one directory.
#[derive(Debug, Clone)]
pub struct JsonModelStorage {
    data_dir: PathBuf,
}

impl JsonModelStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn athletes_path(&self) -> PathBuf {
        self.data_dir.join(ATHLETES_FILE)
    }

    pub fn organizations_path(&self) -> PathBuf {
        self.data_dir.join(ORGANIZATIONS_FILE)
    }

    pub fn contracts_path(&self) -> PathBuf {
        self.data_dir.join(CONTRACTS_FILE)
    }

    fn read_document<D: DeserializeOwned>(path: &Path) -> Result<Option<D>, StorageError> {
        if !path.exists() {
            tracing::debug!("Data file not found: {}", path.display());
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        let document = serde_json::from_str(&content).map_err(|e| {
            tracing::error!("Failed to parse data file {}: {}", path.display(), e);
            StorageError::Serialization(e)
        })?;
        Ok(Some(document))
    }

    /// Serialize `document` into a `.tmp` sibling of `path` and return the sibling.
    fn stage_document<D: Serialize>(path: &Path, document: &D) -> Result<PathBuf, StorageError> {
        let content = serde_json::to_string_pretty(document)?;
        let tmp_path = path.with_extension("json.tmp");
        let mut file = std::fs::File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        Ok(tmp_path)
    }

    /// Stage every document before renaming any, so a failed save leaves the
    /// previous files in place.
    fn commit_documents(&self, snapshot: &ModelSnapshot) -> Result<(), StorageError> {
        let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(3);
        let result = self.stage_all(snapshot, &mut staged);
        if let Err(e) = result {
            for (tmp_path, _) in &staged {
                let _ = std::fs::remove_file(tmp_path);
            }
            tracing::error!("Failed to stage data files in {}: {}", self.data_dir.display(), e);
            return Err(e);
        }
        for (tmp_path, path) in &staged {
            std::fs::rename(tmp_path, path)?;
            tracing::debug!("Wrote data file {}", path.display());
        }
        Ok(())
    }

    fn stage_all(
        &self,
        snapshot: &ModelSnapshot,
        staged: &mut Vec<(PathBuf, PathBuf)>,
    ) -> Result<(), StorageError> {
        let path = self.athletes_path();
        let document = AthleteDocument {
            athletes: snapshot.athletes.iter().map(AthleteRecord::from).collect(),
        };
        staged.push((Self::stage_document(&path, &document)?, path));

        let path = self.organizations_path();
        let document = OrganizationDocument {
            organizations: snapshot
                .organizations
                .iter()
                .map(OrganizationRecord::from)
                .collect(),
        };
        staged.push((Self::stage_document(&path, &document)?, path));

        let path = self.contracts_path();
        let document = ContractDocument {
            contracts: snapshot.contracts.iter().map(ContractRecord::from).collect(),
        };
        staged.push((Self::stage_document(&path, &document)?, path));
        Ok(())
    }
}

/// Convert records, rejecting any two that share an identity.
fn convert_unique<R, E>(
    records: Vec<R>,
    kind: &str,
    same: impl Fn(&E, &E) -> bool,
) -> Result<Vec<E>, StorageError>
where
    E: TryFrom<R, Error = StorageError>,
{
    let mut entities: Vec<E> = Vec::with_capacity(records.len());
    for record in records {
        let entity = E::try_from(record)?;
        if entities.iter().any(|existing| same(existing, &entity)) {
            return Err(StorageError::Integrity(format!(
                "{} list contains duplicate entries",
                kind
            )));
        }
        entities.push(entity);
    }
    Ok(entities)
}

impl ModelStorage for JsonModelStorage {
    fn read_athletes(&self) -> Result<Option<Vec<Athlete>>, StorageError> {
        Self::read_document::<AthleteDocument>(&self.athletes_path())?
            .map(|doc| convert_unique(doc.athletes, "Athlete", Athlete::is_same_athlete))
            .transpose()
    }

    fn read_organizations(&self) -> Result<Option<Vec<Organization>>, StorageError> {
        Self::read_document::<OrganizationDocument>(&self.organizations_path())?
            .map(|doc| {
                convert_unique(
                    doc.organizations,
                    "Organization",
                    Organization::is_same_organization,
                )
            })
            .transpose()
    }

    fn read_contracts(&self) -> Result<Option<Vec<Contract>>, StorageError> {
        Self::read_document::<ContractDocument>(&self.contracts_path())?
            .map(|doc| convert_unique(doc.contracts, "Contract", Contract::is_same_contract))
            .transpose()
    }

    fn save(&self, snapshot: &ModelSnapshot) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.data_dir)?;
        self.commit_documents(snapshot)?;
        tracing::info!(data_dir = %self.data_dir.display(), "Model saved");
        Ok(())
    }
}
