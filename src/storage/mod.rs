//! Persistence
//!
//! The model store never loads or saves itself. A [`ModelStorage`]
//! implementation supplies the optional startup collections and writes the
//! final collections back on shutdown.

pub mod json;
pub mod records;

pub use json::JsonModelStorage;

use crate::domain::{Athlete, Contract, Organization};
use crate::error::StorageError;
use crate::model::{ModelSnapshot, ModelStore};

/// Persistence port for the three entity collections.
///
/// `Ok(None)` means the collection has never been saved.
pub trait ModelStorage {
    fn read_athletes(&self) -> Result<Option<Vec<Athlete>>, StorageError>;
    fn read_organizations(&self) -> Result<Option<Vec<Organization>>, StorageError>;
    fn read_contracts(&self) -> Result<Option<Vec<Contract>>, StorageError>;
    fn save(&self, snapshot: &ModelSnapshot) -> Result<(), StorageError>;
}

/// Build the startup model from storage.
///
/// Any read failure starts from three empty collections. Otherwise the
/// orphaned-contract gate of [`ModelStore::from_collections`] applies.
pub fn load_model(storage: &dyn ModelStorage) -> ModelStore {
    let loaded = storage.read_athletes().and_then(|athletes| {
        let organizations = storage.read_organizations()?;
        let contracts = storage.read_contracts()?;
        Ok((athletes, contracts, organizations))
    });

    match loaded {
        Ok((athletes, contracts, organizations)) => {
            let had_contracts = contracts.as_ref().is_some_and(|c| !c.is_empty());
            let store = ModelStore::from_collections(athletes, contracts, organizations);
            if had_contracts && store.contracts().is_empty() {
                tracing::warn!(
                    "Contracts found without athletes or organizations, starting with empty data"
                );
            }
            tracing::info!(
                athletes = store.athletes().len(),
                organizations = store.organizations().len(),
                contracts = store.contracts().len(),
                "Model loaded"
            );
            store
        }
        Err(e) => {
            tracing::warn!("Failed to load data files: {}, starting with empty data", e);
            ModelStore::new()
        }
    }
}
