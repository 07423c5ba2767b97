//! Shared storage pool records

use super::element::{parse_float, DomainElement, UOM_NAMESPACE};
use super::errors::DecodeError;
use serde::{Deserialize, Serialize};

/// A shared storage pool (SSP) as reported by `/rest/api/uom/SharedStoragePool`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedStoragePool {
    /// `StoragePoolName`
    pub name: String,

    /// `UniqueDeviceID`
    pub uuid: String,

    /// `Capacity` in GB
    pub capacity: f64,

    /// `FreeSpace` in GB
    pub free_space: f64,
}

impl DomainElement for SharedStoragePool {
    const NAMESPACE: &'static str = UOM_NAMESPACE;
    const LOCAL_NAME: &'static str = "SharedStoragePool";

    fn assign(&mut self, field: &str, text: &str) -> Result<(), DecodeError> {
        match field {
            "StoragePoolName" => self.name = text.to_string(),
            "UniqueDeviceID" => self.uuid = text.to_string(),
            "Capacity" => self.capacity = parse_float::<Self>(field, text)?,
            "FreeSpace" => self.free_space = parse_float::<Self>(field, text)?,
            _ => {}
        }
        Ok(())
    }
}
