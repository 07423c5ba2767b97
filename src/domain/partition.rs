//! Logical partition records

use super::element::{parse_int, DomainElement, UOM_NAMESPACE};
use super::errors::DecodeError;
use serde::{Deserialize, Serialize};

/// A logical partition (LPAR) as reported by `/rest/api/uom/LogicalPartition`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogicalPartition {
    /// `PartitionName`
    pub name: String,

    /// `PartitionID`, the numeric slot on the managed system
    pub id: i64,

    /// `PartitionUUID`
    pub uuid: String,

    /// `LogicalSerialNumber`
    pub logical_serial_number: String,

    /// `OperatingSystemVersion`
    pub os_version: String,

    /// `AllowPerformanceDataCollection`, kept as the raw "true"/"false" text
    pub allow_performance_data_collection: String,
}

impl LogicalPartition {
    /// Create a partition record with just a name and UUID
    pub fn new(name: impl Into<String>, uuid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uuid: uuid.into(),
            ..Default::default()
        }
    }
}

impl DomainElement for LogicalPartition {
    const NAMESPACE: &'static str = UOM_NAMESPACE;
    const LOCAL_NAME: &'static str = "LogicalPartition";

    fn assign(&mut self, field: &str, text: &str) -> Result<(), DecodeError> {
        match field {
            "PartitionName" => self.name = text.to_string(),
            "PartitionID" => self.id = parse_int::<Self>(field, text)?,
            "PartitionUUID" => self.uuid = text.to_string(),
            "LogicalSerialNumber" => self.logical_serial_number = text.to_string(),
            "OperatingSystemVersion" => self.os_version = text.to_string(),
            "AllowPerformanceDataCollection" => {
                self.allow_performance_data_collection = text.to_string()
            }
            _ => {}
        }
        Ok(())
    }
}
