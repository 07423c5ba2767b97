//! HMC REST paths and media types

/// Logon endpoint, relative to the base URL
pub const LOGON_PATH: &str = "/rest/api/web/Logon";

/// Root of the "uom" resource collections
pub const UOM_ROOT: &str = "/rest/api/uom";

/// Content-Type of the logon request body
pub const LOGON_REQUEST_MEDIA_TYPE: &str =
    "application/vnd.ibm.powervm.web+xml; type=LogonRequest";

/// Accept header sent with the logon request
pub const LOGON_RESPONSE_MEDIA_TYPE: &str =
    "application/vnd.ibm.powervm.web+xml; type=LogonResponse";

/// Accept header for Atom feed GETs
pub const FEED_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Header the HMC records in its audit log for each logon
pub const AUDIT_MEMENTO_HEADER: &str = "X-Audit-Memento";

/// Resource type of logical partitions
pub const LOGICAL_PARTITION: &str = "LogicalPartition";

/// Resource type of shared storage pools
pub const SHARED_STORAGE_POOL: &str = "SharedStoragePool";

/// Path of a resource collection, e.g. `/rest/api/uom/LogicalPartition`
pub fn resource_path(resource_type: &str) -> String {
    format!("{UOM_ROOT}/{resource_type}")
}

/// Path of a search over a resource collection
///
/// Produces `/rest/api/uom/{Type}/search/({Field}=={value})`. Only `value` is
/// percent-encoded: names made of letters, digits, `-`, `_`, `.` and `~` are
/// sent unchanged, while anything that would break the path (space, `/`,
/// `?`, `#`, `)` ...) is escaped.
///
/// ```
/// use hmc_client::adapters::hmc::paths::search_path;
///
/// assert_eq!(
///     search_path("SharedStoragePool", "StoragePoolName", "ssp_01"),
///     "/rest/api/uom/SharedStoragePool/search/(StoragePoolName==ssp_01)"
/// );
/// ```
pub fn search_path(resource_type: &str, field: &str, value: &str) -> String {
    format!(
        "{UOM_ROOT}/{resource_type}/search/({field}=={})",
        urlencoding::encode(value)
    )
}
