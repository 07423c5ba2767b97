//! Table rendering for command output
//!
//! Rows are tab-indented with left-aligned, fixed-width columns. Values
//! longer than their column are printed whole and push the row right.

use crate::domain::{LogicalPartition, SharedStoragePool};
use std::fmt::Write;

/// Render logical partitions as a table with a header row
///
/// ```
/// use hmc_client::cli::output::lpar_table;
/// use hmc_client::domain::LogicalPartition;
///
/// let table = lpar_table(&[LogicalPartition::new("lpar1", "u1")]);
/// assert!(table.starts_with("\tpartition "));
/// assert!(table.lines().nth(1).unwrap().starts_with("\tlpar1     \tu1"));
/// ```
pub fn lpar_table(lpars: &[LogicalPartition]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\t{:<10}\t{:<40}\t{:<8}\t{:<25}",
        "partition", "UUID", "LSERIAL", "OS"
    );
    for lpar in lpars {
        let _ = writeln!(
            out,
            "\t{:<10}\t{:<40}\t{:<8}\t{:<25}",
            lpar.name, lpar.uuid, lpar.logical_serial_number, lpar.os_version
        );
    }
    out
}

/// Render shared storage pools as a table with a header row
///
/// Capacity and free space are printed with six decimals.
pub fn ssp_table(pools: &[SharedStoragePool]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\t{:<10}\t{:<68}\t{:<8}\t{:<25}",
        "name", "UUID", "Capacity", "FreeSpace"
    );
    for pool in pools {
        let _ = writeln!(
            out,
            "\t{:<10}\t{:<68}\t{:<8.6}\t{:<8.6}",
            pool.name, pool.uuid, pool.capacity, pool.free_space
        );
    }
    out
}

/// One UUID per line
pub fn uuid_lines<I>(uuids: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    uuids.into_iter().fold(String::new(), |mut out, uuid| {
        out.push_str(uuid.as_ref());
        out.push('\n');
        out
    })
}
