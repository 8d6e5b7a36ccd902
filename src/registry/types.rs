/*!
 * Registry Types
 * Records, errors and report data for allocation tracking
 */

use crate::core::types::{Address, SiteTag};
use serde::Serialize;
use thiserror::Error;

/// Registry operation result
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry errors
///
/// Every variant is a caller contract violation; there is no recoverable
/// failure in this subsystem. See [`crate::registry::fatal`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("out of memory: cannot allocate tracking record for 0x{address:x}")]
    OutOfMemory { address: Address },

    #[error("free() of a never-allocated object: 0x{0:x}")]
    UnknownAddress(Address),
}

/// One live-allocation record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllocationRecord {
    pub address: Address,
    pub site: SiteTag,
}

impl AllocationRecord {
    pub fn new(address: Address, site: SiteTag) -> Self {
        Self { address, site }
    }
}

/// Snapshot of outstanding allocations, most recently registered first
#[derive(Debug, Clone, Serialize)]
pub struct LeakReport {
    pub records: Vec<AllocationRecord>,
}
