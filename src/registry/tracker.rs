/*!
 * Allocation Tracker
 * Live registry of raw allocations guarded by a short-critical-section lock
 */

use super::types::{AllocationRecord, LeakReport, RegistryError, RegistryResult};
use crate::core::types::{Address, SiteTag};
use log::debug;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// Allocation registry
///
/// Records every interesting raw allocation together with the call site that
/// made it. Cloning shares the underlying record table, so every call site
/// holds a handle to the same process-wide registry instance.
pub struct AllocRegistry {
    /// Live records, most recently registered last. Mutated only under the
    /// lock; removal hands the record out of the critical section before it
    /// is dropped.
    records: Arc<Mutex<Vec<AllocationRecord>>>,
}

impl AllocRegistry {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record a fresh raw allocation.
    ///
    /// Registering an address twice without an intervening [`unregister`]
    /// is a caller bug; the registry does not deduplicate.
    ///
    /// [`unregister`]: AllocRegistry::unregister
    pub fn register(&self, address: Address, site: SiteTag) -> RegistryResult<()> {
        let mut records = self.records.lock();
        records
            .try_reserve(1)
            .map_err(|_| RegistryError::OutOfMemory { address })?;
        records.push(AllocationRecord::new(address, site));
        debug!("tracking 0x{:x} from {}", address, site);
        Ok(())
    }

    /// Drop the record for a freed allocation.
    ///
    /// The scan runs newest-to-oldest, so if an address was (wrongly)
    /// registered twice the most recent record goes first. The removed
    /// record is dropped only after the lock is released.
    pub fn unregister(&self, address: Address) -> RegistryResult<()> {
        let removed = {
            let mut records = self.records.lock();
            let at = records
                .iter()
                .rposition(|r| r.address == address)
                .ok_or(RegistryError::UnknownAddress(address))?;
            records.remove(at)
        };
        debug!("untracked 0x{:x} from {}", removed.address, removed.site);
        Ok(())
    }

    /// Number of allocations currently tracked
    pub fn live_count(&self) -> usize {
        self.records.lock().len()
    }

    /// Check whether an address has a live record
    pub fn is_tracked(&self, address: Address) -> bool {
        self.records.lock().iter().any(|r| r.address == address)
    }

    /// Snapshot of outstanding records, most recently registered first.
    ///
    /// Takes the lock. The shutdown report is expected to run after all
    /// other threads have quiesced, but locking here costs nothing when
    /// that holds and stays correct when it does not.
    pub fn snapshot(&self) -> LeakReport {
        let records = self.records.lock();
        LeakReport {
            records: records.iter().rev().copied().collect(),
        }
    }

    /// Write the shutdown leak report to the given stream. Silent when
    /// nothing is outstanding.
    pub fn write_report<W: io::Write>(&self, verbose: bool, out: &mut W) -> io::Result<()> {
        self.snapshot().write_to(verbose, out)
    }

    /// Write the shutdown leak report to the process diagnostic stream.
    pub fn report(&self, verbose: bool) {
        // Write errors on stderr at shutdown have nowhere useful to go
        let _ = self.write_report(verbose, &mut io::stderr());
    }
}

impl Clone for AllocRegistry {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl Default for AllocRegistry {
    fn default() -> Self {
        Self::new()
    }
}
