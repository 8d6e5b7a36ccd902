/*!
 * Tracking Stub
 * No-op registry linked when the "tracking" feature is disabled
 */

use super::types::{LeakReport, RegistryResult};
use crate::core::types::{Address, SiteTag};
use std::io;

/// Zero-cost stand-in for the live registry. Identical signatures, no state,
/// no tracking, no output.
#[derive(Clone, Default)]
pub struct AllocRegistry;

impl AllocRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn register(&self, _address: Address, _site: SiteTag) -> RegistryResult<()> {
        Ok(())
    }

    pub fn unregister(&self, _address: Address) -> RegistryResult<()> {
        Ok(())
    }

    pub fn live_count(&self) -> usize {
        0
    }

    pub fn is_tracked(&self, _address: Address) -> bool {
        false
    }

    pub fn snapshot(&self) -> LeakReport {
        LeakReport {
            records: Vec::new(),
        }
    }

    pub fn write_report<W: io::Write>(&self, _verbose: bool, _out: &mut W) -> io::Result<()> {
        Ok(())
    }

    pub fn report(&self, _verbose: bool) {}
}
