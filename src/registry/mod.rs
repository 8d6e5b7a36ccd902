/*!
 * Allocation Registry
 *
 * Tracks provenance of raw (non-garbage-collected) allocations to detect
 * leaks and double-frees. Active only with the "tracking" feature (default);
 * without it an identically-shaped no-op stub is linked instead, so call
 * sites compile unchanged in non-diagnostic builds.
 */

mod report;
mod types;

#[cfg(feature = "tracking")]
mod tracker;
#[cfg(feature = "tracking")]
pub use tracker::AllocRegistry;

#[cfg(not(feature = "tracking"))]
mod stub;
#[cfg(not(feature = "tracking"))]
pub use stub::AllocRegistry;

pub use report::env_verbose;
pub use types::{AllocationRecord, LeakReport, RegistryError, RegistryResult};

use log::error;

/// Escalate a registry contract violation to process termination.
///
/// Both registry failure modes are programmer errors, not recoverable
/// conditions. Call sites that want the strict abort-on-violation contract
/// route errors here; test harnesses intercept the typed error instead.
pub fn fatal(err: RegistryError) -> ! {
    error!("{err}");
    std::process::abort()
}
