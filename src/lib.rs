/*!
 * Leaktrace Library
 * Raw-allocation leak tracking and finalizer-notification glue for a
 * managed runtime's native support layer
 */

pub mod core;
#[cfg(feature = "finalizers")]
pub mod gc;
pub mod registry;

// Re-exports
pub use crate::core::types::{Address, SiteTag};
#[cfg(feature = "finalizers")]
pub use gc::{install, Collector, CollectorRuntime, FinalizerNotifier};
pub use registry::{
    env_verbose, fatal, AllocRegistry, AllocationRecord, LeakReport, RegistryError, RegistryResult,
};
