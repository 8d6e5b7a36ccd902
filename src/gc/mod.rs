/*!
 * Collector Glue
 * Finalizer notification bridge for a conservative garbage collector
 */

mod notifier;
mod startup;
mod traits;

pub use notifier::FinalizerNotifier;
pub use startup::install;
pub use traits::{Collector, CollectorRuntime};
