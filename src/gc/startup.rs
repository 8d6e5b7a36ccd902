/*!
 * Collector Startup
 * One-shot installation of the notifier and collector knobs
 */

use super::notifier::FinalizerNotifier;
use super::traits::CollectorRuntime;
use log::info;
use std::sync::Arc;

/// Initialize the collector and wire the finalizer notifier into it.
///
/// Performs the three startup effects in order: collector initialization,
/// callback and warning-sink installation, and the switch to on-demand
/// finalizer invocation so that only the notifier ever triggers a drain.
/// Call once during collector startup; the notifier is the sole consumer
/// of the callback slot.
pub fn install<C>(collector: Arc<C>) -> Arc<FinalizerNotifier<C>>
where
    C: CollectorRuntime + 'static,
{
    collector.initialize();

    let notifier = Arc::new(FinalizerNotifier::new(Arc::clone(&collector)));
    let callback = Arc::clone(&notifier);
    collector.set_finalizer_callback(Box::new(move || callback.notify()));

    // The collector's own warnings are noise on the runtime's diagnostic
    // stream; swallow them.
    collector.set_warning_sink(Box::new(|_msg| {}));
    collector.set_finalize_on_demand(true);

    info!("finalizer notifier installed, on-demand finalization enabled");
    notifier
}
