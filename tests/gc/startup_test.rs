/*!
 * Collector Startup Tests
 * Verifies the one-shot installation wiring
 */

use leaktrace::{install, Collector, CollectorRuntime};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type FinalizerCallback = Box<dyn Fn() + Send + Sync>;
type WarningSink = Box<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
struct FakeRuntime {
    initialized: AtomicBool,
    on_demand: AtomicBool,
    pending: AtomicUsize,
    invoked: AtomicUsize,
    callback: Mutex<Option<FinalizerCallback>>,
    warn_sink: Mutex<Option<WarningSink>>,
}

impl FakeRuntime {
    /// Simulate the collector deciding that finalizers are due
    fn signal_finalizers_ready(&self) {
        let slot = self.callback.lock().unwrap();
        let callback = slot.as_ref().expect("No finalizer callback installed");
        callback();
    }

    fn warn(&self, message: &str) {
        let slot = self.warn_sink.lock().unwrap();
        let sink = slot.as_ref().expect("No warning sink installed");
        sink(message);
    }
}

impl Collector for FakeRuntime {
    fn has_pending_finalizers(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    fn invoke_pending_finalizers(&self) {
        self.pending.fetch_sub(1, Ordering::SeqCst);
        self.invoked.fetch_add(1, Ordering::SeqCst);
    }
}

impl CollectorRuntime for FakeRuntime {
    fn initialize(&self) {
        self.initialized.store(true, Ordering::SeqCst);
    }

    fn set_finalizer_callback(&self, callback: FinalizerCallback) {
        *self.callback.lock().unwrap() = Some(callback);
    }

    fn set_warning_sink(&self, sink: WarningSink) {
        *self.warn_sink.lock().unwrap() = Some(sink);
    }

    fn set_finalize_on_demand(&self, on_demand: bool) {
        self.on_demand.store(on_demand, Ordering::SeqCst);
    }
}

#[test]
fn test_install_wires_collector_startup_effects() {
    let collector = Arc::new(FakeRuntime::default());
    let notifier = install(Arc::clone(&collector));

    assert!(collector.initialized.load(Ordering::SeqCst));
    assert!(collector.on_demand.load(Ordering::SeqCst));
    assert!(collector.callback.lock().unwrap().is_some());
    assert!(collector.warn_sink.lock().unwrap().is_some());
    assert_eq!(notifier.depth(), 0);
}

#[test]
fn test_installed_callback_drains_through_the_notifier() {
    let collector = Arc::new(FakeRuntime::default());
    let notifier = install(Arc::clone(&collector));

    collector.pending.store(2, Ordering::SeqCst);
    collector.signal_finalizers_ready();

    assert_eq!(collector.invoked.load(Ordering::SeqCst), 2);
    assert!(!collector.has_pending_finalizers());
    assert_eq!(notifier.depth(), 0);
}

#[test]
fn test_installed_warning_sink_swallows_messages() {
    let collector = Arc::new(FakeRuntime::default());
    let _notifier = install(Arc::clone(&collector));

    // Must be a no-op rather than a panic or output
    collector.warn("GC Warning: repeated allocation of very large block");
}
