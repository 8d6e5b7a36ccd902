/*!
 * Finalizer Notifier
 * Recursion-depth-guarded dispatcher for the collector's finalizer queue
 */

use super::traits::Collector;
use log::trace;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Finalizer notifier
///
/// Installed once as the collector's "finalizers are ready" callback. Only
/// the outermost invocation drains the queue; invocations that reenter while
/// a drain is already on the stack return immediately and leave the
/// remaining work to the outer one. Draining in the nested call would
/// duplicate work and risk unbounded stack growth.
pub struct FinalizerNotifier<C: Collector> {
    collector: Arc<C>,
    /// 0 idle, 1 single active drain, >1 nested reentry
    depth: AtomicUsize,
}

impl<C: Collector> FinalizerNotifier<C> {
    pub fn new(collector: Arc<C>) -> Self {
        Self {
            collector,
            depth: AtomicUsize::new(0),
        }
    }

    /// Collector callback entry point.
    ///
    /// Precondition: the collector serializes callback invocations, so
    /// reentry happens on the current call stack rather than from another
    /// thread. The depth counter is atomic so a collector that breaks the
    /// guarantee still observes consistent values, but the drain loop is
    /// only meaningful in the serialized case.
    pub fn notify(&self) {
        self.depth.fetch_add(1, Ordering::AcqRel);
        while self.collector.has_pending_finalizers() {
            if self.depth.load(Ordering::Acquire) > 1 {
                // An outer notify() further down the stack resumes the
                // drain when control returns to it.
                trace!("nested finalizer notification deferred");
                break;
            }
            self.collector.invoke_pending_finalizers();
        }
        self.depth.fetch_sub(1, Ordering::AcqRel);
    }

    /// Current notification depth (0 when idle)
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Acquire)
    }

    /// The collector this notifier drains
    pub fn collector(&self) -> &Arc<C> {
        &self.collector
    }
}
