/*!
 * Collector Traits
 * Capabilities the injected garbage collector must expose
 */

/// Finalizer-queue capability consumed by the notifier
pub trait Collector: Send + Sync {
    /// Whether the collector has finalizers queued and ready to run
    fn has_pending_finalizers(&self) -> bool;

    /// Run the currently pending finalizers. Running one may enqueue more,
    /// and may reenter the installed finalizer callback.
    fn invoke_pending_finalizers(&self);
}

/// Startup-time control surface of the collector
pub trait CollectorRuntime: Collector {
    /// One-time collector initialization
    fn initialize(&self);

    /// Install the "finalizers are ready" callback
    fn set_finalizer_callback(&self, callback: Box<dyn Fn() + Send + Sync>);

    /// Install the warning sink
    fn set_warning_sink(&self, sink: Box<dyn Fn(&str) + Send + Sync>);

    /// Switch between on-demand and automatic finalizer invocation
    fn set_finalize_on_demand(&self, on_demand: bool);
}
