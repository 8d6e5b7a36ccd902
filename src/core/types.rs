/*!
 * Core Types
 * Common types used across the tracker
 */

/// Address of a tracked allocation. An identity key only; the registry
/// never dereferences it.
pub type Address = usize;

/// Call-site tag recorded with each allocation (diagnostic only, never a key)
pub type SiteTag = &'static str;
