//! Utility helpers shared across the page scripts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is pure or reaches the browser only through a small
//! port (`timer::Scheduler`, `storage::KeyValueStore`), so the helpers stay
//! testable natively and harmless during server rendering.

pub mod animation;
pub mod clock;
pub mod debounce;
pub mod format;
pub mod storage;
pub mod theme;
pub mod timer;
