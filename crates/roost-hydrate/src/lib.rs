//! Client-side hydration glue for the Roost dashboard, framework-free.
//!
//! Two small mechanisms that keep server-rendered and client-rendered markup
//! in agreement:
//!
//! - [`AttributeSanitizer`] — a level-triggered reconciliation loop that
//!   keeps a marker attribute (injected by an interfering browser extension)
//!   off every element, no matter how often it is re-added.
//! - [`Deferred`] — a two-state render wrapper that shows a stable fallback
//!   until the first client mount commits, so the first client paint is
//!   byte-identical to the server's.
//!
//! Both operate over an explicit [`Document`] model and a mutation journal
//! rather than any particular UI framework's lifecycle hooks.

pub mod deferred;
pub mod document;
pub mod mutation;
pub mod sanitizer;

pub use deferred::Deferred;
pub use document::{Document, NodeId};
pub use mutation::{AttributeObserver, MutationRecord};
pub use sanitizer::AttributeSanitizer;
