//! Hierarchical named-slot content composition.
//!
//! This crate routes externally supplied content ("fragments") into
//! placeholder regions ("slots") declared inside nested, independently
//! authored templates. It handles:
//! - The tree of named scopes ([`HostNode`]) with per-host fragment
//!   registries
//! - The fragment registration/rename/reparent lifecycle ([`FragmentNode`])
//! - Upward dotted-path name resolution: a fragment supplied several
//!   component levels up reaches a slot buried inside inner scopes
//! - Slot-side resolution and fallback to default content ([`SlotNode`])
//!
//! The hosting template environment owns every node (`Rc`); the engine
//! keeps only weak references between them. All mutation is synchronous
//! and single-threaded; the node types are deliberately `!Send`.
//!
//! Markup parsing, change notification, and actual mounting of content
//! belong to the hosting environment, which drives the engine through the
//! contract documented on [`Composer`].

mod composer;
mod fragment;
mod host;
mod slot;

pub use composer::Composer;
pub use fragment::FragmentNode;
pub use host::HostNode;
pub use slot::{RenderSink, SlotNode};
