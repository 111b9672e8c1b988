//! Error types for the Weft engine.

use thiserror::Error;

/// Why a fragment name failed to resolve.
///
/// Resolution failure is an ordinary outcome on the slot path — slots fall
/// back to their default content via `find_fragment`, which returns an
/// `Option`. This type exists for environments that want to know *why* a
/// name did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The name matched no fragment anywhere up the host chain. The path
    /// carries every namespace prefix added while escalating.
    #[error("no fragment registered under '{path}'")]
    NotFound { path: String },

    /// Escalation reached a host with no usable name. The name cannot be
    /// prefixed, so the lookup stops at that host.
    #[error("cannot escalate '{path}' through an unnamed host")]
    UnnamedHost { path: String },
}
