//! Host nodes: named scopes with a local fragment registry.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use tracing::{debug, trace};
use weft_core::{path, ComposeConfig, ResolveError};

use crate::fragment::FragmentNode;

/// A named scope node in the composition tree.
///
/// A host indexes the fragments registered directly under it and can
/// escalate a failed lookup to its parent host, prefixing the looked-up
/// name with its own name. A host never owns a fragment's lifetime; the
/// registry holds weak references only, and the parent reference is weak
/// as well — the hosting environment owns the nodes.
pub struct HostNode<C> {
    config: Rc<ComposeConfig>,
    name: RefCell<Option<String>>,
    parent: RefCell<Option<Weak<HostNode<C>>>>,
    fragments: RefCell<IndexMap<String, Weak<FragmentNode<C>>>>,
}

impl<C> HostNode<C> {
    /// Create a host with no parent and no name yet.
    pub fn new(config: Rc<ComposeConfig>) -> Rc<Self> {
        Rc::new(Self {
            config,
            name: RefCell::new(None),
            parent: RefCell::new(None),
            fragments: RefCell::new(IndexMap::new()),
        })
    }

    /// Current name, used as a namespace segment during escalation.
    pub fn name(&self) -> Option<String> {
        self.name.borrow().clone()
    }

    /// Rename this host.
    ///
    /// Resolution is computed fresh on every query, so renaming does not
    /// migrate anything registered under paths built from the old name.
    pub fn set_name(&self, name: Option<String>) {
        *self.name.borrow_mut() = name;
    }

    pub fn parent_host(&self) -> Option<Rc<HostNode<C>>> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Swap the parent reference. No side effects beyond the swap.
    pub fn set_parent_host(&self, parent: Option<&Rc<HostNode<C>>>) {
        *self.parent.borrow_mut() = parent.map(Rc::downgrade);
    }

    /// Register `fragment` under `name`, silently overwriting any previous
    /// entry under that name (last write wins).
    pub fn set_fragment(&self, name: impl Into<String>, fragment: &Rc<FragmentNode<C>>) {
        let name = name.into();
        trace!(name = %name, "register fragment");
        self.fragments
            .borrow_mut()
            .insert(name, Rc::downgrade(fragment));
    }

    /// Local lookup only; never escalates. A stale entry left behind by an
    /// environment that skipped teardown reads as absent.
    pub fn fragment(&self, name: &str) -> Option<Rc<FragmentNode<C>>> {
        self.fragments.borrow().get(name).and_then(Weak::upgrade)
    }

    /// Drop the registration under `name`. No-op when absent.
    pub fn remove_fragment(&self, name: &str) {
        if self.fragments.borrow_mut().shift_remove(name).is_some() {
            trace!(name = %name, "remove fragment");
        }
    }

    /// Find a fragment by name starting from this host and up the chain.
    ///
    /// Suppose a template uses a host named `a` that contains another
    /// template with a host named `b`, which contains a slot `title`. A
    /// fragment meant for that slot and supplied at `a`'s scope must be
    /// registered under `b.title`; one registered directly at `b` is
    /// reachable as plain `title`. So with the fragment registered at the
    /// outer host:
    /// - `outer.find_fragment("b.title")` resolves it;
    /// - `inner.find_fragment("title")` resolves it (escalates as
    ///   `b.title`);
    /// - `inner.fragment("title")` and `inner.find_fragment("b.title")`
    ///   do not.
    ///
    /// A local match always wins; escalation stops at the first host with
    /// no parent. Escalating through a host whose name is unset (or empty)
    /// fails rather than fabricating a placeholder path segment.
    pub fn find_fragment(&self, name: &str) -> Option<Rc<FragmentNode<C>>> {
        self.resolve(name).ok()
    }

    /// [`find_fragment`](Self::find_fragment) with a diagnosable failure.
    pub fn resolve(&self, name: &str) -> Result<Rc<FragmentNode<C>>, ResolveError> {
        if let Some(fragment) = self.fragment(name) {
            return Ok(fragment);
        }
        let Some(parent) = self.parent_host() else {
            return Err(ResolveError::NotFound {
                path: name.to_string(),
            });
        };
        let prefixed = match self.name.borrow().as_deref() {
            Some(segment) if !segment.is_empty() => {
                path::prepend(segment, name, &self.config.delimiter)
            }
            _ => {
                debug!(path = %name, "escalation stopped at unnamed host");
                return Err(ResolveError::UnnamedHost {
                    path: name.to_string(),
                });
            }
        };
        debug!(path = %prefixed, "escalating lookup to parent host");
        parent.resolve(&prefixed)
    }
}

impl<C> fmt::Debug for HostNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostNode")
            .field("name", &self.name.borrow())
            .field(
                "fragments",
                &self.fragments.borrow().keys().collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
