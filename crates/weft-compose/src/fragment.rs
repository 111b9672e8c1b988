//! Fragment nodes: externally supplied content registered into a host.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;
use weft_core::ContentProducer;

use crate::host::HostNode;

/// A named piece of externally supplied content.
///
/// A fragment is registered into at most one host at a time, under its
/// current name. Renaming or reparenting keeps that registration
/// consistent: the old entry is removed before either field changes and
/// the new entry is added after, so lookup never observes a stale key.
///
/// The content producer is supplied once at construction and fixed for
/// the fragment's lifetime; the environment must call
/// [`set_parent_host(None)`](Self::set_parent_host) before discarding the
/// fragment's host.
pub struct FragmentNode<C> {
    me: Weak<FragmentNode<C>>,
    name: RefCell<Option<String>>,
    host: RefCell<Option<Weak<HostNode<C>>>>,
    producer: ContentProducer<C>,
}

impl<C> FragmentNode<C> {
    /// Create an unregistered fragment around captured content.
    pub fn new(producer: ContentProducer<C>) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            me: me.clone(),
            name: RefCell::new(None),
            host: RefCell::new(None),
            producer,
        })
    }

    pub fn name(&self) -> Option<String> {
        self.name.borrow().clone()
    }

    pub fn parent_host(&self) -> Option<Rc<HostNode<C>>> {
        self.host.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Move this fragment to another host (or unregister it with `None`).
    ///
    /// No-op when `host` is the current host. Otherwise the registration
    /// under the current name is removed from the old host before the
    /// reference changes and re-added to the new host after.
    pub fn set_parent_host(&self, host: Option<&Rc<HostNode<C>>>) {
        let current = self.parent_host();
        match (&current, host) {
            (Some(old), Some(new)) if Rc::ptr_eq(old, new) => return,
            (None, None) => return,
            _ => {}
        }
        let name = self.name.borrow().clone();
        if let (Some(old), Some(name)) = (&current, name.as_deref()) {
            old.remove_fragment(name);
        }
        *self.host.borrow_mut() = host.map(Rc::downgrade);
        if let (Some(new), Some(name)) = (host, name.as_deref()) {
            self.register_into(new, name);
        }
    }

    /// Rename this fragment, atomically moving its registration.
    ///
    /// No-op when `name` equals the current name. Otherwise the old entry
    /// is removed before the name changes and the new one added after, so
    /// immediately after the call the old name no longer resolves to this
    /// fragment and the new name does.
    pub fn set_name(&self, name: impl Into<String>) {
        let name = name.into();
        let old = self.name.borrow().clone();
        if old.as_deref() == Some(name.as_str()) {
            return;
        }
        let host = self.parent_host();
        if let (Some(host), Some(old)) = (&host, old.as_deref()) {
            host.remove_fragment(old);
        }
        trace!(old = ?old, new = %name, "fragment renamed");
        *self.name.borrow_mut() = Some(name.clone());
        if let Some(host) = &host {
            self.register_into(host, &name);
        }
    }

    /// Materialize a fresh detached copy of the captured content.
    ///
    /// The capture happened once at construction; every call hands
    /// `render` a new copy of it.
    pub fn materialize(&self, render: impl FnOnce(C)) {
        render((*self.producer)());
    }

    fn register_into(&self, host: &Rc<HostNode<C>>, name: &str) {
        if let Some(me) = self.me.upgrade() {
            host.set_fragment(name, &me);
        }
    }
}

impl<C> fmt::Debug for FragmentNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FragmentNode")
            .field("name", &self.name.borrow())
            .finish_non_exhaustive()
    }
}
