//! Slot nodes: placeholder consumers inside a host's template.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;
use weft_core::ContentProducer;

use crate::host::HostNode;

/// Environment callback that replaces a slot's currently displayed
/// content with a freshly materialized copy (full clear-then-insert, no
/// incremental diff). Must not call back into the slot.
pub type RenderSink<C> = Box<dyn FnMut(C)>;

/// A placeholder that resolves a name to either a matching fragment or
/// its own default content.
///
/// A slot carries no state across resolutions beyond its current name,
/// which is only used to short-circuit redundant re-renders. Resolution
/// goes through the immediate enclosing host; any further escalation is
/// handled inside [`HostNode::find_fragment`]. A slot constructed without
/// an enclosing host always renders its default content.
pub struct SlotNode<C> {
    name: RefCell<Option<String>>,
    host: Option<Weak<HostNode<C>>>,
    default_content: ContentProducer<C>,
    sink: RefCell<RenderSink<C>>,
}

impl<C> SlotNode<C> {
    pub fn new(
        host: Option<&Rc<HostNode<C>>>,
        default_content: ContentProducer<C>,
        sink: RenderSink<C>,
    ) -> Rc<Self> {
        Rc::new(Self {
            name: RefCell::new(None),
            host: host.map(Rc::downgrade),
            default_content,
            sink: RefCell::new(sink),
        })
    }

    pub fn name(&self) -> Option<String> {
        self.name.borrow().clone()
    }

    /// Point this slot at `name`, resolving and rendering.
    ///
    /// No-op when `name` is the slot's current name, so unrelated
    /// attribute churn causes no re-render. Otherwise exactly one
    /// materialized value is pushed into the sink: the matching
    /// fragment's content, or the slot's own default when nothing
    /// resolves.
    pub fn set_name(&self, name: &str) {
        if self.name.borrow().as_deref() == Some(name) {
            return;
        }
        *self.name.borrow_mut() = Some(name.to_string());
        self.render(name);
    }

    fn render(&self, name: &str) {
        let host = self.host.as_ref().and_then(Weak::upgrade);
        let fragment = host.as_ref().and_then(|host| host.find_fragment(name));
        let mut sink = self.sink.borrow_mut();
        match fragment {
            Some(fragment) => fragment.materialize(|content| (*sink)(content)),
            None => {
                debug!(name = %name, "no fragment matched, rendering slot default");
                (*sink)((*self.default_content)());
            }
        }
    }
}

impl<C> fmt::Debug for SlotNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotNode")
            .field("name", &self.name.borrow())
            .finish_non_exhaustive()
    }
}
