//! Environment-facing wiring facade.

use std::rc::Rc;

use weft_core::{ComposeConfig, ContentProducer};

use crate::fragment::FragmentNode;
use crate::host::HostNode;
use crate::slot::{RenderSink, SlotNode};

/// Creates and wires composition nodes sharing one [`ComposeConfig`].
///
/// The hosting template environment owns every node this facade returns
/// and drives the engine through a small contract:
/// - construct hosts parent-first, so a child host's escalation sees a
///   stable parent name and registry;
/// - call `set_name` once at creation with the declared initial value,
///   and again whenever the declared name changes dynamically;
/// - call `set_parent_host(None)` on every fragment and nested host
///   before the parent host is discarded.
///
/// The engine does not detect contract violations: a skipped teardown
/// leaves a stale registry entry behind, which reads as "not found"
/// rather than raising a failure.
pub struct Composer {
    config: Rc<ComposeConfig>,
}

impl Composer {
    pub fn new(config: ComposeConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }

    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    /// Create a host under `parent` (`None` for a root host). The host
    /// starts unnamed; name it with [`HostNode::set_name`].
    pub fn create_host<C>(&self, parent: Option<&Rc<HostNode<C>>>) -> Rc<HostNode<C>> {
        let host = HostNode::new(Rc::clone(&self.config));
        host.set_parent_host(parent);
        host
    }

    /// Create a fragment around captured content and register it into
    /// `host` under `name`.
    pub fn create_fragment<C>(
        &self,
        host: Option<&Rc<HostNode<C>>>,
        name: &str,
        producer: ContentProducer<C>,
    ) -> Rc<FragmentNode<C>> {
        let fragment = FragmentNode::new(producer);
        fragment.set_name(name);
        fragment.set_parent_host(host);
        fragment
    }

    /// Create a slot enclosed by `host` and render it once under `name`.
    /// A slot created without a host renders its default content.
    pub fn create_slot<C>(
        &self,
        host: Option<&Rc<HostNode<C>>>,
        name: &str,
        default_content: ContentProducer<C>,
        sink: RenderSink<C>,
    ) -> Rc<SlotNode<C>> {
        let slot = SlotNode::new(host, default_content, sink);
        slot.set_name(name);
        slot
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(ComposeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use weft_core::captured;

    /// Panel output assembled from per-slot cells, standing in for the
    /// environment's mounted DOM.
    fn cell_sink(cell: &Rc<RefCell<String>>) -> RenderSink<String> {
        let cell = Rc::clone(cell);
        Box::new(move |content| *cell.borrow_mut() = content)
    }

    #[test]
    fn basic_panel_scenario() {
        // A panel template: one host, a `header` slot defaulting to
        // "Header" and a `footer` slot defaulting to "Footer". The
        // calling markup supplies fragments for `header` and for a name
        // no slot uses.
        let composer = Composer::default();
        let panel = composer.create_host::<String>(None);
        // The environment keeps fragments alive; the registry only holds
        // weak references.
        let _supplied =
            composer.create_fragment(Some(&panel), "header", captured("My header".to_string()));
        let _unused =
            composer.create_fragment(Some(&panel), "unknown", captured("missing".to_string()));

        let header = Rc::new(RefCell::new(String::new()));
        let footer = Rc::new(RefCell::new(String::new()));
        composer.create_slot(
            Some(&panel),
            "header",
            captured("Header".to_string()),
            cell_sink(&header),
        );
        composer.create_slot(
            Some(&panel),
            "footer",
            captured("Footer".to_string()),
            cell_sink(&footer),
        );

        assert_eq!(*header.borrow(), "My header");
        assert_eq!(*footer.borrow(), "Footer");

        let output = format!("{}|{}", header.borrow(), footer.borrow());
        assert!(!output.contains("missing"));
    }

    #[test]
    fn nested_panel_scenario() {
        // Outer panel template contains an inner header template with its
        // own host named "header" and a `title` slot inside it. Fragments
        // for the inner slot are supplied at the outer scope under the
        // namespaced name.
        let composer = Composer::default();
        let panel = composer.create_host::<String>(None);
        let header_host = composer.create_host(Some(&panel));
        header_host.set_name(Some("header".to_string()));

        let _title =
            composer.create_fragment(Some(&panel), "header.title", captured("My header".to_string()));
        let _nested =
            composer.create_fragment(Some(&panel), "header.unknown", captured("missing".to_string()));
        let _stray =
            composer.create_fragment(Some(&panel), "unknown", captured("missing".to_string()));

        let title = Rc::new(RefCell::new(String::new()));
        composer.create_slot(
            Some(&header_host),
            "title",
            captured(String::new()),
            cell_sink(&title),
        );

        // No fragment anywhere matches `footer`: the lookup escalates as
        // `header.footer`, fails at the root, and the slot falls back to
        // its default.
        let footer = Rc::new(RefCell::new(String::new()));
        composer.create_slot(
            Some(&header_host),
            "footer",
            captured("Footer".to_string()),
            cell_sink(&footer),
        );

        assert_eq!(*title.borrow(), "My header");
        assert_eq!(*footer.borrow(), "Footer");

        let output = format!("{}|{}", title.borrow(), footer.borrow());
        assert!(!output.contains("missing"));
    }

    #[test]
    fn short_form_registration_at_inner_host() {
        // A fragment registered directly at the named inner host needs no
        // prefix to reach a slot under that host.
        let composer = Composer::default();
        let panel = composer.create_host::<String>(None);
        let header_host = composer.create_host(Some(&panel));
        header_host.set_name(Some("header".to_string()));

        let _direct = composer.create_fragment(
            Some(&header_host),
            "title",
            captured("Direct".to_string()),
        );

        let title = Rc::new(RefCell::new(String::new()));
        composer.create_slot(
            Some(&header_host),
            "title",
            captured("Default".to_string()),
            cell_sink(&title),
        );

        assert_eq!(*title.borrow(), "Direct");
    }

    #[test]
    fn second_registration_shadows_first() {
        let composer = Composer::default();
        let panel = composer.create_host::<String>(None);
        let _first = composer.create_fragment(Some(&panel), "title", captured("first".to_string()));
        let _second = composer.create_fragment(Some(&panel), "title", captured("second".to_string()));

        let title = Rc::new(RefCell::new(String::new()));
        composer.create_slot(
            Some(&panel),
            "title",
            captured("Default".to_string()),
            cell_sink(&title),
        );

        assert_eq!(*title.borrow(), "second");
    }

    #[test]
    fn teardown_restores_default_on_next_render() {
        let composer = Composer::default();
        let panel = composer.create_host::<String>(None);
        let fragment =
            composer.create_fragment(Some(&panel), "title", captured("supplied".to_string()));

        let out = Rc::new(RefCell::new(String::new()));
        let slot = composer.create_slot(
            Some(&panel),
            "title",
            captured("Default".to_string()),
            cell_sink(&out),
        );
        assert_eq!(*out.borrow(), "supplied");

        fragment.set_parent_host(None);
        slot.set_name("other");
        slot.set_name("title");
        assert_eq!(*out.borrow(), "Default");
    }
}
