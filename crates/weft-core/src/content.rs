//! The content-capture capability.
//!
//! The hosting environment captures a piece of markup once, at fragment or
//! slot construction time, and hands the engine a producer that yields a
//! fresh detached copy of that capture on every call. The engine never
//! inspects the content; it only routes it.

use std::rc::Rc;

/// Produces a fresh detached copy of captured content on demand.
///
/// Supplied once at fragment/slot construction and immutable for the
/// node's lifetime. Repeated resolutions of the same fragment reuse the
/// same capture, each call producing a new copy.
pub type ContentProducer<C> = Rc<dyn Fn() -> C>;

/// Capability over cloneable content: capture `content` once and clone it
/// per materialization.
pub fn captured<C: Clone + 'static>(content: C) -> ContentProducer<C> {
    Rc::new(move || content.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captured_yields_equal_copies() {
        let producer = captured("Header".to_string());
        assert_eq!((*producer)(), "Header");
        assert_eq!((*producer)(), "Header");
    }

    #[test]
    fn copies_are_detached() {
        let producer = captured(vec![1, 2, 3]);
        let mut first = (*producer)();
        first.push(4);
        assert_eq!((*producer)(), vec![1, 2, 3]);
    }
}
