//! Dotted-path helpers.
//!
//! Fragment names are namespaced by prepending ancestor host names during
//! lookup escalation: a slot `title` inside a host named `header` is
//! addressed from the enclosing scope as `header.title`.

/// Prepend a namespace segment to a name.
pub fn prepend(segment: &str, name: &str, delimiter: &str) -> String {
    let mut path = String::with_capacity(segment.len() + delimiter.len() + name.len());
    path.push_str(segment);
    path.push_str(delimiter);
    path.push_str(name);
    path
}
