//! Helpers for building paths in the coordination service's namespace.

/// Joins a parent node path and a child name into a canonical path.
///
/// The namespace is forward-slash delimited; joining under the root node does
/// not double the separator.
pub fn join_node(parent: &str, child: &str) -> String {
    if parent.ends_with('/') {
        format!("{parent}{child}")
    } else {
        format!("{parent}/{child}")
    }
}
