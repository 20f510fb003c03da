//! Segment trie backing the per-method route tables.
//!
//! Each node stands for one segment position. A node whose `pattern` is set
//! terminates a registered pattern; every other node only routes through.

use crate::path::SegmentKind;

/// A node of the segment trie.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Full registered pattern, empty unless a pattern ends here.
    pattern: String,
    /// Segment text this node was created from.
    part: String,
    /// Kind of `part`, fixed at creation.
    kind: Option<SegmentKind>,
    /// Children in insertion order.
    children: Vec<Node>,
}

impl Node {
    /// Creates an empty root node.
    pub fn new() -> Self {
        Self::default()
    }

    fn child(part: &str) -> Self {
        Self {
            pattern: String::new(),
            part: part.to_string(),
            kind: Some(SegmentKind::of(part)),
            children: Vec::new(),
        }
    }

    /// Returns the registered pattern ending at this node, if any.
    pub fn pattern(&self) -> Option<&str> {
        if self.pattern.is_empty() {
            None
        } else {
            Some(&self.pattern)
        }
    }

    /// Returns the segment text of this node (empty for the root).
    pub fn part(&self) -> &str {
        &self.part
    }

    /// Returns the children of this node in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn is_wildcard(&self) -> bool {
        self.kind.is_some_and(SegmentKind::is_wildcard)
    }

    fn is_catch_all(&self) -> bool {
        self.kind == Some(SegmentKind::CatchAll)
    }

    /// Index of the child to descend into when inserting `part`:
    /// an exact literal match, else the first wildcard child.
    fn insertion_child(&self, part: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|c| c.part == part)
            .or_else(|| self.children.iter().position(Node::is_wildcard))
    }

    /// Inserts `pattern`, whose parsed segments are `parts`, below this node.
    ///
    /// `depth` is the index into `parts` this node corresponds to; callers
    /// start at the root with `0`.
    pub fn insert(&mut self, pattern: &str, parts: &[&str], depth: usize) {
        if depth == parts.len() {
            self.pattern = pattern.to_string();
            return;
        }

        let part = parts[depth];
        let idx = match self.insertion_child(part) {
            Some(idx) => idx,
            None => {
                self.children.push(Self::child(part));
                self.children.len() - 1
            }
        };

        self.children[idx].insert(pattern, parts, depth + 1);
    }

    /// Finds the node terminating a registered pattern that matches the
    /// concrete request segments `parts`.
    ///
    /// Children are tried in insertion order and the first subtree that
    /// produces a match wins.
    pub fn search(&self, parts: &[&str], depth: usize) -> Option<&Node> {
        if depth == parts.len() || self.is_catch_all() {
            return self.pattern().map(|_| self);
        }

        let part = parts[depth];
        self.children
            .iter()
            .filter(|c| c.part == part || c.is_wildcard())
            .find_map(|c| c.search(parts, depth + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::parse_pattern;

    fn tree(patterns: &[&str]) -> Node {
        let mut root = Node::new();
        for p in patterns {
            root.insert(p, &parse_pattern(p), 0);
        }
        root
    }

    fn find<'a>(root: &'a Node, path: &str) -> Option<&'a str> {
        root.search(&parse_pattern(path), 0)
            .and_then(Node::pattern)
    }

    #[test]
    fn test_shared_prefix_shares_nodes() {
        let root = tree(&["/p/:lang/doc", "/p/:lang/intro", "/p/book"]);
        assert_eq!(root.children().len(), 1);
        let p = &root.children()[0];
        assert_eq!(p.part(), "p");
        // "book" reuses the existing wildcard child at this depth
        assert_eq!(p.children().len(), 1);
        assert_eq!(p.children()[0].children().len(), 2);
    }

    #[test]
    fn test_root_pattern() {
        let root = tree(&["/"]);
        assert_eq!(find(&root, "/"), Some("/"));
        assert_eq!(find(&root, "/a"), None);
    }

    #[test]
    fn test_static_and_param() {
        let root = tree(&["/hello", "/p/:lang/doc"]);
        assert_eq!(find(&root, "/hello"), Some("/hello"));
        assert_eq!(find(&root, "/p/go/doc"), Some("/p/:lang/doc"));
        assert_eq!(find(&root, "/p/go"), None);
        assert_eq!(find(&root, "/p/go/doc/more"), None);
    }

    #[test]
    fn test_intermediate_node_is_not_a_match() {
        let root = tree(&["/a/b/c"]);
        assert_eq!(find(&root, "/a"), None);
        assert_eq!(find(&root, "/a/b"), None);
        assert_eq!(find(&root, "/a/b/c"), Some("/a/b/c"));
    }

    #[test]
    fn test_catch_all_absorbs_rest() {
        let root = tree(&["/static/*filepath"]);
        assert_eq!(find(&root, "/static/css/app.css"), Some("/static/*filepath"));
        assert_eq!(find(&root, "/static/a"), Some("/static/*filepath"));
        assert_eq!(find(&root, "/static"), None);
    }

    #[test]
    fn test_first_inserted_sibling_wins() {
        let root = tree(&["/x/:id", "/y/static", "/y/:id"]);
        assert_eq!(find(&root, "/y/static"), Some("/y/static"));
        assert_eq!(find(&root, "/y/other"), Some("/y/:id"));
    }

    #[test]
    fn test_backtracks_into_later_sibling() {
        let root = tree(&["/a/b/c", "/:x/z"]);
        assert_eq!(root.children().len(), 2);
        assert_eq!(find(&root, "/a/z"), Some("/:x/z"));
        assert_eq!(find(&root, "/a/b/c"), Some("/a/b/c"));
        assert_eq!(find(&root, "/q/z"), Some("/:x/z"));
    }

    #[test]
    fn test_reinsert_is_idempotent() {
        let mut root = tree(&["/hello"]);
        root.insert("/hello", &parse_pattern("/hello"), 0);
        assert_eq!(root.children().len(), 1);
        assert_eq!(find(&root, "/hello"), Some("/hello"));
    }
}
