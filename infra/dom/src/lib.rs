//! # DOM
//!
//! A small headless document model used to render guide pages without a browser.
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by [`NodeId`].
//! Detached nodes stay in the arena but are invisible to queries and serialization,
//! so a stale [`NodeId`] is always safe to use, it simply no longer matches anything.
//!
//! * Element lookup by id, compound [`Selector`] queries and [`Document::closest`].
//! * Text content is escaped on output; [`Document::set_inner_html`] inserts trusted
//!   markup verbatim.
//! * [`Document::to_html`] serializes the whole page with a doctype.
//!
//! ## Example
//!
//! ```rust
//! use mguide_dom::{Document, Selector};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let chip = doc.append_element(body, "span");
//! doc.add_class(chip, "keyword");
//! doc.set_text(chip, "ritmo & pulso");
//!
//! assert_eq!(doc.query(&Selector::class("keyword")), Some(chip));
//! assert!(doc.to_html().contains("<span class=\"keyword\">ritmo &amp; pulso</span>"));
//! ```

mod html;
mod selector;

pub use crate::selector::Selector;

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Element payload: lower-case tag name plus attributes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element(Element),
    Text(String),
    /// Trusted markup inserted as-is.
    Raw(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An HTML document: `<html>` with a `<head>` and a `<body>`.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self { nodes: Vec::new(), root: NodeId(0), head: NodeId(0), body: NodeId(0) };
        doc.root = doc.create_element("html");
        doc.head = doc.append_element(doc.root, "head");
        doc.body = doc.append_element(doc.root, "body");
        doc
    }

    pub const fn root(&self) -> NodeId {
        self.root
    }

    pub const fn head(&self) -> NodeId {
        self.head
    }

    pub const fn body(&self) -> NodeId {
        self.body
    }

    // --- Construction ---

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(Element { tag: tag.to_ascii_lowercase(), attrs: Vec::new() }))
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()))
    }

    pub fn create_raw(&mut self, html: impl Into<String>) -> NodeId {
        self.push(NodeKind::Raw(html.into()))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { kind, parent: None, children: Vec::new() });
        id
    }

    /// Appends `child` as the last child of `parent`, moving it if it is attached elsewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.is_ancestor(child, parent) {
            return;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let el = self.create_element(tag);
        self.append_child(parent, el);
        el
    }

    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        let node = self.create_text(text);
        self.append_child(parent, node);
        node
    }

    pub fn append_raw(&mut self, parent: NodeId, html: impl Into<String>) -> NodeId {
        let node = self.create_raw(html);
        self.append_child(parent, node);
        node
    }

    /// Removes `node` from its parent. The subtree stays intact but disconnected.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    pub fn clear_children(&mut self, node: NodeId) {
        for child in std::mem::take(&mut self.nodes[node.0].children) {
            self.nodes[child.0].parent = None;
        }
    }

    pub fn replace_children(&mut self, node: NodeId, child: NodeId) {
        self.clear_children(node);
        self.append_child(node, child);
    }

    // --- Structure ---

    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node.0].kind
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Element children only, in order.
    pub fn child_elements(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node).iter().copied().filter(|&c| self.element(c).is_some()).collect()
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        match &self.nodes[node.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[node.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|el| el.tag.as_str())
    }

    /// `true` when the node is reachable from the document root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        node == self.root || self.is_ancestor(self.root, node)
    }

    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = self.nodes[node.0].parent;
        while let Some(p) = cur {
            if p == ancestor {
                return true;
            }
            cur = self.nodes[p.0].parent;
        }
        false
    }

    /// Pre-order descendants of `scope`, excluding `scope` itself.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    // --- Attributes ---

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.attr(node, name).is_some()
    }

    /// Sets an attribute; a no-op on text nodes.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        let Some(el) = self.element_mut(node) else { return };
        let value = value.into();
        let name = name.to_ascii_lowercase();
        match el.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => el.attrs.push((name, value)),
        }
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        if let Some(el) = self.element_mut(node) {
            el.attrs.retain(|(n, _)| n != name);
        }
    }

    /// Sets or clears a boolean attribute such as `hidden` or `open`.
    pub fn set_flag(&mut self, node: NodeId, name: &str, on: bool) {
        if on {
            self.set_attr(node, name, "");
        } else {
            self.remove_attr(node, name);
        }
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.has_attr(node, "hidden")
    }

    pub fn set_hidden(&mut self, node: NodeId, hidden: bool) {
        self.set_flag(node, "hidden", hidden);
    }

    pub fn is_open(&self, node: NodeId) -> bool {
        self.has_attr(node, "open")
    }

    pub fn set_open(&mut self, node: NodeId, open: bool) {
        self.set_flag(node, "open", open);
    }

    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.attr(node, "id")
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attr(node, "class").is_some_and(|c| c.split_whitespace().any(|x| x == class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if self.element(node).is_none() || self.has_class(node, class) {
            return;
        }
        let joined = match self.attr(node, "class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
            _ => class.to_owned(),
        };
        self.set_attr(node, "class", joined);
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        let Some(existing) = self.attr(node, "class") else { return };
        let kept: Vec<&str> = existing.split_whitespace().filter(|c| *c != class).collect();
        let kept = kept.join(" ");
        self.set_attr(node, "class", kept);
    }

    // --- Content ---

    /// Concatenated visible text of the subtree.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match self.kind(node) {
            NodeKind::Text(t) => out.push_str(t),
            NodeKind::Raw(html) => html::strip_tags(html, out),
            NodeKind::Element(_) => {
                for &child in self.children(node) {
                    self.collect_text(child, out);
                }
            },
        }
    }

    /// Replaces all children with a single text node (or nothing for an empty string).
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if self.element(node).is_none() {
            if let NodeKind::Text(t) = &mut self.nodes[node.0].kind {
                *t = text.into();
            }
            return;
        }
        self.clear_children(node);
        let text = text.into();
        if !text.is_empty() {
            self.append_text(node, text);
        }
    }

    /// Replaces all children with trusted markup.
    pub fn set_inner_html(&mut self, node: NodeId, html: impl Into<String>) {
        if self.element(node).is_none() {
            return;
        }
        self.clear_children(node);
        let html = html.into();
        if !html.is_empty() {
            self.append_raw(node, html);
        }
    }

    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(node) {
            html::write_node(self, child, &mut out);
        }
        out
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        html::write_node(self, node, &mut out);
        out
    }

    /// Serializes the whole document, doctype included.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>");
        html::write_node(self, self.root, &mut out);
        out
    }

    // --- Title ---

    pub fn title(&self) -> String {
        self.query_within(self.head, &Selector::tag("title"))
            .map(|t| self.text_content(t))
            .unwrap_or_default()
    }

    /// Sets `<title>`, creating it in `<head>` when missing.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let node = match self.query_within(self.head, &Selector::tag("title")) {
            Some(node) => node,
            None => self.append_element(self.head, "title"),
        };
        self.set_text(node, title);
    }

    // --- Queries ---

    pub fn matches(&self, node: NodeId, sel: &Selector) -> bool {
        let Some(el) = self.element(node) else { return false };
        if sel.tag.as_ref().is_some_and(|t| *t != el.tag) {
            return false;
        }
        if sel.id.as_deref().is_some_and(|id| self.id(node) != Some(id)) {
            return false;
        }
        if !sel.classes.iter().all(|c| self.has_class(node, c)) {
            return false;
        }
        sel.attrs.iter().all(|a| self.attr(node, a.name()).is_some_and(|v| a.accepts(v)))
    }

    /// First connected element with the given id, in document order.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root).into_iter().find(|&n| self.id(n) == Some(id))
    }

    pub fn query(&self, sel: &Selector) -> Option<NodeId> {
        self.query_within(self.root, sel)
    }

    pub fn query_all(&self, sel: &Selector) -> Vec<NodeId> {
        self.query_all_within(self.root, sel)
    }

    pub fn query_within(&self, scope: NodeId, sel: &Selector) -> Option<NodeId> {
        self.descendants(scope).into_iter().find(|&n| self.matches(n, sel))
    }

    pub fn query_all_within(&self, scope: NodeId, sel: &Selector) -> Vec<NodeId> {
        self.descendants(scope).into_iter().filter(|&n| self.matches(n, sel)).collect()
    }

    /// Nearest inclusive ancestor of `node` matching `sel`.
    pub fn closest(&self, node: NodeId, sel: &Selector) -> Option<NodeId> {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if self.matches(n, sel) {
                return Some(n);
            }
            cur = self.parent(n);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_head_and_body() {
        let doc = Document::new();
        assert_eq!(doc.tag(doc.root()), Some("html"));
        assert_eq!(doc.children(doc.root()), &[doc.head(), doc.body()]);
        assert_eq!(doc.to_html(), "<!DOCTYPE html><html><head></head><body></body></html>");
    }

    #[test]
    fn test_append_child_moves_node() {
        let mut doc = Document::new();
        let a = doc.append_element(doc.body(), "div");
        let b = doc.append_element(doc.body(), "div");
        let span = doc.append_element(a, "span");

        doc.append_child(b, span);
        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), &[span]);
        assert_eq!(doc.parent(span), Some(b));
    }

    #[test]
    fn test_append_child_refuses_cycles() {
        let mut doc = Document::new();
        let outer = doc.append_element(doc.body(), "div");
        let inner = doc.append_element(outer, "div");

        doc.append_child(inner, outer);
        assert_eq!(doc.parent(outer), Some(doc.body()));
        assert_eq!(doc.parent(inner), Some(outer));
    }

    #[test]
    fn test_class_list_operations() {
        let mut doc = Document::new();
        let el = doc.append_element(doc.body(), "div");
        doc.add_class(el, "card");
        doc.add_class(el, "example-card");
        doc.add_class(el, "card");
        assert_eq!(doc.attr(el, "class"), Some("card example-card"));

        doc.remove_class(el, "card");
        assert!(!doc.has_class(el, "card"));
        assert!(doc.has_class(el, "example-card"));
    }

    #[test]
    fn test_detached_nodes_disappear_from_queries() {
        let mut doc = Document::new();
        let list = doc.append_element(doc.body(), "ul");
        let item = doc.append_element(list, "li");
        doc.set_attr(item, "id", "gone");
        assert_eq!(doc.get_element_by_id("gone"), Some(item));

        doc.clear_children(list);
        assert_eq!(doc.get_element_by_id("gone"), None);
        assert!(!doc.is_connected(item));
    }

    #[test]
    fn test_text_and_raw_serialization() {
        let mut doc = Document::new();
        let p = doc.append_element(doc.body(), "p");
        doc.set_text(p, "<b>not bold</b>");
        assert_eq!(doc.inner_html(p), "&lt;b&gt;not bold&lt;/b&gt;");

        doc.set_inner_html(p, "<b>bold</b> text");
        assert_eq!(doc.inner_html(p), "<b>bold</b> text");
        assert_eq!(doc.text_content(p), "bold text");
    }

    #[test]
    fn test_void_and_boolean_attributes() {
        let mut doc = Document::new();
        let meta = doc.append_element(doc.head(), "meta");
        doc.set_attr(meta, "name", "description");
        doc.set_attr(meta, "content", "a \"quoted\" value");
        let details = doc.append_element(doc.body(), "details");
        doc.set_open(details, true);

        assert_eq!(
            doc.outer_html(meta),
            r#"<meta name="description" content="a &quot;quoted&quot; value">"#
        );
        assert_eq!(doc.outer_html(details), "<details open></details>");
    }

    #[test]
    fn test_script_text_is_verbatim() {
        let mut doc = Document::new();
        let script = doc.append_element(doc.body(), "script");
        doc.set_text(script, r#"{"a":"<b>"}"#);
        assert_eq!(doc.outer_html(script), r#"<script>{"a":"<b>"}</script>"#);
    }

    #[test]
    fn test_closest_is_inclusive() {
        let mut doc = Document::new();
        let link = doc.append_element(doc.body(), "a");
        doc.set_attr(link, "href", "#top");
        let icon = doc.append_element(link, "span");

        let sel = Selector::tag("a").with_attr_prefix("href", "#");
        assert_eq!(doc.closest(icon, &sel), Some(link));
        assert_eq!(doc.closest(link, &sel), Some(link));
        assert_eq!(doc.closest(doc.body(), &sel), None);
    }

    #[test]
    fn test_set_title_creates_once() {
        let mut doc = Document::new();
        doc.set_title("Uno");
        doc.set_title("Dos");
        assert_eq!(doc.title(), "Dos");
        assert_eq!(doc.query_all(&Selector::tag("title")).len(), 1);
    }
}
