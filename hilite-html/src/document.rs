//! Parsed HTML document implementing the engine's tree interface

use crate::error::{HtmlError, Result};
use hilite_core::{NodeKind, Tree};
use html5ever::{LocalName, Namespace, QualName};
use kuchiki::traits::TendrilSink;
use kuchiki::{Attribute, ExpandedName, NodeData, NodeRef, Selectors};
use std::fs;
use std::path::Path;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// An HTML document held as a `kuchiki` node tree
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    root: NodeRef,
}

impl HtmlDocument {
    /// Parse markup into a full document
    ///
    /// Fragments are wrapped in `html`/`head`/`body` as a browser would.
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchiki::parse_html().one(html),
        }
    }

    /// Read and parse a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let html = fs::read_to_string(path)?;
        Ok(Self::parse(&html))
    }

    /// The document node
    pub fn document(&self) -> &NodeRef {
        &self.root
    }

    /// The `body` element, when present
    pub fn body(&self) -> Option<NodeRef> {
        self.root
            .select_first("body")
            .ok()
            .map(|body| body.as_node().clone())
    }

    /// Every element matching a CSS selector, in document order
    pub fn select(&self, selector: &str) -> Result<Vec<NodeRef>> {
        let matches = self
            .root
            .select(selector)
            .map_err(|()| HtmlError::InvalidSelector(selector.to_string()))?;

        Ok(matches.map(|element| element.as_node().clone()).collect())
    }

    /// Serialize the whole document
    pub fn to_html(&self) -> String {
        self.root.to_string()
    }

    /// Serialize the children of a node
    pub fn inner_html(node: &NodeRef) -> String {
        node.children().map(|child| child.to_string()).collect()
    }

    /// Serialize the contents of `body`, or the whole document without one
    pub fn body_html(&self) -> String {
        match self.body() {
            Some(body) => Self::inner_html(&body),
            None => self.to_html(),
        }
    }
}

fn compile_selectors(selectors: &[String]) -> Vec<Selectors> {
    selectors
        .iter()
        .filter_map(|selector| match Selectors::compile(selector) {
            Ok(compiled) => Some(compiled),
            Err(()) => {
                log::warn!("ignoring invalid filter selector '{selector}'");
                None
            }
        })
        .collect()
}

impl Tree for HtmlDocument {
    type Node = NodeRef;

    fn kind(&self, node: &NodeRef) -> NodeKind {
        match node.data() {
            NodeData::Element(_) => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn subtree(&self, root: &NodeRef) -> Vec<NodeRef> {
        root.inclusive_descendants()
            .filter(|node| node.as_element().is_some())
            .collect()
    }

    fn filter_out(&self, elements: Vec<NodeRef>, selectors: &[String]) -> Vec<NodeRef> {
        let compiled = compile_selectors(selectors);
        if compiled.is_empty() {
            return elements;
        }

        elements
            .into_iter()
            .filter(|node| match node.clone().into_element_ref() {
                Some(element) => !compiled.iter().any(|s| s.matches(&element)),
                None => true,
            })
            .collect()
    }

    fn children(&self, node: &NodeRef) -> Vec<NodeRef> {
        node.children().collect()
    }

    fn parent(&self, node: &NodeRef) -> Option<NodeRef> {
        node.parent()
    }

    fn previous_sibling(&self, node: &NodeRef) -> Option<NodeRef> {
        node.previous_sibling()
    }

    fn next_sibling(&self, node: &NodeRef) -> Option<NodeRef> {
        node.next_sibling()
    }

    fn tag_name(&self, node: &NodeRef) -> Option<String> {
        node.as_element()
            .map(|element| element.name.local.to_string())
    }

    fn attribute(&self, node: &NodeRef, name: &str) -> Option<String> {
        let element = node.as_element()?;
        let attributes = element.attributes.borrow();
        attributes.get(name).map(str::to_string)
    }

    fn text(&self, node: &NodeRef) -> String {
        match node.as_text() {
            Some(text) => text.borrow().clone(),
            None => node.text_contents(),
        }
    }

    fn set_text(&mut self, node: &NodeRef, text: &str) {
        if let Some(data) = node.as_text() {
            *data.borrow_mut() = text.to_string();
        }
    }

    fn create_text(&mut self, text: &str) -> NodeRef {
        NodeRef::new_text(text)
    }

    fn create_element(&mut self, tag: &str, attributes: &[(&str, &str)]) -> NodeRef {
        let name = QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(tag));
        let attributes = attributes.iter().map(|(name, value)| {
            (
                ExpandedName::new(Namespace::from(""), LocalName::from(*name)),
                Attribute {
                    prefix: None,
                    value: value.to_string(),
                },
            )
        });

        NodeRef::new_element(name, attributes)
    }

    fn append_child(&mut self, parent: &NodeRef, child: &NodeRef) {
        parent.append(child.clone());
    }

    fn insert_before(&mut self, reference: &NodeRef, node: &NodeRef) {
        reference.insert_before(node.clone());
    }

    fn remove_node(&mut self, node: &NodeRef) {
        node.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_gets_body() {
        let document = HtmlDocument::parse("<p>Hello</p>");
        assert!(document.body().is_some());
        assert_eq!(document.body_html(), "<p>Hello</p>");
    }

    #[test]
    fn test_select_and_invalid_selector() {
        let document = HtmlDocument::parse("<p class=a>1</p><p>2</p><p class=a>3</p>");
        let found = document.select("p.a").unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(document.text(&found[1]), "3");

        assert!(matches!(
            document.select("p[[["),
            Err(HtmlError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_kinds() {
        let document = HtmlDocument::parse("<div>text<!--c--><b>x</b></div>");
        let div = &document.select("div").unwrap()[0];
        let kinds: Vec<NodeKind> = document
            .children(div)
            .iter()
            .map(|node| document.kind(node))
            .collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Text, NodeKind::Other, NodeKind::Element]
        );
        assert_eq!(document.child_text_nodes(div).len(), 1);
    }

    #[test]
    fn test_subtree_includes_root_and_nested_elements() {
        let document = HtmlDocument::parse("<div id=r><p><em>x</em></p>tail</div>");
        let root = &document.select("#r").unwrap()[0];
        let tags: Vec<String> = document
            .subtree(root)
            .iter()
            .filter_map(|node| document.tag_name(node))
            .collect();
        assert_eq!(tags, vec!["div", "p", "em"]);
    }

    #[test]
    fn test_filter_out_with_selectors() {
        let document = HtmlDocument::parse("<div id=r><p class=skip>a</p><p>b</p><pre>c</pre></div>");
        let root = &document.select("#r").unwrap()[0];
        let elements = document.subtree(root);

        let kept = document.filter_out(elements, &[".skip".to_string(), "pre".to_string()]);
        let tags: Vec<String> = kept
            .iter()
            .filter_map(|node| document.tag_name(node))
            .collect();
        assert_eq!(tags, vec!["div", "p"]);
        assert_eq!(document.text(&kept[1]), "b");
    }

    #[test]
    fn test_invalid_filter_selector_ignored() {
        let document = HtmlDocument::parse("<div id=r><p>a</p></div>");
        let root = &document.select("#r").unwrap()[0];
        let elements = document.subtree(root);

        let kept = document.filter_out(elements.clone(), &["p[[[".to_string()]);
        assert_eq!(kept, elements);
    }

    #[test]
    fn test_created_element_serializes_attributes() {
        let mut document = HtmlDocument::parse("<p id=t></p>");
        let p = document.select("#t").unwrap()[0].clone();
        let marker = document.create_element("mark", &[("class", "hit"), ("data-hilite", "true")]);
        let text = document.create_text("a < b");
        document.append_child(&marker, &text);
        document.append_child(&p, &marker);

        assert_eq!(
            HtmlDocument::inner_html(&p),
            "<mark class=\"hit\" data-hilite=\"true\">a &lt; b</mark>"
        );
        assert_eq!(document.attribute(&marker, "class").as_deref(), Some("hit"));
        assert!(document.has_class(&marker, "hit"));
    }

    #[test]
    fn test_replace_and_siblings() {
        let mut document = HtmlDocument::parse("<p id=t>a<b>b</b>c</p>");
        let p = document.select("#t").unwrap()[0].clone();
        let b = document.select("b").unwrap()[0].clone();

        let prev = document.previous_sibling(&b).unwrap();
        let next = document.next_sibling(&b).unwrap();
        assert_eq!(document.text(&prev), "a");
        assert_eq!(document.text(&next), "c");

        let replacement = document.create_text("B");
        document.replace_node(&b, &replacement);
        assert!(document.parent(&b).is_none());
        assert_eq!(HtmlDocument::inner_html(&p), "aBc");

        document.set_text(&replacement, "-");
        assert_eq!(document.text(&p), "a-c");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<p>file</p>").unwrap();

        let document = HtmlDocument::from_file(&path).unwrap();
        assert_eq!(document.body_html(), "<p>file</p>");

        assert!(matches!(
            HtmlDocument::from_file(&dir.path().join("missing.html")),
            Err(HtmlError::Io(_))
        ));
    }
}
