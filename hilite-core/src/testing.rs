//! In-memory tree used by the unit tests

use crate::tree::{NodeKind, Tree};

#[derive(Debug, Clone)]
enum Data {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
struct Slot {
    data: Data,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Arena tree; nodes are indices and never reused
#[derive(Debug, Default)]
pub struct MemTree {
    slots: Vec<Slot>,
}

impl MemTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, data: Data) -> usize {
        self.slots.push(Slot {
            data,
            parent: None,
            children: Vec::new(),
        });
        self.slots.len() - 1
    }

    /// Create a detached root element
    pub fn root(&mut self, tag: &str) -> usize {
        self.push(Data::Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
        })
    }

    pub fn element(&mut self, parent: usize, tag: &str, attributes: &[(&str, &str)]) -> usize {
        let node = Tree::create_element(self, tag, attributes);
        Tree::append_child(self, &parent, &node);
        node
    }

    pub fn text_child(&mut self, parent: usize, text: &str) -> usize {
        let node = Tree::create_text(self, text);
        Tree::append_child(self, &parent, &node);
        node
    }

    pub fn comment(&mut self, parent: usize, text: &str) -> usize {
        let node = self.push(Data::Comment(text.to_string()));
        Tree::append_child(self, &parent, &node);
        node
    }

    /// Serialize a subtree; attributes in insertion order, double quoted
    pub fn render(&self, node: usize) -> String {
        let mut out = String::new();
        self.render_into(node, &mut out);
        out
    }

    fn render_into(&self, node: usize, out: &mut String) {
        let slot = &self.slots[node];
        match &slot.data {
            Data::Text(text) => out.push_str(text),
            Data::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            Data::Element { tag, attributes } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push_str(&format!(" {name}=\"{value}\""));
                }
                out.push('>');
                for &child in &slot.children {
                    self.render_into(child, out);
                }
                out.push_str(&format!("</{tag}>"));
            }
        }
    }

    pub fn child_count(&self, node: usize) -> usize {
        self.slots[node].children.len()
    }

    fn detach(&mut self, node: usize) {
        if let Some(parent) = self.slots[node].parent.take() {
            self.slots[parent].children.retain(|&child| child != node);
        }
    }

    fn sibling(&self, node: usize, offset: isize) -> Option<usize> {
        let parent = self.slots[node].parent?;
        let siblings = &self.slots[parent].children;
        let position = siblings.iter().position(|&child| child == node)?;
        let target = position.checked_add_signed(offset)?;
        siblings.get(target).copied()
    }
}

impl Tree for MemTree {
    type Node = usize;

    fn kind(&self, node: &usize) -> NodeKind {
        match self.slots[*node].data {
            Data::Element { .. } => NodeKind::Element,
            Data::Text(_) => NodeKind::Text,
            Data::Comment(_) => NodeKind::Other,
        }
    }

    fn subtree(&self, root: &usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack = vec![*root];
        while let Some(node) = stack.pop() {
            if self.kind(&node) != NodeKind::Element {
                continue;
            }
            out.push(node);
            stack.extend(self.slots[node].children.iter().rev());
        }
        out
    }

    fn filter_out(&self, elements: Vec<usize>, selectors: &[String]) -> Vec<usize> {
        // Only ".class" and bare tag selectors are understood here.
        elements
            .into_iter()
            .filter(|element| {
                !selectors.iter().any(|selector| match selector.strip_prefix('.') {
                    Some(class) => self.has_class(element, class),
                    None => self.tag_name(element).as_deref() == Some(selector.as_str()),
                })
            })
            .collect()
    }

    fn children(&self, node: &usize) -> Vec<usize> {
        self.slots[*node].children.clone()
    }

    fn parent(&self, node: &usize) -> Option<usize> {
        self.slots[*node].parent
    }

    fn previous_sibling(&self, node: &usize) -> Option<usize> {
        self.sibling(*node, -1)
    }

    fn next_sibling(&self, node: &usize) -> Option<usize> {
        self.sibling(*node, 1)
    }

    fn tag_name(&self, node: &usize) -> Option<String> {
        match &self.slots[*node].data {
            Data::Element { tag, .. } => Some(tag.clone()),
            _ => None,
        }
    }

    fn attribute(&self, node: &usize, name: &str) -> Option<String> {
        match &self.slots[*node].data {
            Data::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone()),
            _ => None,
        }
    }

    fn text(&self, node: &usize) -> String {
        match &self.slots[*node].data {
            Data::Text(text) => text.clone(),
            Data::Comment(_) => String::new(),
            Data::Element { .. } => self.slots[*node]
                .children
                .iter()
                .map(|child| self.text(child))
                .collect(),
        }
    }

    fn set_text(&mut self, node: &usize, text: &str) {
        if let Data::Text(data) = &mut self.slots[*node].data {
            *data = text.to_string();
        }
    }

    fn create_text(&mut self, text: &str) -> usize {
        self.push(Data::Text(text.to_string()))
    }

    fn create_element(&mut self, tag: &str, attributes: &[(&str, &str)]) -> usize {
        self.push(Data::Element {
            tag: tag.to_string(),
            attributes: attributes
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        })
    }

    fn append_child(&mut self, parent: &usize, child: &usize) {
        self.detach(*child);
        self.slots[*child].parent = Some(*parent);
        self.slots[*parent].children.push(*child);
    }

    fn insert_before(&mut self, reference: &usize, node: &usize) {
        let Some(parent) = self.slots[*reference].parent else {
            return;
        };
        self.detach(*node);
        let siblings = &mut self.slots[parent].children;
        let position = siblings
            .iter()
            .position(|child| child == reference)
            .unwrap_or(siblings.len());
        siblings.insert(position, *node);
        self.slots[*node].parent = Some(parent);
    }

    fn remove_node(&mut self, node: &usize) {
        self.detach(*node);
    }
}
