//! In-memory document for exercising widgets without a browser.

use super::{ClickHandler, Dom};
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    tag: String,
    id: Option<String>,
    class: String,
    href: Option<String>,
    parent: Option<NodeId>,
}

#[derive(Default)]
pub struct MemoryDom {
    nodes: RefCell<Vec<Node>>,
    listeners: RefCell<Vec<(NodeId, ClickHandler<NodeId>)>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new element. Nodes are kept in creation order, so building
    /// parents before children keeps document order.
    pub fn append(&self, parent: Option<NodeId>, tag: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            id: None,
            class: String::new(),
            href: None,
            parent,
        });
        NodeId(nodes.len() - 1)
    }

    pub fn set_id(&self, node: NodeId, id: &str) {
        self.nodes.borrow_mut()[node.0].id = Some(id.to_string());
    }

    pub fn set_href(&self, node: NodeId, href: &str) {
        self.nodes.borrow_mut()[node.0].href = Some(href.to_string());
    }

    pub fn classes(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].class.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Dispatch a click on `target`, bubbling up through its ancestors.
    /// Returns whether any listener prevented the default action.
    pub fn click(&self, target: NodeId) -> bool {
        let mut prevented = false;
        let mut current = Some(target);
        while let Some(node) = current {
            let listeners = self.listeners.borrow();
            for (owner, handler) in listeners.iter() {
                if *owner == node && handler(&target) {
                    prevented = true;
                }
            }
            drop(listeners);
            current = self.nodes.borrow()[node.0].parent;
        }
        prevented
    }

    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = nodes[node.0].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = nodes[parent.0].parent;
        }
        false
    }

    /// Build `<ul id=container><li><a href="#panel">` for each panel, followed
    /// by the panel elements themselves. Returns the link nodes.
    pub fn tab_markup(&self, container_id: &str, panel_ids: &[&str]) -> Vec<NodeId> {
        let section = self.append(None, "section");
        let container = self.append(Some(section), "ul");
        self.set_id(container, container_id);

        let links = panel_ids
            .iter()
            .map(|panel_id| {
                let li = self.append(Some(container), "li");
                let link = self.append(Some(li), "a");
                self.set_href(link, &format!("http://localhost/page.html#{panel_id}"));
                link
            })
            .collect();

        for panel_id in panel_ids {
            let panel = self.append(Some(section), "div");
            self.set_id(panel, panel_id);
        }
        links
    }
}

impl Dom for MemoryDom {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn elements_by_tag(&self, tag: &str, context: Option<&NodeId>) -> Vec<NodeId> {
        let tag = tag.to_ascii_lowercase();
        let count = self.nodes.borrow().len();
        (0..count)
            .map(NodeId)
            .filter(|node| tag == "*" || self.nodes.borrow()[node.0].tag == tag)
            .filter(|node| context.map_or(true, |ctx| self.is_descendant(*node, *ctx)))
            .collect()
    }

    fn class_name(&self, element: &NodeId) -> String {
        self.classes(*element)
    }

    fn set_class_name(&self, element: &NodeId, value: &str) {
        self.nodes.borrow_mut()[element.0].class = value.to_string();
    }

    fn href(&self, element: &NodeId) -> Option<String> {
        let nodes = self.nodes.borrow();
        let node = &nodes[element.0];
        // Like `HTMLAnchorElement.href`: anchors always have one, empty when unset
        if node.tag == "a" {
            Some(node.href.clone().unwrap_or_default())
        } else {
            node.href.clone()
        }
    }

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.nodes.borrow()[element.0].parent
    }

    fn listen_click(&self, element: &NodeId, handler: ClickHandler<NodeId>) {
        self.listeners.borrow_mut().push((*element, handler));
    }
}
