//! A minimal mutable element tree with an attribute-mutation journal.
//!
//! Stands in for the browser DOM: elements live in an arena, attribute
//! changes append [`MutationRecord`]s to a journal that observers consume at
//! their own pace. The journal is unbounded in this model; pages are
//! short-lived and the record type is two words plus a name.

use std::collections::BTreeMap;

use crate::mutation::{AttributeObserver, MutationRecord};

/// Opaque handle to an element in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Default)]
struct Element {
  tag:        String,
  attributes: BTreeMap<String, String>,
  children:   Vec<NodeId>,
}

/// An element tree plus the journal of attribute mutations applied to it.
#[derive(Debug, Default)]
pub struct Document {
  nodes:   Vec<Element>,
  journal: Vec<MutationRecord>,
}

impl Document {
  pub fn new() -> Self { Self::default() }

  // ── Tree construction ─────────────────────────────────────────────────

  pub fn create_element(&mut self, tag: &str) -> NodeId {
    let id = NodeId(self.nodes.len());
    self.nodes.push(Element {
      tag: tag.to_owned(),
      ..Element::default()
    });
    id
  }

  pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
    self.nodes[parent.0].children.push(child);
  }

  pub fn tag(&self, node: NodeId) -> &str { &self.nodes[node.0].tag }

  pub fn children(&self, node: NodeId) -> &[NodeId] {
    &self.nodes[node.0].children
  }

  // ── Attributes ────────────────────────────────────────────────────────

  /// Set (or overwrite) an attribute. Always journalled, matching observer
  /// semantics where any `setAttribute` call reports a mutation.
  pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
    self.nodes[node.0]
      .attributes
      .insert(name.to_owned(), value.to_owned());
    self.journal.push(MutationRecord {
      target:    node,
      attribute: name.to_owned(),
    });
  }

  /// Remove an attribute. Removing an absent attribute is a no-op and is
  /// not journalled.
  pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
    if self.nodes[node.0].attributes.remove(name).is_some() {
      self.journal.push(MutationRecord {
        target:    node,
        attribute: name.to_owned(),
      });
    }
  }

  pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
    self.nodes[node.0].attributes.get(name).map(String::as_str)
  }

  /// All elements currently carrying `name`, in arena order.
  pub fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
    self
      .nodes
      .iter()
      .enumerate()
      .filter(|(_, el)| el.attributes.contains_key(name))
      .map(|(i, _)| NodeId(i))
      .collect()
  }

  // ── Observation ───────────────────────────────────────────────────────

  /// Attach an observer for future mutations of one attribute name across
  /// the whole tree. Dropping the observer is disconnection.
  pub fn observe_attribute(&self, name: &str) -> AttributeObserver {
    AttributeObserver::new(name, self.journal.len())
  }

  pub(crate) fn records_since(&self, cursor: usize) -> &[MutationRecord] {
    &self.journal[cursor..]
  }

  pub(crate) fn journal_len(&self) -> usize { self.journal.len() }
}
