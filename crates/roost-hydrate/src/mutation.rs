//! Attribute-mutation records and the observer handle over the journal.

use crate::document::{Document, NodeId};

/// One observed attribute change on one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord {
  pub target:    NodeId,
  pub attribute: String,
}

/// A cursor into a [`Document`]'s mutation journal, filtered to a single
/// attribute name.
///
/// Created via [`Document::observe_attribute`]; only mutations applied after
/// creation are reported. The observer holds no reference to the document —
/// each [`poll`](Self::poll) is one "observer tick", and dropping the handle
/// disconnects it.
#[derive(Debug)]
pub struct AttributeObserver {
  attribute: String,
  cursor:    usize,
}

impl AttributeObserver {
  pub(crate) fn new(attribute: &str, cursor: usize) -> Self {
    Self {
      attribute: attribute.to_owned(),
      cursor,
    }
  }

  /// Records for this observer's attribute since the last poll. Advances the
  /// cursor; a second poll with no intervening mutations returns nothing.
  pub fn poll(&mut self, doc: &Document) -> Vec<MutationRecord> {
    let records = doc
      .records_since(self.cursor)
      .iter()
      .filter(|r| r.attribute == self.attribute)
      .cloned()
      .collect();
    self.cursor = doc.journal_len();
    records
  }

  pub fn attribute(&self) -> &str { &self.attribute }
}
