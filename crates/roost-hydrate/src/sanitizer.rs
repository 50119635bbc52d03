//! Level-triggered sanitizer for an extension-injected marker attribute.
//!
//! Certain browser extensions stamp a marker attribute onto elements after
//! page load, which makes the client's markup disagree with the server's and
//! trips hydration warnings. The fix is not one-shot: the extension can
//! re-inject at any time, so the sanitizer re-asserts the invariant
//! ("attribute absent everywhere") on every reported change for as long as
//! it is active.

use crate::{document::Document, mutation::AttributeObserver};

/// Keeps one attribute name off every element of a [`Document`].
///
/// Activation sweeps the existing tree, then watches the mutation journal.
/// Dropping the sanitizer deactivates it; the document is left as-is.
pub struct AttributeSanitizer {
  attribute: String,
  observer:  AttributeObserver,
}

impl AttributeSanitizer {
  /// Strip `attribute` from every current element and begin observing.
  ///
  /// The observer is attached before the sweep so a mutation landing between
  /// the two is still picked up by the first reconcile.
  pub fn activate(doc: &mut Document, attribute: &str) -> Self {
    let observer = doc.observe_attribute(attribute);
    let sanitizer = Self {
      attribute: attribute.to_owned(),
      observer,
    };
    sanitizer.sweep(doc);
    sanitizer
  }

  /// Process all pending mutation records, removing the attribute wherever
  /// it reappeared. Returns the number of removals. Idempotent: targets
  /// already clean (including this sanitizer's own earlier removals) are
  /// skipped.
  pub fn reconcile(&mut self, doc: &mut Document) -> usize {
    let records = self.observer.poll(doc);
    let mut removed = 0;
    for record in records {
      if doc.attribute(record.target, &self.attribute).is_some() {
        doc.remove_attribute(record.target, &self.attribute);
        removed += 1;
      }
    }
    removed
  }

  fn sweep(&self, doc: &mut Document) {
    for node in doc.elements_with_attribute(&self.attribute) {
      doc.remove_attribute(node, &self.attribute);
    }
  }
}
