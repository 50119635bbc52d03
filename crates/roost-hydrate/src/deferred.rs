//! Two-phase render wrapper: fallback until first mount, content after.
//!
//! Server-rendered markup and the client's first paint must agree exactly.
//! Any client-only content therefore renders one paint late: every fresh
//! instance starts not-yet-mounted and shows the fallback, and the switch to
//! real content happens only after the first client-side commit.

/// A render gate with exactly two states and a one-way transition.
#[derive(Debug, Clone)]
pub struct Deferred<T> {
  fallback: Option<T>,
  content:  T,
  mounted:  bool,
}

impl<T> Deferred<T> {
  /// Wrap `content` with no fallback — renders nothing until mounted.
  pub fn new(content: T) -> Self {
    Self {
      fallback: None,
      content,
      mounted: false,
    }
  }

  /// Wrap `content` with a fallback shown while not yet mounted.
  pub fn with_fallback(content: T, fallback: T) -> Self {
    Self {
      fallback: Some(fallback),
      content,
      mounted: false,
    }
  }

  /// What to paint right now: the fallback (or `None`) before mount, the
  /// real content after.
  pub fn render(&self) -> Option<&T> {
    if self.mounted {
      Some(&self.content)
    } else {
      self.fallback.as_ref()
    }
  }

  /// Commit the first client-side mount. Idempotent; there is no way back
  /// to the not-yet-mounted state.
  pub fn commit_mount(&mut self) { self.mounted = true; }

  pub fn is_mounted(&self) -> bool { self.mounted }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn starts_unmounted_with_fallback() {
    let gate = Deferred::with_fallback("content", "skeleton");
    assert!(!gate.is_mounted());
    assert_eq!(gate.render(), Some(&"skeleton"));
  }

  #[test]
  fn no_fallback_renders_nothing_before_mount() {
    let gate = Deferred::new("content");
    assert_eq!(gate.render(), None);
  }

  #[test]
  fn server_and_client_first_render_agree() {
    // A simulated server render and a fresh client instance, same config:
    // their pre-mount output must be identical.
    let server = Deferred::with_fallback("content", "skeleton");
    let client = Deferred::with_fallback("content", "skeleton");
    assert_eq!(server.render(), client.render());
  }

  #[test]
  fn mount_switches_to_content() {
    let mut gate = Deferred::with_fallback("content", "skeleton");
    gate.commit_mount();
    assert!(gate.is_mounted());
    assert_eq!(gate.render(), Some(&"content"));
  }

  #[test]
  fn mount_is_one_way_and_idempotent() {
    let mut gate = Deferred::new("content");
    gate.commit_mount();
    gate.commit_mount();
    assert!(gate.is_mounted());
    assert_eq!(gate.render(), Some(&"content"));
  }
}
