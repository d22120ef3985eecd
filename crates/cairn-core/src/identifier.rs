//! Interned node identifiers.
//!
//! Node ids are compared and hashed on every lookup the render pass makes
//! (graph records, scene elements, removal diffs), so they are interned once
//! into a process-wide [`string_interner`] table and carried around as a
//! `Copy` symbol.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use serde::{Deserialize, Deserializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut interner)
}

/// An interned identifier for a graph node.
///
/// # Examples
///
/// ```
/// use cairn_core::identifier::Id;
///
/// let a = Id::new("service-a");
/// let b: Id = "service-a".into();
///
/// assert_eq!(a, b);
/// assert_eq!(a, "service-a");
/// assert_eq!(a.to_string(), "service-a");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Returns the identifier's text as an owned string.
    pub fn as_string(&self) -> String {
        with_interner(|interner| interner.resolve(self.0).unwrap_or_default().to_string())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Id {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| interner.resolve(self.0) == Some(other))
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_same_id() {
        assert_eq!(Id::new("node"), Id::new("node"));
        assert_ne!(Id::new("node"), Id::new("other-node"));
    }

    #[test]
    fn test_display_round_trips_text() {
        let id = Id::new("cluster/a b");
        assert_eq!(format!("{id}"), "cluster/a b");
        assert_eq!(id.as_string(), "cluster/a b");
    }

    #[test]
    fn test_compare_with_str() {
        let id = Id::from(String::from("alpha"));
        assert!(id == "alpha");
        assert!(id != "beta");
    }
}
