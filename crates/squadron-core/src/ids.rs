//! Branded ID newtypes for type safety.
//!
//! `RunId` and `AgentId` are both newtype wrappers around `String`. This
//! prevents accidentally passing an agent id where a run id is expected —
//! the two are never interchangeable even though both are opaque strings at
//! the wire level (spec §3: "opaque unique string" / "opaque string; not
//! interpreted by the engine").
//!
//! `RunId` is always engine-generated (UUID v7, time-ordered, so run ids
//! sort by creation order). `AgentId` is caller-supplied and may be any
//! non-empty string, so it only gets the `From<String>`/`From<&str>`
//! constructors, not `::new()`.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! branded_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Return the inner string as a slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume self and return the inner `String`.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

branded_id! {
    /// Unique identifier for a run. Engine-generated; never reused; stable
    /// for the life of the process (spec §3).
    RunId
}

branded_id! {
    /// Caller-supplied identifier for an agent. Opaque to the engine.
    AgentId
}

impl RunId {
    /// Generate a new random run id (UUID v7, time-ordered).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_id_new_is_uuid_v7() {
        let id = RunId::new();
        let parsed = Uuid::parse_str(id.as_str()).expect("should be valid UUID");
        assert_eq!(parsed.get_version(), Some(uuid::Version::SortRand));
    }

    #[test]
    fn run_ids_are_unique() {
        let a = RunId::new();
        let b = RunId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn run_ids_sort_by_creation_order() {
        let a = RunId::new();
        let b = RunId::new();
        assert!(a < b, "v7 ids should sort by creation time");
    }

    #[test]
    fn agent_id_from_str() {
        let id = AgentId::from("agent-alice");
        assert_eq!(id.as_str(), "agent-alice");
    }

    #[test]
    fn deref_to_str() {
        let id = RunId::from("hello");
        let s: &str = &id;
        assert_eq!(s, "hello");
    }

    #[test]
    fn display() {
        let id = AgentId::from("display-me");
        assert_eq!(format!("{id}"), "display-me");
    }

    #[test]
    fn into_string() {
        let id = AgentId::from("convert");
        let s: String = id.into();
        assert_eq!(s, "convert");
    }

    #[test]
    fn serde_roundtrip() {
        let id = AgentId::from("serde-test");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"serde-test\"");
        let back: AgentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        let id = RunId::from("same");
        let _ = set.insert(id.clone());
        let _ = set.insert(id.clone());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn default_creates_new() {
        let id1 = RunId::default();
        let id2 = RunId::default();
        assert_ne!(id1, id2, "default should create unique ids");
    }
}
