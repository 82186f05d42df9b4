//! Typed ID wrappers for all entity types
//!
//! The persisted document stores ids as prefixed strings (`cat_…`, `exp_…`),
//! with the eight built-in categories using fixed lowercase slugs. Newtype
//! wrappers keep the two id spaces from being mixed up at compile time while
//! serializing transparently as plain strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate string-backed ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh unique ID with this entity's prefix
            pub fn generate() -> Self {
                Self(format!("{}{}", $prefix, Uuid::new_v4().simple()))
            }

            /// View the ID as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(CategoryId, "cat_");
define_id!(ExpenseId, "exp_");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_prefixed_and_unique() {
        let a = ExpenseId::generate();
        let b = ExpenseId::generate();
        assert!(a.as_str().starts_with("exp_"));
        assert_ne!(a, b);

        let c = CategoryId::generate();
        assert!(c.as_str().starts_with("cat_"));
    }

    #[test]
    fn test_slug_ids() {
        let food = CategoryId::from("food");
        assert_eq!(food.as_str(), "food");
        assert_eq!(food, CategoryId::from("food".to_string()));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = CategoryId::from("travel");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"travel\"");

        let back: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
