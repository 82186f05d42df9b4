//! Category model
//!
//! Categories come in two flavors: the eight built-in defaults (fixed slugs,
//! immutable, never deletable) and user-created custom categories (validated,
//! editable, archivable). Both share one record shape so expenses can
//! reference either kind by id.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Color substituted when a caller supplies something that is not `#RRGGBB`
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// A spending category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier (fixed slug for defaults, generated for customs)
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Display emoji, at most 2 characters
    #[serde(default)]
    pub emoji: String,

    /// 6-hex-digit color code with leading `#`
    #[serde(default = "default_color")]
    pub color: String,

    /// Monthly budget; 0 means "no budget set"
    #[serde(default)]
    pub budget: f64,

    /// True for the eight built-ins
    #[serde(default)]
    pub is_default: bool,

    /// Archived customs are hidden from listings but keep their expenses
    #[serde(default)]
    pub archived: bool,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Category {
    /// Create a new custom category with a freshly generated id.
    ///
    /// Fields are stored as given; normalization (name trimming, color and
    /// emoji fallbacks, budget clamping) is the service layer's job.
    pub fn new_custom(
        name: impl Into<String>,
        emoji: impl Into<String>,
        color: impl Into<String>,
        budget: f64,
    ) -> Self {
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            emoji: emoji.into(),
            color: color.into(),
            budget,
            is_default: false,
            archived: false,
        }
    }

    fn builtin(id: &str, name: &str, emoji: &str, color: &str) -> Self {
        Self {
            id: CategoryId::from(id),
            name: name.to_string(),
            emoji: emoji.to_string(),
            color: color.to_string(),
            budget: 0.0,
            is_default: true,
            archived: false,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.name)
    }
}

/// The eight built-in categories, in fixed definition order.
///
/// These are always taken from code at load time, never from the stored
/// document, so the application can evolve its built-ins without a migration.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::builtin("food", "Food", "🍕", "#fecaca"),
        Category::builtin("travel", "Travel", "✈️", "#ffedd5"),
        Category::builtin("shopping", "Shopping", "🛍️", "#fef9c3"),
        Category::builtin("bills", "Bills", "💳", "#dbeafe"),
        Category::builtin("entertainment", "Entertainment", "🎬", "#f0f9ff"),
        Category::builtin("healthcare", "Healthcare", "⚕️", "#fef2f2"),
        Category::builtin("education", "Education", "📚", "#f3e8ff"),
        Category::builtin("others", "Others", "📦", "#e0f2fe"),
    ]
}
