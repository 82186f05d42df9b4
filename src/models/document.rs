//! The persisted application document
//!
//! Everything SmartSpend stores lives in one document: the expense list, the
//! two category sets, and user settings. The document is always loaded and
//! saved as a whole; there are no partial writes.

use serde::{Deserialize, Serialize};

use super::category::{default_categories, Category};
use super::expense::Expense;
use super::ids::CategoryId;

/// Current schema version written to new documents
pub const SCHEMA_VERSION: &str = "1.0";

/// The root of the persisted data graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDocument {
    /// Schema version string
    #[serde(default = "schema_version")]
    pub version: String,

    /// All expenses, in insertion order (creation order, not display order)
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Default and custom category sets
    #[serde(default)]
    pub categories: CategorySets,

    /// Presentation-layer settings, persisted alongside the data
    #[serde(default)]
    pub settings: Settings,
}

fn schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

/// The two category collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySets {
    /// The eight built-ins, in fixed definition order
    #[serde(default = "default_categories")]
    pub default: Vec<Category>,

    /// User-created categories, in insertion order
    #[serde(default)]
    pub custom: Vec<Category>,
}

impl Default for CategorySets {
    fn default() -> Self {
        Self {
            default: default_categories(),
            custom: Vec::new(),
        }
    }
}

/// User preferences consumed by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// UI theme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Whether budget exceedance alerts are shown
    #[serde(default = "default_budget_alerts")]
    pub budget_alerts: bool,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_budget_alerts() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            currency: default_currency(),
            budget_alerts: default_budget_alerts(),
        }
    }
}

impl Default for AppDocument {
    fn default() -> Self {
        Self {
            version: schema_version(),
            expenses: Vec::new(),
            categories: CategorySets::default(),
            settings: Settings::default(),
        }
    }
}

impl AppDocument {
    /// Iterate over all categories, defaults first, then customs
    pub fn all_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories
            .default
            .iter()
            .chain(self.categories.custom.iter())
    }

    /// Look up a category by id across both sets
    pub fn category_by_id(&self, id: &CategoryId) -> Option<&Category> {
        self.all_categories().find(|c| &c.id == id)
    }

    /// Count expenses referencing the given category
    pub fn expense_count_for(&self, id: &CategoryId) -> usize {
        self.expenses.iter().filter(|e| &e.category_id == id).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document() {
        let doc = AppDocument::default();
        assert_eq!(doc.version, SCHEMA_VERSION);
        assert!(doc.expenses.is_empty());
        assert_eq!(doc.categories.default.len(), 8);
        assert!(doc.categories.custom.is_empty());
        assert_eq!(doc.settings.theme, "light");
        assert_eq!(doc.settings.currency, "₹");
        assert!(doc.settings.budget_alerts);
    }

    #[test]
    fn test_category_lookup_across_sets() {
        let mut doc = AppDocument::default();
        let custom = Category::new_custom("Pets", "🐶", "#aabbcc", 0.0);
        let custom_id = custom.id.clone();
        doc.categories.custom.push(custom);

        assert!(doc.category_by_id(&CategoryId::from("food")).is_some());
        assert!(doc.category_by_id(&custom_id).is_some());
        assert!(doc.category_by_id(&CategoryId::from("nope")).is_none());
        assert_eq!(doc.all_categories().count(), 9);
    }

    #[test]
    fn test_deserialize_partial_document() {
        // A document missing whole sections falls back to defaults per field
        let json = r#"{"expenses":[]}"#;
        let doc: AppDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.version, SCHEMA_VERSION);
        assert_eq!(doc.categories.default.len(), 8);
        assert_eq!(doc.settings.currency, "₹");
    }

    #[test]
    fn test_settings_field_names() {
        let doc = AppDocument::default();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"budgetAlerts\":true"));
        assert!(json.contains("\"version\":\"1.0\""));
    }
}
