//! Category service
//!
//! CRUD and validation for categories, plus per-category monthly totals and
//! budget status. The eight default categories are immutable: they cannot be
//! edited, archived, or deleted, and their names are exempt from the custom
//! name rules.

use crate::error::{SpendError, SpendResult};
use crate::models::{Category, CategoryId};
use crate::repository::Repository;
use crate::validation::{check_name_format, normalize_budget, normalize_color, normalize_emoji};

use super::month_start_string;

/// Service for category management
pub struct CategoryService<'a> {
    repo: &'a Repository,
}

/// Partial category update; absent fields keep their prior values
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub emoji: Option<String>,
    pub color: Option<String>,
    pub budget: Option<f64>,
    pub archived: Option<bool>,
}

/// Result of a budget check for one category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub exceeded: bool,
    pub actual: f64,
    pub budget: f64,
}

impl BudgetStatus {
    fn none() -> Self {
        Self {
            exceeded: false,
            actual: 0.0,
            budget: 0.0,
        }
    }
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(repo: &'a Repository) -> Self {
        Self { repo }
    }

    /// List all categories: defaults first in definition order, then customs
    /// in insertion order. Archived customs are excluded unless requested.
    pub fn list_categories(&self, include_archived: bool) -> SpendResult<Vec<Category>> {
        self.repo.with(|doc| {
            let customs = doc
                .categories
                .custom
                .iter()
                .filter(|c| include_archived || !c.archived);
            doc.categories
                .default
                .iter()
                .chain(customs)
                .cloned()
                .collect()
        })
    }

    /// Get a category by id across both default and custom sets
    pub fn get_category(&self, id: &CategoryId) -> SpendResult<Option<Category>> {
        self.repo.with(|doc| doc.category_by_id(id).cloned())
    }

    /// Check whether a name is acceptable for a custom category.
    ///
    /// The name is trimmed, must be 2-20 letters/digits/spaces, and must not
    /// collide case-insensitively with another custom category. Passing the
    /// category's own id as `exclude_id` lets an edit keep its current name.
    pub fn validate_name(&self, name: &str, exclude_id: Option<&CategoryId>) -> SpendResult<bool> {
        self.repo
            .with(|doc| name_issue(doc.categories.custom.as_slice(), name, exclude_id).is_none())
    }

    /// Add a custom category.
    ///
    /// The name is validated; color, emoji, and budget are normalized rather
    /// than rejected. Persists and returns the new record.
    pub fn add_category(
        &self,
        name: &str,
        color: &str,
        emoji: &str,
        budget: f64,
    ) -> SpendResult<Category> {
        let clean = name.trim().to_string();
        let category = self.repo.with_mut(|doc| {
            if let Some(reason) = name_issue(doc.categories.custom.as_slice(), &clean, None) {
                return Err(SpendError::Validation(reason));
            }

            let category = Category::new_custom(
                clean.clone(),
                normalize_emoji(emoji),
                normalize_color(color),
                normalize_budget(budget),
            );
            doc.categories.custom.push(category.clone());
            Ok(category)
        })??;

        self.repo.save()?;
        Ok(category)
    }

    /// Edit a custom category, applying only the fields present in `updates`.
    ///
    /// Default categories cannot be edited. A changed name is re-validated
    /// against the same rules, excluding the record's own id.
    pub fn edit_category(&self, id: &CategoryId, updates: CategoryUpdate) -> SpendResult<Category> {
        let category = self.repo.with_mut(|doc| {
            if doc.categories.default.iter().any(|c| &c.id == id) {
                return Err(SpendError::DefaultCategory(id.to_string()));
            }

            let clean_name = match updates.name {
                Some(ref name) => {
                    let clean = name.trim().to_string();
                    if let Some(reason) =
                        name_issue(doc.categories.custom.as_slice(), &clean, Some(id))
                    {
                        return Err(SpendError::Validation(reason));
                    }
                    Some(clean)
                }
                None => None,
            };

            let category = doc
                .categories
                .custom
                .iter_mut()
                .find(|c| &c.id == id)
                .ok_or_else(|| SpendError::category_not_found(id.to_string()))?;

            if let Some(name) = clean_name {
                category.name = name;
            }
            if let Some(ref emoji) = updates.emoji {
                category.emoji = normalize_emoji(emoji);
            }
            if let Some(ref color) = updates.color {
                category.color = normalize_color(color);
            }
            if let Some(budget) = updates.budget {
                category.budget = normalize_budget(budget);
            }
            if let Some(archived) = updates.archived {
                category.archived = archived;
            }

            Ok(category.clone())
        })??;

        self.repo.save()?;
        Ok(category)
    }

    /// Delete a custom category.
    ///
    /// Fails with a distinct constraint error while any expense still
    /// references the category; callers reassign first (see
    /// `reassign_expenses`).
    pub fn delete_category(&self, id: &CategoryId) -> SpendResult<()> {
        self.repo.with_mut(|doc| {
            if doc.categories.default.iter().any(|c| &c.id == id) {
                return Err(SpendError::DefaultCategory(id.to_string()));
            }

            let category = doc
                .categories
                .custom
                .iter()
                .find(|c| &c.id == id)
                .ok_or_else(|| SpendError::category_not_found(id.to_string()))?;

            let expense_count = doc.expense_count_for(id);
            if expense_count > 0 {
                return Err(SpendError::CategoryInUse {
                    name: category.name.clone(),
                    expense_count,
                });
            }

            doc.categories.custom.retain(|c| &c.id != id);
            Ok(())
        })??;

        self.repo.save()?;
        Ok(())
    }

    /// Retarget every expense in `old_id` to `new_id`; returns the count
    /// changed. Does not delete the old category; callers combine this with
    /// `delete_category`.
    pub fn reassign_expenses(&self, old_id: &CategoryId, new_id: &CategoryId) -> SpendResult<usize> {
        let count = self.repo.with_mut(|doc| {
            if doc.category_by_id(new_id).is_none() {
                return Err(SpendError::category_not_found(new_id.to_string()));
            }

            let mut count = 0;
            for expense in doc.expenses.iter_mut() {
                if &expense.category_id == old_id {
                    expense.category_id = new_id.clone();
                    count += 1;
                }
            }
            Ok(count)
        })??;

        self.repo.save()?;
        Ok(count)
    }

    /// Sum of this category's expense amounts in the current monthly window
    pub fn monthly_total(&self, id: &CategoryId) -> SpendResult<f64> {
        let month_start = month_start_string();
        self.repo.with(|doc| {
            doc.expenses
                .iter()
                .filter(|e| &e.category_id == id && e.date >= month_start)
                .map(|e| e.amount)
                .sum()
        })
    }

    /// Budget status for one category.
    ///
    /// Budgets are opt-in: a category with budget <= 0 (or an unknown id) is
    /// always reported as not exceeded with zeroed figures.
    pub fn budget_status(&self, id: &CategoryId) -> SpendResult<BudgetStatus> {
        let budget = match self.get_category(id)? {
            Some(cat) if cat.budget > 0.0 => cat.budget,
            _ => return Ok(BudgetStatus::none()),
        };

        let actual = self.monthly_total(id)?;
        Ok(BudgetStatus {
            exceeded: actual > budget,
            actual,
            budget,
        })
    }
}

/// Full name check against the custom category set; `None` means valid
fn name_issue(customs: &[Category], clean: &str, exclude_id: Option<&CategoryId>) -> Option<String> {
    if let Err(issue) = check_name_format(clean) {
        return Some(issue.to_string());
    }

    let lower = clean.to_lowercase();
    let duplicate = customs
        .iter()
        .any(|c| Some(&c.id) != exclude_id && c.name.to_lowercase() == lower);
    if duplicate {
        return Some(format!("a category named '{}' already exists", clean));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{today_string, ExpenseService};
    use crate::storage::Store;
    use tempfile::TempDir;

    fn test_repo() -> (TempDir, Repository) {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::with_path(temp_dir.path().join("smartspend.json"));
        (temp_dir, Repository::new(store))
    }

    #[test]
    fn test_list_defaults_first() {
        let (_temp_dir, repo) = test_repo();
        let service = CategoryService::new(&repo);

        service.add_category("Pets", "#aabbcc", "🐶", 0.0).unwrap();

        let categories = service.list_categories(false).unwrap();
        assert_eq!(categories.len(), 9);
        assert_eq!(categories[0].id.as_str(), "food");
        assert_eq!(categories[8].name, "Pets");
    }

    #[test]
    fn test_list_hides_archived_unless_asked() {
        let (_temp_dir, repo) = test_repo();
        let service = CategoryService::new(&repo);

        let cat = service.add_category("Pets", "#aabbcc", "🐶", 0.0).unwrap();
        service
            .edit_category(
                &cat.id,
                CategoryUpdate {
                    archived: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(service.list_categories(false).unwrap().len(), 8);
        assert_eq!(service.list_categories(true).unwrap().len(), 9);
    }

    #[test]
    fn test_validate_name_rules() {
        let (_temp_dir, repo) = test_repo();
        let service = CategoryService::new(&repo);

        assert!(service.validate_name("Pets", None).unwrap());
        assert!(service.validate_name("  Pets  ", None).unwrap()); // trimmed
        assert!(!service.validate_name("P", None).unwrap());
        assert!(!service.validate_name(&"x".repeat(21), None).unwrap());
        assert!(!service.validate_name("Pets!", None).unwrap());

        // Duplicate check is against customs only and case-insensitive
        let cat = service.add_category("Pets", "#aabbcc", "🐶", 0.0).unwrap();
        assert!(!service.validate_name("PETS", None).unwrap());
        assert!(service.validate_name("PETS", Some(&cat.id)).unwrap());

        // Default names are not reserved by this rule
        assert!(service.validate_name("Food", None).unwrap());
    }

    #[test]
    fn test_add_category_normalizes_lenient_fields() {
        let (_temp_dir, repo) = test_repo();
        let service = CategoryService::new(&repo);

        let cat = service
            .add_category("  Pets  ", "not-a-color", "🐶🐱🐟", -10.0)
            .unwrap();

        assert_eq!(cat.name, "Pets");
        assert_eq!(cat.color, crate::models::DEFAULT_COLOR);
        assert_eq!(cat.emoji.chars().count(), 2);
        assert_eq!(cat.budget, 0.0);
        assert!(!cat.is_default);
    }

    #[test]
    fn test_add_category_rejects_bad_name() {
        let (_temp_dir, repo) = test_repo();
        let service = CategoryService::new(&repo);

        let result = service.add_category("!", "#aabbcc", "🐶", 0.0);
        assert!(matches!(result, Err(SpendError::Validation(_))));
        assert_eq!(service.list_categories(true).unwrap().len(), 8);
    }

    #[test]
    fn test_edit_category_partial_update() {
        let (_temp_dir, repo) = test_repo();
        let service = CategoryService::new(&repo);

        let cat = service.add_category("Pets", "#aabbcc", "🐶", 50.0).unwrap();
        let updated = service
            .edit_category(
                &cat.id,
                CategoryUpdate {
                    budget: Some(75.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.budget, 75.0);
        assert_eq!(updated.name, "Pets");
        assert_eq!(updated.color, "#aabbcc");
    }

    #[test]
    fn test_edit_rejects_defaults_and_duplicate_names() {
        let (_temp_dir, repo) = test_repo();
        let service = CategoryService::new(&repo);

        let result = service.edit_category(
            &CategoryId::from("food"),
            CategoryUpdate {
                budget: Some(10.0),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(SpendError::DefaultCategory(_))));

        service.add_category("Pets", "#aabbcc", "🐶", 0.0).unwrap();
        let other = service.add_category("Plants", "#aabbcc", "🌱", 0.0).unwrap();
        let result = service.edit_category(
            &other.id,
            CategoryUpdate {
                name: Some("pets".into()),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(SpendError::Validation(_))));

        // Renaming to its own name is fine
        let ok = service.edit_category(
            &other.id,
            CategoryUpdate {
                name: Some("Plants".into()),
                ..Default::default()
            },
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_delete_category_without_expenses() {
        let (_temp_dir, repo) = test_repo();
        let service = CategoryService::new(&repo);

        let cat = service.add_category("Pets", "#aabbcc", "🐶", 0.0).unwrap();
        service.delete_category(&cat.id).unwrap();
        assert!(service.get_category(&cat.id).unwrap().is_none());
    }

    #[test]
    fn test_delete_category_with_expenses_is_blocked() {
        let (_temp_dir, repo) = test_repo();
        let categories = CategoryService::new(&repo);
        let expenses = ExpenseService::new(&repo);

        let cat = categories.add_category("Pets", "#aabbcc", "🐶", 0.0).unwrap();
        expenses
            .add_expense(20.0, "Dog food", &cat.id, None)
            .unwrap();

        let result = categories.delete_category(&cat.id);
        assert!(matches!(result, Err(SpendError::CategoryInUse { .. })));
        assert!(categories.get_category(&cat.id).unwrap().is_some());
    }

    #[test]
    fn test_delete_default_is_blocked() {
        let (_temp_dir, repo) = test_repo();
        let service = CategoryService::new(&repo);

        let result = service.delete_category(&CategoryId::from("food"));
        assert!(matches!(result, Err(SpendError::DefaultCategory(_))));
    }

    #[test]
    fn test_reassign_then_delete() {
        let (_temp_dir, repo) = test_repo();
        let categories = CategoryService::new(&repo);
        let expenses = ExpenseService::new(&repo);

        let cat = categories.add_category("Pets", "#aabbcc", "🐶", 0.0).unwrap();
        expenses.add_expense(20.0, "Dog food", &cat.id, None).unwrap();
        expenses.add_expense(30.0, "Vet", &cat.id, None).unwrap();

        let moved = categories
            .reassign_expenses(&cat.id, &CategoryId::from("others"))
            .unwrap();
        assert_eq!(moved, 2);

        categories.delete_category(&cat.id).unwrap();

        let remaining = repo.with(|doc| doc.expense_count_for(&cat.id)).unwrap();
        assert_eq!(remaining, 0);
        assert_eq!(
            repo.with(|doc| doc.expense_count_for(&CategoryId::from("others")))
                .unwrap(),
            2
        );
    }

    #[test]
    fn test_reassign_to_unknown_category_fails() {
        let (_temp_dir, repo) = test_repo();
        let service = CategoryService::new(&repo);

        let result =
            service.reassign_expenses(&CategoryId::from("food"), &CategoryId::from("nope"));
        assert!(matches!(result, Err(SpendError::NotFound { .. })));
    }

    #[test]
    fn test_monthly_total_windows_by_month_start() {
        let (_temp_dir, repo) = test_repo();
        let categories = CategoryService::new(&repo);
        let expenses = ExpenseService::new(&repo);
        let food = CategoryId::from("food");

        let today = today_string();
        expenses
            .add_expense(10.0, "In window", &food, Some(&today))
            .unwrap();
        expenses
            .add_expense(99.0, "Long ago", &food, Some("2000-01-01"))
            .unwrap();

        assert_eq!(categories.monthly_total(&food).unwrap(), 10.0);
    }

    #[test]
    fn test_budget_status() {
        let (_temp_dir, repo) = test_repo();
        let categories = CategoryService::new(&repo);
        let expenses = ExpenseService::new(&repo);

        let cat = categories.add_category("Pets", "#aabbcc", "🐶", 25.0).unwrap();
        expenses
            .add_expense(30.0, "Dog food", &cat.id, None)
            .unwrap();

        let status = categories.budget_status(&cat.id).unwrap();
        assert!(status.exceeded);
        assert_eq!(status.actual, 30.0);
        assert_eq!(status.budget, 25.0);
    }

    #[test]
    fn test_budget_status_without_budget_reports_zeroes() {
        let (_temp_dir, repo) = test_repo();
        let categories = CategoryService::new(&repo);
        let expenses = ExpenseService::new(&repo);
        let food = CategoryId::from("food");

        expenses.add_expense(500.0, "Feast", &food, None).unwrap();

        // No budget set on the category, so spend is irrelevant
        let status = categories.budget_status(&food).unwrap();
        assert_eq!(
            status,
            BudgetStatus {
                exceeded: false,
                actual: 0.0,
                budget: 0.0
            }
        );

        // Unknown ids behave the same
        let status = categories.budget_status(&CategoryId::from("nope")).unwrap();
        assert!(!status.exceeded);
    }
}
