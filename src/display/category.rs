//! Preset category listing

use crate::models::category::{BUDGET_CATEGORIES, EXPENSE_CATEGORIES, INCOME_CATEGORIES};

/// List the suggested categories per form
pub fn format_category_presets() -> String {
    let mut output = String::new();

    for (title, names) in [
        ("Expense", &EXPENSE_CATEGORIES),
        ("Income", &INCOME_CATEGORIES),
        ("Budget", &BUDGET_CATEGORIES),
    ] {
        output.push_str(&format!("{} categories:\n", title));
        for name in names.iter() {
            output.push_str(&format!("  {}\n", name));
        }
    }

    output.push_str("\nCategories are free-form; any name can be used.\n");
    output
}
