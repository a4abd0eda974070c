//! Spending insights
//!
//! Rules evaluated over one month, in a fixed order:
//!
//! 1. one insight per budget of the month (exceeded, close to the limit,
//!    or within budget, first match wins)
//! 2. the top spending category, if anything was spent
//! 3. overall spent against budgeted, if anything was budgeted
//! 4. a hint when the month has neither budgets nor expenses

use std::fmt;

use super::category_totals;
use crate::models::money::DEFAULT_SYMBOL;
use crate::models::{Budget, Money, MonthKey, Transaction, TransactionType};

/// Severity of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Warning,
    Caution,
    Success,
    Info,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Caution => "caution",
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single observation about a month's spending
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insight {
    BudgetExceeded { category: String, over: Money },
    BudgetNearLimit { category: String, spent: Money, budgeted: Money },
    WithinBudget { category: String, remaining: Money },
    TopCategory { category: String, spent: Money },
    OverallWithinBudget { spent: Money, budgeted: Money },
    OverallOverspent { over: Money },
    NoData,
}

impl Insight {
    pub fn kind(&self) -> InsightKind {
        match self {
            Self::BudgetExceeded { .. } | Self::OverallOverspent { .. } => InsightKind::Warning,
            Self::BudgetNearLimit { .. } => InsightKind::Caution,
            Self::WithinBudget { .. } | Self::OverallWithinBudget { .. } => InsightKind::Success,
            Self::TopCategory { .. } | Self::NoData => InsightKind::Info,
        }
    }

    /// The message text, with amounts prefixed by `symbol`
    pub fn message(&self, symbol: &str) -> String {
        let m = |amount: &Money| amount.format_with_symbol(symbol);
        match self {
            Self::BudgetExceeded { category, over } => {
                format!("You've exceeded your {} budget by {}!", category, m(over))
            }
            Self::BudgetNearLimit {
                category,
                spent,
                budgeted,
            } => format!(
                "You're close to exceeding your {} budget ({} of {} spent).",
                category,
                m(spent),
                m(budgeted)
            ),
            Self::WithinBudget {
                category,
                remaining,
            } => format!(
                "You're within budget for {}, with {} remaining.",
                category,
                m(remaining)
            ),
            Self::TopCategory { category, spent } => {
                format!("{} is your top spending category at {}.", category, m(spent))
            }
            Self::OverallWithinBudget { spent, budgeted } => format!(
                "Great job! Your total spending ({}) is within your budget ({}).",
                m(spent),
                m(budgeted)
            ),
            Self::OverallOverspent { over } => {
                format!("You've overspent by {} across all categories.", m(over))
            }
            Self::NoData => {
                "No spending or budget data for this month. Set a budget to start tracking!"
                    .to_string()
            }
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(DEFAULT_SYMBOL))
    }
}

/// Evaluate the insight rules for `month`
pub fn generate_insights(
    transactions: &[Transaction],
    budgets: &[Budget],
    month: MonthKey,
) -> Vec<Insight> {
    let month_budgets: Vec<&Budget> = budgets.iter().filter(|b| b.month == month).collect();
    let expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Expense && month.contains(t.date))
        .collect();
    let spending = category_totals(expenses.iter().copied());

    let mut insights = Vec::new();

    for budget in &month_budgets {
        let spent = spending
            .iter()
            .find(|c| c.category == budget.category)
            .map(|c| c.amount)
            .unwrap_or_default();
        insights.push(budget_insight(&budget.category, spent, budget.amount));
    }

    // Strictly greater keeps the first encountered category on ties
    let mut top: Option<(&str, Money)> = None;
    for entry in &spending {
        if top.map_or(true, |(_, best)| entry.amount > best) {
            top = Some((entry.category.as_str(), entry.amount));
        }
    }
    if let Some((category, spent)) = top {
        insights.push(Insight::TopCategory {
            category: category.to_string(),
            spent,
        });
    }

    let total_budgeted: Money = month_budgets.iter().map(|b| b.amount).sum();
    let total_spent: Money = expenses.iter().map(|t| t.amount).sum();
    if total_budgeted.is_positive() {
        if total_spent <= total_budgeted {
            insights.push(Insight::OverallWithinBudget {
                spent: total_spent,
                budgeted: total_budgeted,
            });
        } else {
            insights.push(Insight::OverallOverspent {
                over: total_spent - total_budgeted,
            });
        }
    }

    if month_budgets.is_empty() && expenses.is_empty() {
        insights.push(Insight::NoData);
    }

    insights
}

fn budget_insight(category: &str, spent: Money, budgeted: Money) -> Insight {
    let category = category.to_string();
    if spent > budgeted {
        Insight::BudgetExceeded {
            category,
            over: spent - budgeted,
        }
    } else if i128::from(spent.cents()) * 10 > i128::from(budgeted.cents()) * 8 {
        // more than 80% of the budget used
        Insight::BudgetNearLimit {
            category,
            spent,
            budgeted,
        }
    } else {
        Insight::WithinBudget {
            category,
            remaining: budgeted - spent,
        }
    }
}

/// Insights for one month, ready to print
#[derive(Debug, Clone)]
pub struct InsightReport {
    pub month: MonthKey,
    pub insights: Vec<Insight>,
}

impl InsightReport {
    pub fn generate(transactions: &[Transaction], budgets: &[Budget], month: MonthKey) -> Self {
        Self {
            month,
            insights: generate_insights(transactions, budgets, month),
        }
    }

    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending Insights ({})\n", self.month));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for insight in &self.insights {
            output.push_str(&format!(
                "[{:<7}] {}\n",
                insight.kind().as_str(),
                insight.message(symbol)
            ));
        }

        output
    }
}
