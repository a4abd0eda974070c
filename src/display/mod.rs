//! Display formatting for terminal output

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::format_budget_table;
pub use category::format_category_presets;
pub use transaction::{format_page_indicator, format_transaction_details, format_transaction_table};

use crate::notification::{Notification, NotificationKind};

/// Format a notification line for stderr/stdout
pub fn format_notification(notification: &Notification) -> String {
    match notification.kind {
        NotificationKind::Warning | NotificationKind::Error => {
            format!("Warning: {}", notification.message)
        }
        NotificationKind::Info | NotificationKind::Success => notification.message.clone(),
    }
}
