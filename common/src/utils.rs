use serde::{Deserialize, Serialize};

use crate::{impl_display_for_enum, impl_from_str_for_enum};

/// Shown in place of a customer's phone number when the service omits it.
pub const PHONE_PLACEHOLDER: &str = "N/A";

pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// Entries of the dashboard navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavItem {
    HOME,
    INBOX,
    CUSTOMERS,
    CAMPAIGNS,
    SETTINGS,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::HOME,
        NavItem::INBOX,
        NavItem::CUSTOMERS,
        NavItem::CAMPAIGNS,
        NavItem::SETTINGS,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    TEXT,
    JSON,
}

impl_from_str_for_enum!(OutputFormat, TEXT, JSON);
impl_display_for_enum!(OutputFormat, TEXT => "text", JSON => "json");
impl_display_for_enum!(
    NavItem,
    HOME => "Home",
    INBOX => "Inbox",
    CUSTOMERS => "Customers",
    CAMPAIGNS => "Campaigns",
    SETTINGS => "Settings"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1234.50");
        assert_eq!(format_currency(-3.25), "-$3.25");
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::JSON);
        assert_eq!("Text".parse::<OutputFormat>().unwrap(), OutputFormat::TEXT);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::JSON.to_string(), "json");
    }

    #[test]
    fn nav_items_have_labels() {
        let labels: Vec<String> = NavItem::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            ["Home", "Inbox", "Customers", "Campaigns", "Settings"]
        );
    }
}
