use colored::Colorize;
use common::{models::Customer, utils::NavItem};
use directory::DirectoryState;

const SIDEBAR_WIDTH: usize = 14;
const LIST_WIDTH: usize = 34;
const DETAIL_WIDTH: usize = 40;

/// Renders the directory as a header, a status line and three columns:
/// navigation, customer list, selected customer details.
pub fn render(state: &DirectoryState) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Customers".bold()));
    out.push_str(&format!("{}\n", "Profile Overview".green()));

    if let Some(status) = status_line(state) {
        out.push_str(&status);
        out.push('\n');
    }
    out.push('\n');

    let sidebar = sidebar_column();
    let list = list_column(state);
    let detail = detail_column(state.selection.as_ref());
    let rows = sidebar.len().max(list.len()).max(detail.len());

    for row in 0..rows {
        let sidebar_cell = sidebar.get(row).cloned().unwrap_or_else(|| blank(SIDEBAR_WIDTH));
        let list_cell = list.get(row).cloned().unwrap_or_else(|| blank(LIST_WIDTH));
        let detail_cell = detail.get(row).cloned().unwrap_or_default();
        out.push_str(format!("{} | {} | {}", sidebar_cell, list_cell, detail_cell).trim_end());
        out.push('\n');
    }

    out
}

fn status_line(state: &DirectoryState) -> Option<String> {
    if state.loading {
        return Some("Loading customers...".yellow().to_string());
    }
    state
        .last_error
        .as_ref()
        .map(|err| format!("Could not load customers: {}", err).as_str().red().to_string())
}

fn sidebar_column() -> Vec<String> {
    NavItem::ALL
        .iter()
        .map(|item| {
            if *item == NavItem::CUSTOMERS {
                fit(&format!("> {}", item), SIDEBAR_WIDTH).as_str().bold().to_string()
            } else {
                fit(&format!("  {}", item), SIDEBAR_WIDTH)
            }
        })
        .collect()
}

fn list_column(state: &DirectoryState) -> Vec<String> {
    let title = fit(&format!("All ({})", state.customers.len()), LIST_WIDTH);
    let mut lines = vec![title.as_str().underline().to_string()];

    if state.customers.is_empty() {
        lines.push(fit("No customers", LIST_WIDTH).as_str().dimmed().to_string());
        return lines;
    }

    let selected = state.selected_index();
    for (index, customer) in state.customers.iter().enumerate() {
        let label = format!("{}. {}", index + 1, customer.full_name());
        if selected == Some(index) {
            let row = fit(&format!("* {}", label), LIST_WIDTH);
            lines.push(row.as_str().cyan().bold().to_string());
        } else {
            lines.push(fit(&format!("  {}", label), LIST_WIDTH));
        }
    }
    lines
}

fn detail_column(selection: Option<&Customer>) -> Vec<String> {
    let Some(customer) = selection else {
        return vec!["Select a customer to view details".dimmed().to_string()];
    };

    vec![
        fit(&customer.full_name(), DETAIL_WIDTH).as_str().bold().to_string(),
        fit(&format!("Email: {}", customer.email), DETAIL_WIDTH),
        fit(&format!("Phone: {}", customer.phone_display()), DETAIL_WIDTH),
        fit(
            &format!("Total spent: {}", customer.total_spent_display()),
            DETAIL_WIDTH,
        ),
    ]
}

/// Pads or truncates to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('~');
        cut
    } else {
        format!("{}{}", text, " ".repeat(width - count))
    }
}

fn blank(width: usize) -> String {
    " ".repeat(width)
}
