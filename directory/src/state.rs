use common::models::Customer;
use serde::Serialize;

use crate::error::FetchError;

/// Everything the rendering side reads from the directory.
///
/// `loading` and `selection` are independent: either can change without the
/// other. `last_error` holds the most recent failure until a fetch succeeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryState {
    pub customers: Vec<Customer>,
    pub loading: bool,
    pub selection: Option<Customer>,
    pub last_error: Option<FetchError>,
}

impl Default for DirectoryState {
    // Nothing has been loaded yet, so the directory starts out loading.
    fn default() -> Self {
        Self {
            customers: Vec::new(),
            loading: true,
            selection: None,
            last_error: None,
        }
    }
}

impl DirectoryState {
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Position of the selected customer in the collection, if it is there.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selection.as_ref()?;
        self.customers.iter().position(|c| c == selected)
    }
}
