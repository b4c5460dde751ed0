use client::Airline;

use crate::api::Provider;
use crate::notifications::Notifications;

/// Phase of the airlines list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

/// Tracks the airline records to display.
pub struct ViewState {
    pub airlines: Vec<Airline>,
    pub load_state: LoadState,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            airlines: Vec::new(),
            load_state: LoadState::Loading,
        }
    }

    /// Replaces the whole list with a fresh read from the backend. Used
    /// for the initial load and after every successful mutation; a
    /// failed read clears the list and leaves the view in `Failed`.
    pub fn refresh<P: Provider>(&mut self, api: &mut P, notifications: &mut Notifications) {
        match api.get_airlines() {
            Ok(airlines) => {
                self.airlines = airlines;
                self.load_state = LoadState::Loaded;
            }
            Err(_) => {
                self.airlines.clear();
                self.load_state = LoadState::Failed;
                notifications.error("Failed to fetch airlines data");
            }
        }
    }

    pub fn airline(&self, id: &str) -> Option<&Airline> {
        self.airlines.iter().find(|airline| airline.id == id)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Which dialog a row has open, addressed by the record id.
#[derive(Debug, Clone, PartialEq)]
pub enum RowDialog {
    Detail(String),
    Edit(String),
    Delete(String),
}

impl RowDialog {
    pub fn airline_id(&self) -> &str {
        match self {
            RowDialog::Detail(id) | RowDialog::Edit(id) | RowDialog::Delete(id) => id,
        }
    }
}

/// Tracks the open dialog. At most one dialog is open at a time; opening
/// another replaces it, which is exactly what clicking a different row
/// action should do.
pub struct SelectionState {
    pub open: Option<RowDialog>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self { open: None }
    }

    pub fn open_detail(&mut self, id: &str) {
        self.open = Some(RowDialog::Detail(id.to_string()));
    }

    pub fn open_edit(&mut self, id: &str) {
        self.open = Some(RowDialog::Edit(id.to_string()));
    }

    pub fn open_delete(&mut self, id: &str) {
        self.open = Some(RowDialog::Delete(id.to_string()));
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
