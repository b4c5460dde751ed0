use client::Airline;
use egui::{Color32, RichText};

use crate::api::Provider;
use crate::notifications::Notifications;
use crate::state::ViewState;

/// Confirmation dialog guarding the delete call. Opening the dialog
/// issues nothing; only the confirm button does.
pub struct WidgetDeleteAirline {
    pub airline: Airline,
}

impl WidgetDeleteAirline {
    pub fn new(airline: Airline) -> Self {
        Self { airline }
    }

    /// Shows the dialog. Returns whether it is still open.
    pub fn show<P: Provider>(
        &mut self,
        ctx: &egui::Context,
        api: &mut P,
        view: &mut ViewState,
        notifications: &mut Notifications,
    ) -> bool {
        let mut is_open = true;
        let mut should_close = false;

        egui::Window::new("Delete")
            .resizable(false)
            .open(&mut is_open)
            .show(ctx, |ui| {
                ui.label(format!(
                    "Are you sure for deleting '{}' data?",
                    self.airline.name
                ));
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    let delete = egui::Button::new(
                        RichText::new("Yes, Delete it").color(Color32::WHITE),
                    )
                    .fill(Color32::from_rgb(154, 32, 32));
                    if ui.add(delete).clicked() && self.confirm(api, view, notifications) {
                        should_close = true;
                    }
                    if ui.button("Close").clicked() {
                        should_close = true;
                    }
                });
            });

        is_open && !should_close
    }

    /// Issues the delete call for this record. Returns whether the
    /// dialog should close.
    pub fn confirm<P: Provider>(
        &mut self,
        api: &mut P,
        view: &mut ViewState,
        notifications: &mut Notifications,
    ) -> bool {
        match api.delete_airline(&self.airline.id) {
            Ok(()) => {
                notifications.success("Airline deleted successfully");
                view.refresh(api, notifications);
                true
            }
            Err(_) => {
                notifications.error("Failed to delete airline");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::ToastLevel;
    use crate::test_support::{sample_airline, MockApi};

    #[test]
    fn opening_the_dialog_issues_no_request() {
        let api = MockApi::with_airlines(vec![sample_airline("al-4", "ID")]);
        let _widget = WidgetDeleteAirline::new(sample_airline("al-4", "ID"));
        assert!(api.deleted.is_empty());
    }

    #[test]
    fn confirm_issues_exactly_one_delete_for_the_target_id() {
        let mut api = MockApi::with_airlines(vec![sample_airline("al-4", "ID")]);
        let mut view = ViewState::new();
        let mut notifications = Notifications::new();
        let mut widget = WidgetDeleteAirline::new(sample_airline("al-4", "ID"));

        let closed = widget.confirm(&mut api, &mut view, &mut notifications);

        assert!(closed);
        assert_eq!(api.deleted, vec!["al-4".to_string()]);
        assert_eq!(api.list_calls, 1, "Exactly one reload after a delete");
        assert!(notifications
            .toasts
            .iter()
            .any(|toast| toast.level == ToastLevel::Success
                && toast.message == "Airline deleted successfully"));
    }

    #[test]
    fn a_failed_delete_does_not_block_an_independent_one() {
        let mut api = MockApi::with_airlines(vec![
            sample_airline("al-1", "GA"),
            sample_airline("al-2", "QZ"),
        ]);
        api.failing_deletes = vec!["al-1".to_string()];
        let mut view = ViewState::new();
        let mut notifications = Notifications::new();

        let mut first = WidgetDeleteAirline::new(sample_airline("al-1", "GA"));
        let mut second = WidgetDeleteAirline::new(sample_airline("al-2", "QZ"));

        assert!(!first.confirm(&mut api, &mut view, &mut notifications));
        assert!(second.confirm(&mut api, &mut view, &mut notifications));

        assert_eq!(api.deleted, vec!["al-1".to_string(), "al-2".to_string()]);
        assert!(notifications
            .toasts
            .iter()
            .any(|toast| toast.level == ToastLevel::Error
                && toast.message == "Failed to delete airline"));
        assert!(notifications
            .toasts
            .iter()
            .any(|toast| toast.level == ToastLevel::Success
                && toast.message == "Airline deleted successfully"));
    }

    #[test]
    fn failed_delete_leaves_the_list_untouched() {
        let airlines = vec![sample_airline("al-1", "GA"), sample_airline("al-2", "QZ")];
        let mut api = MockApi::with_airlines(airlines.clone());
        api.failing_deletes = vec!["al-1".to_string()];
        let mut view = ViewState::new();
        let mut notifications = Notifications::new();
        view.refresh(&mut api, &mut notifications);
        assert_eq!(api.list_calls, 1);

        let mut widget = WidgetDeleteAirline::new(sample_airline("al-1", "GA"));
        widget.confirm(&mut api, &mut view, &mut notifications);

        // No re-fetch on failure; the last known list stays on screen
        assert_eq!(api.list_calls, 1);
        assert_eq!(view.airlines, airlines);
    }
}
