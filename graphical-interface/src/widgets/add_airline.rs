use egui::Color32;

use super::form::AirlineForm;
use crate::api::Provider;
use crate::notifications::Notifications;
use crate::state::ViewState;

/// A widget for registering a new airline.
///
/// Collects the airline code, display name, terminal and an optional
/// logo image, validates the input and submits it to the backend.
pub struct WidgetAddAirline {
    form: AirlineForm,
    error_message: Option<String>,
}

impl WidgetAddAirline {
    pub fn new() -> Self {
        Self {
            form: AirlineForm::empty(),
            error_message: None,
        }
    }

    /// Shows the creation dialog. Returns whether it is still open.
    pub fn show<P: Provider>(
        &mut self,
        ctx: &egui::Context,
        api: &mut P,
        view: &mut ViewState,
        notifications: &mut Notifications,
    ) -> bool {
        let mut is_open = true;
        let mut should_close = false;

        egui::Window::new("Add Airline")
            .resizable(false)
            .open(&mut is_open)
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    ui.label("Fill in the details of the new airline:");
                    ui.add_space(6.0);

                    self.form.ui(ui);

                    if let Some(error) = &self.error_message {
                        ui.colored_label(Color32::RED, error);
                    }

                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if ui.button("Create").clicked()
                            && self.submit(api, view, notifications)
                        {
                            should_close = true;
                        }
                        if ui.button("Cancel").clicked() {
                            should_close = true;
                        }
                    });
                });
            });

        is_open && !should_close
    }

    /// Validates the form and issues the create call. Returns whether
    /// the dialog should close.
    pub fn submit<P: Provider>(
        &mut self,
        api: &mut P,
        view: &mut ViewState,
        notifications: &mut Notifications,
    ) -> bool {
        let errors = self.form.validate();
        if !errors.is_empty() {
            self.error_message = Some(errors.join("\n"));
            return false;
        }

        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                self.error_message = Some(message);
                return false;
            }
        };

        match api.add_airline(&draft) {
            Ok(_) => {
                self.error_message = None;
                notifications.success("Airline created successfully");
                view.refresh(api, notifications);
                true
            }
            Err(_) => {
                self.error_message = Some("Failed to create airline".to_string());
                notifications.error("Failed to create airline");
                false
            }
        }
    }
}

impl Default for WidgetAddAirline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::ToastLevel;
    use crate::test_support::MockApi;

    fn filled_widget() -> WidgetAddAirline {
        let mut widget = WidgetAddAirline::new();
        widget.form.code = "GA".to_string();
        widget.form.name = "Garuda".to_string();
        widget.form.terminal = "T2".to_string();
        widget
    }

    #[test]
    fn submit_issues_one_create_and_one_refresh() {
        let mut api = MockApi::with_airlines(vec![]);
        let mut view = ViewState::new();
        let mut notifications = Notifications::new();
        let mut widget = filled_widget();

        let closed = widget.submit(&mut api, &mut view, &mut notifications);

        assert!(closed);
        assert_eq!(api.created.len(), 1);
        assert_eq!(api.created[0].code, "GA");
        assert_eq!(api.created[0].name, "Garuda");
        assert_eq!(api.created[0].terminal, "T2");
        assert!(api.created[0].image.is_none());
        assert_eq!(api.list_calls, 1, "Exactly one reload after a create");
        assert!(notifications
            .toasts
            .iter()
            .any(|toast| toast.level == ToastLevel::Success
                && toast.message == "Airline created successfully"));
    }

    #[test]
    fn invalid_form_issues_no_request() {
        let mut api = MockApi::with_airlines(vec![]);
        let mut view = ViewState::new();
        let mut notifications = Notifications::new();
        let mut widget = WidgetAddAirline::new();

        let closed = widget.submit(&mut api, &mut view, &mut notifications);

        assert!(!closed);
        assert!(api.created.is_empty());
        assert_eq!(api.list_calls, 0);
        assert!(widget.error_message.is_some());
    }

    #[test]
    fn failed_create_keeps_the_dialog_open_and_raises_a_toast() {
        let mut api = MockApi::with_airlines(vec![]);
        api.fail_create = true;
        let mut view = ViewState::new();
        let mut notifications = Notifications::new();
        let mut widget = filled_widget();

        let closed = widget.submit(&mut api, &mut view, &mut notifications);

        assert!(!closed);
        assert_eq!(api.list_calls, 0, "No reload after a failed create");
        assert!(notifications
            .toasts
            .iter()
            .any(|toast| toast.level == ToastLevel::Error
                && toast.message == "Failed to create airline"));
    }
}
