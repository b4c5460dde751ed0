use client::Airline;
use egui::Color32;

use super::form::AirlineForm;
use crate::api::Provider;
use crate::notifications::Notifications;
use crate::state::ViewState;

/// A widget for editing an existing airline.
///
/// Pre-filled from the target record; the image input starts empty and
/// the stored image is replaced only when a new file is chosen.
pub struct WidgetEditAirline {
    airline: Airline,
    form: AirlineForm,
    error_message: Option<String>,
}

impl WidgetEditAirline {
    pub fn new(airline: Airline) -> Self {
        let form = AirlineForm::prefilled(&airline);
        Self {
            airline,
            form,
            error_message: None,
        }
    }

    pub fn airline_id(&self) -> &str {
        &self.airline.id
    }

    /// Shows the edit dialog. Returns whether it is still open.
    pub fn show<P: Provider>(
        &mut self,
        ctx: &egui::Context,
        api: &mut P,
        view: &mut ViewState,
        notifications: &mut Notifications,
    ) -> bool {
        let mut is_open = true;
        let mut should_close = false;

        egui::Window::new(format!("Edit {}", self.airline.name))
            .resizable(false)
            .open(&mut is_open)
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    self.form.ui(ui);
                    ui.label("Leave the image file empty to keep the current image.");

                    if let Some(error) = &self.error_message {
                        ui.colored_label(Color32::RED, error);
                    }

                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if ui.button("Update").clicked()
                            && self.submit(api, view, notifications)
                        {
                            should_close = true;
                        }
                        if ui.button("Close").clicked() {
                            should_close = true;
                        }
                    });
                });
            });

        is_open && !should_close
    }

    /// Validates the form and issues the update call against the target
    /// record. Returns whether the dialog should close.
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

        match api.update_airline(&self.airline.id, &draft) {
            Ok(_) => {
                self.error_message = None;
                notifications.success("Airline updated successfully");
                view.refresh(api, notifications);
                true
            }
            Err(_) => {
                self.error_message = Some("Failed to update airline".to_string());
                notifications.error("Failed to update airline");
                false
            }
        }
    }
}
