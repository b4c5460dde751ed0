use client::Airline;
use egui::{Color32, RichText};

/// Read-only dialog with everything the table knows about one airline.
pub struct WidgetAirlineDetail {
    pub airline: Airline,
}

impl WidgetAirlineDetail {
    pub fn new(airline: Airline) -> Self {
        Self { airline }
    }

    /// Shows the dialog. Returns whether it is still open.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;

        egui::Window::new(format!("Airline {}", self.airline.code))
            .resizable(false)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(&self.airline.name)
                        .strong()
                        .size(20.0)
                        .color(Color32::from_rgb(0, 150, 255)),
                );
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Code:").strong());
                    ui.label(&self.airline.code);
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Terminal:").strong());
                    ui.label(&self.airline.terminal);
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Image:").strong());
                    if self.airline.image.is_empty() {
                        ui.label("-");
                    } else {
                        ui.label(&self.airline.image);
                    }
                });

                if !self.airline.image.is_empty() {
                    ui.add_space(10.0);
                    ui.add(
                        egui::Image::new(self.airline.image.as_str())
                            .fit_to_exact_size([96.0, 96.0].into()),
                    );
                }
            });

        open
    }
}
