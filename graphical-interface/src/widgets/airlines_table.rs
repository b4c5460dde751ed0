use client::Airline;
use egui_extras::{Column, TableBuilder};

use crate::state::SelectionState;

const ROW_HEIGHT: f32 = 44.0;
const THUMBNAIL: [f32; 2] = [36.0, 36.0];

/// The airlines table: one row per record plus the per-row action
/// buttons that open the detail, edit and delete dialogs.
pub struct WidgetAirlinesTable;

impl WidgetAirlinesTable {
    pub fn ui(&mut self, ui: &mut egui::Ui, airlines: &[Airline], selection: &mut SelectionState) {
        ui.group(|ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(80.0)) // Code
                .column(Column::remainder().at_least(150.0)) // Name
                .column(Column::auto().at_least(90.0)) // Terminal
                .column(Column::auto().at_least(60.0)) // Image
                .column(Column::auto().at_least(180.0)) // Actions
                .header(25.0, |mut header| {
                    for title in ["Code", "Name", "Terminal", "Image", "Actions"] {
                        header.col(|ui| {
                            ui.strong(egui::RichText::new(title).size(16.0));
                        });
                    }
                })
                .body(|mut body| {
                    for airline in airlines {
                        body.row(ROW_HEIGHT, |mut row| {
                            row.col(|ui| {
                                ui.label(egui::RichText::new(&airline.code).strong());
                            });
                            row.col(|ui| {
                                ui.label(&airline.name);
                            });
                            row.col(|ui| {
                                ui.label(&airline.terminal);
                            });
                            row.col(|ui| {
                                if airline.image.is_empty() {
                                    ui.label("-");
                                } else {
                                    ui.add(
                                        egui::Image::new(airline.image.as_str())
                                            .fit_to_exact_size(THUMBNAIL.into()),
                                    );
                                }
                            });
                            row.col(|ui| {
                                if ui.button("Detail").clicked() {
                                    selection.open_detail(&airline.id);
                                }
                                if ui.button("Edit").clicked() {
                                    selection.open_edit(&airline.id);
                                }
                                if ui.button("Delete").clicked() {
                                    selection.open_delete(&airline.id);
                                }
                            });
                        });
                    }
                });
        });
    }
}
