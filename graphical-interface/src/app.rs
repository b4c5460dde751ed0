use egui::{Align2, Color32, Context};
use egui_extras::install_image_loaders;

use crate::api::{Api, Provider};
use crate::notifications::Notifications;
use crate::state::{LoadState, RowDialog, SelectionState, ViewState};
use crate::widgets::{
    WidgetAddAirline, WidgetAirlineDetail, WidgetAirlinesTable, WidgetDeleteAirline,
    WidgetEditAirline,
};

/// The main application struct that manages the state and UI of the
/// airlines admin console.
///
/// `AdminApp` wires the table, the per-row dialogs, the creation dialog
/// and the toast area to a single [`ViewState`] fed by the backend
/// provider.
pub struct AdminApp {
    api: Api,
    view_state: ViewState,
    selection: SelectionState,
    notifications: Notifications,
    table: WidgetAirlinesTable,
    row_widget: Option<RowWidget>,
    add_widget: Option<WidgetAddAirline>,
    first_frame_painted: bool,
}

// The widget behind the currently open row dialog.
enum RowWidget {
    Detail(WidgetAirlineDetail),
    Edit(WidgetEditAirline),
    Delete(WidgetDeleteAirline),
}

impl AdminApp {
    pub fn new(egui_ctx: Context, api: Api) -> Self {
        install_image_loaders(&egui_ctx);

        Self {
            api,
            view_state: ViewState::new(),
            selection: SelectionState::new(),
            notifications: Notifications::new(),
            table: WidgetAirlinesTable,
            row_widget: None,
            add_widget: None,
            first_frame_painted: false,
        }
    }

    /// Rebuilds the row dialog widget whenever the selection points at a
    /// different dialog than the one currently shown. A selection for a
    /// record that vanished from the list is simply dropped.
    fn sync_row_widget(&mut self) {
        let Some(dialog) = self.selection.open.clone() else {
            self.row_widget = None;
            return;
        };

        let matches = match (&self.row_widget, &dialog) {
            (Some(RowWidget::Detail(w)), RowDialog::Detail(id)) => w.airline.id == *id,
            (Some(RowWidget::Edit(w)), RowDialog::Edit(id)) => w.airline_id() == id.as_str(),
            (Some(RowWidget::Delete(w)), RowDialog::Delete(id)) => w.airline.id == *id,
            _ => false,
        };
        if matches {
            return;
        }

        let airline = self.view_state.airline(dialog.airline_id()).cloned();
        self.row_widget = match airline {
            None => {
                self.selection.close();
                None
            }
            Some(airline) => Some(match dialog {
                RowDialog::Detail(_) => RowWidget::Detail(WidgetAirlineDetail::new(airline)),
                RowDialog::Edit(_) => RowWidget::Edit(WidgetEditAirline::new(airline)),
                RowDialog::Delete(_) => RowWidget::Delete(WidgetDeleteAirline::new(airline)),
            }),
        };
    }
}

impl eframe::App for AdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Airlines");
            ui.add_space(10.0);

            match self.view_state.load_state {
                LoadState::Loading => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.spinner();
                        ui.label("Loading airlines...");
                    });
                }
                LoadState::Failed => {
                    ui.colored_label(Color32::RED, "Failed to fetch airlines data");
                    if ui.button("Retry").clicked() {
                        self.view_state
                            .refresh(&mut self.api, &mut self.notifications);
                    }
                }
                LoadState::Loaded => {
                    ui.horizontal(|ui| {
                        ui.label(format!("{} airlines", self.view_state.airlines.len()));
                        if ui.button("Refresh").clicked() {
                            self.view_state
                                .refresh(&mut self.api, &mut self.notifications);
                        }
                    });
                    ui.add_space(10.0);
                    self.table
                        .ui(ui, &self.view_state.airlines, &mut self.selection);
                }
            }
        });

        // The initial fetch runs after the first frame so the loading
        // indicator is on screen while the request is in flight.
        if self.view_state.load_state == LoadState::Loading {
            if self.first_frame_painted {
                self.view_state
                    .refresh(&mut self.api, &mut self.notifications);
            } else {
                self.first_frame_painted = true;
                ctx.request_repaint();
            }
        }

        self.sync_row_widget();
        if let Some(widget) = &mut self.row_widget {
            let still_open = match widget {
                RowWidget::Detail(w) => w.show(ctx),
                RowWidget::Edit(w) => w.show(
                    ctx,
                    &mut self.api,
                    &mut self.view_state,
                    &mut self.notifications,
                ),
                RowWidget::Delete(w) => w.show(
                    ctx,
                    &mut self.api,
                    &mut self.view_state,
                    &mut self.notifications,
                ),
            };
            if !still_open {
                self.selection.close();
                self.row_widget = None;
            }
        }

        egui::Area::new("add_airline_button".into())
            .anchor(Align2::RIGHT_BOTTOM, [-10.0, -10.0])
            .show(ctx, |ui| {
                let button_size = [150.0, 60.0];

                if ui
                    .add_sized(button_size, egui::Button::new("Add Airline").rounding(10.0))
                    .clicked()
                {
                    self.add_widget = Some(WidgetAddAirline::new());
                }
            });

        if let Some(widget) = &mut self.add_widget {
            if !widget.show(
                ctx,
                &mut self.api,
                &mut self.view_state,
                &mut self.notifications,
            ) {
                self.add_widget = None;
            }
        }

        self.notifications.ui(ctx);
    }
}
