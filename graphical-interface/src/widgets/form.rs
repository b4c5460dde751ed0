use std::path::Path;

use client::{Airline, AirlineDraft, ImageFile};

/// The shared field set of the create and edit dialogs.
///
/// `image_path` holds a path typed by the operator; it starts empty and
/// stays empty unless a file is actually chosen, so an untouched input
/// produces a draft without an image and the stored image survives an
/// update.
pub struct AirlineForm {
    pub code: String,
    pub name: String,
    pub terminal: String,
    pub image_path: String,
}

impl AirlineForm {
    pub fn empty() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            terminal: String::new(),
            image_path: String::new(),
        }
    }

    pub fn prefilled(airline: &Airline) -> Self {
        Self {
            code: airline.code.clone(),
            name: airline.name.clone(),
            terminal: airline.terminal.clone(),
            image_path: String::new(),
        }
    }

    pub fn validate(&self) -> Vec<&'static str> {
        let mut errors = vec![];

        if self.code.trim().is_empty() {
            errors.push("Code is required.");
        }
        if self.name.trim().is_empty() {
            errors.push("Name is required.");
        }
        if self.terminal.trim().is_empty() {
            errors.push("Terminal is required.");
        }

        errors
    }

    /// Builds the write payload. The image is staged from disk only when
    /// a path was given; a bad path or format comes back as the message
    /// for the dialog's error label.
    pub fn to_draft(&self) -> Result<AirlineDraft, String> {
        let image_path = self.image_path.trim();
        let image = if image_path.is_empty() {
            None
        } else {
            Some(ImageFile::from_path(Path::new(image_path)).map_err(|err| err.to_string())?)
        };

        Ok(AirlineDraft {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            terminal: self.terminal.trim().to_string(),
            image,
        })
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Code:");
            ui.text_edit_singleline(&mut self.code);
        });

        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut self.name);
        });

        ui.horizontal(|ui| {
            ui.label("Terminal:");
            ui.text_edit_singleline(&mut self.terminal);
        });

        ui.horizontal(|ui| {
            ui.label("Image file:");
            ui.text_edit_singleline(&mut self.image_path);
        });
    }
}
