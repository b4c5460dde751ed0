pub mod api;
mod app;
mod notifications;
mod state;
mod widgets;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{Api, ApiError, Provider};

use app::AdminApp;

pub fn run() -> Result<(), eframe::Error> {
    eframe::run_native(
        "SkyFly Admin",
        Default::default(),
        Box::new(|cc| {
            let api = Api::from_env()
                .map_err(|err| -> Box<dyn std::error::Error + Send + Sync> { Box::new(err) })?;
            Ok(Box::new(AdminApp::new(cc.egui_ctx.clone(), api)))
        }),
    )
}
