use std::time::{Duration, Instant};

use egui::{Align2, Color32, RichText};

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    created: Instant,
}

/// Transient operation feedback, stacked in the top-right corner.
///
/// Every mutation and fetch outcome lands here; toasts disappear on
/// their own after a few seconds.
pub struct Notifications {
    pub toasts: Vec<Toast>,
}

impl Notifications {
    pub fn new() -> Self {
        Self { toasts: Vec::new() }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toasts.push(Toast {
            message: message.into(),
            level,
            created: Instant::now(),
        });
    }

    /// Drops every toast older than the TTL, measured against `now`.
    pub fn prune(&mut self, now: Instant) {
        self.toasts
            .retain(|toast| now.duration_since(toast.created) < TOAST_TTL);
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        self.prune(Instant::now());
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new("notifications".into())
            .anchor(Align2::RIGHT_TOP, [-10.0, 10.0])
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let fill = match toast.level {
                        ToastLevel::Success => Color32::from_rgb(22, 115, 58),
                        ToastLevel::Error => Color32::from_rgb(154, 32, 32),
                    };
                    egui::Frame::none()
                        .fill(fill)
                        .rounding(6.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(&toast.message)
                                    .color(Color32::WHITE)
                                    .size(14.0),
                            );
                        });
                    ui.add_space(4.0);
                }
            });

        // Expired toasts must vanish even when no input arrives
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_the_ttl() {
        let mut notifications = Notifications::new();
        notifications.success("Airline created successfully");
        notifications.error("Failed to delete airline");
        assert_eq!(notifications.toasts.len(), 2);

        let now = Instant::now();
        notifications.prune(now + Duration::from_secs(1));
        assert_eq!(notifications.toasts.len(), 2);

        notifications.prune(now + Duration::from_secs(5));
        assert!(notifications.toasts.is_empty());
    }

    #[test]
    fn levels_are_kept_per_toast() {
        let mut notifications = Notifications::new();
        notifications.success("Airline updated successfully");
        notifications.error("Failed to update airline");

        assert_eq!(notifications.toasts[0].level, ToastLevel::Success);
        assert_eq!(notifications.toasts[1].level, ToastLevel::Error);
    }
}
