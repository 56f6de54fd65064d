use controls_shared::Control;
use egui::{Color32, Context};

use crate::config::ControllerChoice;
use crate::input::Controller;

/// Row text for one control, e.g. `right    0.75`.
fn describe(control: &Control) -> String {
    format!("{:<8} {:>5.2}", control.id().label(), control.value())
}

pub fn show(ctx: &Context, controller: &Controller, survey: &[Control; 6], open: &mut bool) {
    egui::Window::new("Input Inspector")
        .open(open)
        .default_pos([760.0, 20.0])
        .show(ctx, |ui| {
            ui.heading(controller.to_string());
            ui.label(format!("F2 cycles: {}", ControllerChoice::ALL.map(|c| c.to_string()).join(" → ")));
            ui.separator();

            ui.label("Latest survey:");
            for control in survey {
                let color = if control.is_activated() {
                    Color32::GREEN
                } else {
                    Color32::from_gray(100)
                };
                ui.colored_label(color, describe(control));
            }

            if let Some(key) = controller.binding(controls_shared::ControlId::Accept) {
                ui.separator();
                ui.label(format!("accept: {key}"));
            }
        });
}
