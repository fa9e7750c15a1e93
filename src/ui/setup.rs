use crate::app::JobDebuggerApp;
use crate::settings::{Stack, MAX_PAGE};
use eframe::egui;

pub fn setup_panel(ui: &mut egui::Ui, app: &mut JobDebuggerApp) {
    ui.heading("Job selector");
    ui.add_space(4.0);

    ui.label("1) Insert storage token");
    ui.label("2) Get the runId from a job event — for \"810824168.810824226\" the runId is \"810824168\"");
    ui.add_space(8.0);

    ui.label("Select stack:");
    ui.horizontal(|ui| {
        for stack in Stack::ALL {
            ui.radio_value(&mut app.input.stack, stack, stack.label());
        }
    });
    ui.add_space(6.0);

    ui.label("Storage token:");
    ui.add(egui::TextEdit::singleline(&mut app.input.token).password(true));
    ui.add_space(6.0);

    ui.label("Job ID:");
    ui.text_edit_singleline(&mut app.input.job_id);
    ui.add_space(6.0);

    ui.label("Number of event logs:");
    ui.add(
        egui::Slider::new(&mut app.input.event_limit, 0..=MAX_PAGE)
            .step_by(100.0)
            .integer(),
    );
    ui.add_space(10.0);

    if ui.button("Gather events").clicked() {
        if let Err(e) = app.gather_events() {
            app.ui.last_error = Some(e.to_string());
        }
    }

    if let Some(dataset) = &app.dataset {
        ui.add_space(12.0);
        ui.separator();
        ui.label(format!("Selected job: {}", dataset.job_id));
        ui.label(format!("Contacting URL: {}", app.input.stack.events_url()));
    }
}
