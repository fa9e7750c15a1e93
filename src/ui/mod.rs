mod gantt;
mod preview;
mod setup;

use crate::app::JobDebuggerApp;
use eframe::egui;

pub fn render_app(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut JobDebuggerApp) {
    top_bar(ctx, frame, app);

    egui::SidePanel::left("setup_panel")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| setup::setup_panel(ui, app));

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Job Debugger");
        ui.add_space(6.0);
        preview::preview_panel(ui, app);
        ui.add_space(10.0);
        gantt::gantt_panel(ui, app);
    });

    about_window(ctx, app);
    status_bar(ctx, app);
}

fn top_bar(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut JobDebuggerApp) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                let has_rows = app
                    .dataset
                    .as_ref()
                    .map(|d| !d.rows.is_empty())
                    .unwrap_or(false);
                if ui
                    .add_enabled(has_rows, egui::Button::new("Save CSV..."))
                    .clicked()
                {
                    ui.close_menu();
                    save_csv_dialog(app);
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    let _ = frame;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset zoom").clicked() {
                    ctx.set_zoom_factor(1.0);
                    ui.close_menu();
                }
                ui.checkbox(&mut app.ui.show_fetch_log, "Fetch log");
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    app.ui.show_about = true;
                    ui.close_menu();
                }
            });
        });
    });
}

fn save_csv_dialog(app: &mut JobDebuggerApp) {
    let Some(dataset) = &app.dataset else {
        return;
    };
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("CSV", &["csv"])
        .set_file_name(crate::export::DEFAULT_CSV_NAME)
        .save_file()
    {
        match crate::export::save_csv(&dataset.rows, &path) {
            Ok(()) => {
                app.ui.last_export = Some(path.display().to_string());
            }
            Err(e) => {
                app.ui.last_error = Some(e.to_string());
            }
        }
    }
}

fn about_window(ctx: &egui::Context, app: &mut JobDebuggerApp) {
    if !app.ui.show_about {
        return;
    }

    egui::Window::new("About Job Debugger")
        .open(&mut app.ui.show_about)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Inspect one orchestration job run as a Gantt timeline.");
            ui.label("Events are fetched page by page, classified, and paired into per-task durations.");
        });
}

fn status_bar(ctx: &egui::Context, app: &mut JobDebuggerApp) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match &app.dataset {
                Some(dataset) => {
                    ui.label(format!("Rows: {}", dataset.rows.len()));
                    ui.separator();
                    ui.label(format!("Job: {}", dataset.job_id));
                }
                None => {
                    ui.label("No job gathered yet");
                }
            }
            if let Some(id) = app.selected {
                if let Some(row) = app.dataset.as_ref().and_then(|d| d.rows.get(id)) {
                    ui.separator();
                    ui.label(format!(
                        "Selected: {} ({}s)",
                        truncate(&row.event.message, 60),
                        row.duration
                    ));
                }
            }
            if let Some(path) = &app.ui.last_export {
                ui.separator();
                ui.label(format!("Saved: {path}"));
            }
            if let Some(err) = &app.ui.last_error {
                ui.separator();
                ui.colored_label(
                    egui::Color32::from_rgb(255, 70, 70),
                    format!("Error: {err}"),
                );
            }
        });
    });
}

/// Cut long free-text messages for on-screen display; the CSV keeps them whole.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

/// Stable per-component bar color derived from the name.
pub fn component_color(name: &str) -> egui::Color32 {
    use std::hash::{Hash, Hasher};
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    name.hash(&mut hasher);
    let v = hasher.finish();
    // Keep channels in a mid-bright band so every bar reads on a dark panel.
    let r = 90 + (v & 0x7f) as u8;
    let g = 90 + ((v >> 8) & 0x7f) as u8;
    let b = 90 + ((v >> 16) & 0x7f) as u8;
    egui::Color32::from_rgb(r, g, b)
}
