use crate::app::JobDebuggerApp;
use crate::ui::truncate;
use eframe::egui;

pub fn preview_panel(ui: &mut egui::Ui, app: &mut JobDebuggerApp) {
    let Some(dataset) = &app.dataset else {
        ui.label("Pick a stack, paste a token and a job id, then gather events.");
        return;
    };

    // Acquired metrics, as in the original's EVENTS / TASKS / time row.
    ui.horizontal(|ui| {
        metric(ui, "EVENTS", &dataset.summary.event_count.to_string());
        metric(ui, "TASKS", &dataset.summary.task_count.to_string());
        if let Some(start) = dataset.summary.start_clock() {
            metric(ui, "Job START", &start);
        }
        if let Some(end) = dataset.summary.end_clock() {
            metric(ui, "Job END", &end);
        }
        if let Some(dur) = dataset.summary.duration_string() {
            metric(ui, "Job DURATION", &dur);
        }
    });

    if let Some(err) = &dataset.fetch_error {
        ui.add_space(4.0);
        ui.colored_label(
            egui::Color32::from_rgb(255, 170, 0),
            format!("Pagination stopped early: {}", truncate(err, 200)),
        );
    }

    if app.ui.show_fetch_log && !dataset.fetch_log.is_empty() {
        ui.add_space(4.0);
        egui::CollapsingHeader::new(format!("Fetch log ({} lines)", dataset.fetch_log.len()))
            .default_open(false)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_source("fetch_log_scroll")
                    .max_height(120.0)
                    .show(ui, |ui| {
                        for line in &dataset.fetch_log {
                            ui.monospace(line);
                        }
                    });
            });
    }

    ui.add_space(8.0);
    ui.label("Data preview:");

    ui.horizontal(|ui| {
        ui.label("Filter:");
        ui.text_edit_singleline(&mut app.ui.message_filter);
        if ui.button("Clear").clicked() {
            app.ui.message_filter.clear();
        }
    });
    ui.add_space(4.0);

    let filter = app.ui.message_filter.trim().to_ascii_lowercase();

    egui::ScrollArea::both()
        .id_source("preview_scroll")
        .max_height(260.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("preview_grid")
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui| {
                    for col in crate::export::CSV_COLUMNS {
                        ui.strong(col);
                    }
                    ui.end_row();

                    for (id, row) in dataset.rows.iter() {
                        if !filter.is_empty()
                            && !row.event.message.to_ascii_lowercase().contains(&filter)
                            && !row.event.component.to_ascii_lowercase().contains(&filter)
                        {
                            continue;
                        }

                        let selected = app.selected == Some(id);
                        ui.monospace(&row.event.created);
                        let response = ui.add(egui::SelectableLabel::new(
                            selected,
                            truncate(&row.event.message, 100),
                        ));
                        if response.clicked() {
                            app.selected = Some(id);
                        }
                        ui.monospace(&row.event.run_id);
                        ui.label(&row.event.component);
                        ui.label(row.hierarchy.as_str());
                        ui.monospace(row.next_event.as_deref().unwrap_or(""));
                        ui.label(&row.stage);
                        ui.monospace(row.duration.to_string());
                        ui.end_row();
                    }
                });
        });
}

fn metric(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.small(label);
        ui.strong(value);
    });
    ui.separator();
}
