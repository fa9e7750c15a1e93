use crate::app::JobDebuggerApp;
use crate::model::{RowId, TimelineRow};
use crate::ui::{component_color, truncate};
use crate::util::time::parse_event_timestamp;
use eframe::egui;

const LANE_HEIGHT: f32 = 26.0;
const LANE_GAP: f32 = 6.0;
const LABEL_WIDTH: f32 = 220.0;
/// Zero-length spans still get a visible sliver.
const MIN_BAR_WIDTH: f32 = 2.0;

pub fn gantt_panel(ui: &mut egui::Ui, app: &mut JobDebuggerApp) {
    let Some(dataset) = &app.dataset else {
        return;
    };
    if dataset.rows.is_empty() {
        return;
    }

    ui.heading("Job Gantt Chart");
    ui.add_space(4.0);

    let lanes = dataset.rows.stage_lanes();
    let Some((t_min, t_max)) = time_range(dataset.rows.iter().map(|(_, r)| r)) else {
        ui.label("No parseable timestamps to chart.");
        return;
    };
    let total_secs = ((t_max - t_min).whole_seconds().max(1)) as f32;

    let height = lanes.len() as f32 * (LANE_HEIGHT + LANE_GAP) + LANE_GAP;
    let width = ui.available_width().max(400.0);

    egui::ScrollArea::vertical()
        .id_source("gantt_scroll")
        .max_height(360.0)
        .show(ui, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());
            let painter = ui.painter_at(rect);

            let chart_left = rect.left() + LABEL_WIDTH;
            let chart_width = (rect.width() - LABEL_WIDTH).max(50.0);

            // Lane labels and separators.
            for (i, lane) in lanes.iter().enumerate() {
                let y = rect.top() + LANE_GAP + i as f32 * (LANE_HEIGHT + LANE_GAP);
                painter.text(
                    egui::pos2(rect.left() + 4.0, y + LANE_HEIGHT / 2.0),
                    egui::Align2::LEFT_CENTER,
                    truncate(lane, 30),
                    egui::TextStyle::Monospace.resolve(ui.style()),
                    ui.visuals().text_color(),
                );
                painter.line_segment(
                    [
                        egui::pos2(chart_left, y + LANE_HEIGHT + LANE_GAP / 2.0),
                        egui::pos2(rect.right(), y + LANE_HEIGHT + LANE_GAP / 2.0),
                    ],
                    egui::Stroke::new(0.5, ui.visuals().widgets.inactive.bg_stroke.color),
                );
            }

            // One bar per row spanning created -> next_event.
            let mut bars: Vec<(egui::Rect, RowId)> = Vec::new();
            for (id, row) in dataset.rows.iter() {
                let Some(start) = parse_event_timestamp(&row.event.created) else {
                    continue;
                };
                let end = row
                    .next_event
                    .as_deref()
                    .and_then(parse_event_timestamp)
                    .unwrap_or(start);

                let Some(lane_idx) = lanes.iter().position(|l| l == &row.stage) else {
                    continue;
                };

                let x0 = chart_left
                    + chart_width * ((start - t_min).whole_seconds().max(0) as f32 / total_secs);
                let x1 = chart_left
                    + chart_width * ((end - t_min).whole_seconds().max(0) as f32 / total_secs);
                let y = rect.top() + LANE_GAP + lane_idx as f32 * (LANE_HEIGHT + LANE_GAP);

                let bar = egui::Rect::from_min_max(
                    egui::pos2(x0, y),
                    egui::pos2(x1.max(x0 + MIN_BAR_WIDTH), y + LANE_HEIGHT),
                );
                let selected = app.selected == Some(id);
                painter.rect_filled(
                    bar,
                    egui::Rounding::same(2.0),
                    component_color(&row.event.component),
                );
                if selected {
                    painter.rect_stroke(
                        bar,
                        egui::Rounding::same(2.0),
                        egui::Stroke::new(1.5, ui.visuals().strong_text_color()),
                    );
                }
                bars.push((bar, id));
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some(id) = bar_at(&bars, pos) {
                        app.selected = Some(id);
                    }
                }
            }

            if response.hovered() {
                if let Some(pos) = response.hover_pos() {
                    if let Some(id) = bar_at(&bars, pos) {
                        if let Some(row) = dataset.rows.get(id) {
                            hover_tooltip(ui, row);
                        }
                    }
                }
            }
        });
}

fn bar_at(bars: &[(egui::Rect, RowId)], pos: egui::Pos2) -> Option<RowId> {
    // Later bars draw on top; prefer them on overlap.
    bars.iter()
        .rev()
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, id)| *id)
}

fn hover_tooltip(ui: &egui::Ui, row: &TimelineRow) {
    egui::show_tooltip_at_pointer(ui.ctx(), egui::Id::new("gantt_hover"), |ui| {
        ui.label(egui::RichText::new(&row.event.component).strong());
        ui.label(truncate(&row.event.message, 100));
        ui.monospace(format!("hierarchy: {}", row.hierarchy.as_str()));
        ui.monospace(format!("created:   {}", row.event.created));
        ui.monospace(format!("runId:     {}", row.event.run_id));
        ui.monospace(format!("stage:     {}", row.stage));
        ui.monospace(format!("duration:  {}s", row.duration));
    });
}

fn time_range<'a>(
    rows: impl Iterator<Item = &'a TimelineRow>,
) -> Option<(time::PrimitiveDateTime, time::PrimitiveDateTime)> {
    let mut range: Option<(time::PrimitiveDateTime, time::PrimitiveDateTime)> = None;
    for row in rows {
        for ts in [
            parse_event_timestamp(&row.event.created),
            row.next_event.as_deref().and_then(parse_event_timestamp),
        ]
        .into_iter()
        .flatten()
        {
            range = Some(match range {
                None => (ts, ts),
                Some((lo, hi)) => (lo.min(ts), hi.max(ts)),
            });
        }
    }
    range
}
