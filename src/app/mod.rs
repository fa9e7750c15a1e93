mod run;
mod ui_state;

use eframe::egui;

use crate::ingest::JobDataset;
use crate::model::RowId;
use crate::settings::SettingsInput;

pub use run::run;

pub struct JobDebuggerApp {
    pub input: SettingsInput,
    pub dataset: Option<JobDataset>,
    pub selected: Option<RowId>,
    pub ui: ui_state::UiState,
}

impl Default for JobDebuggerApp {
    fn default() -> Self {
        Self {
            input: SettingsInput::default(),
            dataset: None,
            selected: None,
            ui: ui_state::UiState::default(),
        }
    }
}

impl eframe::App for JobDebuggerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        crate::ui::render_app(ctx, frame, self);
    }
}

impl JobDebuggerApp {
    /// Run the full pipeline for the current sidebar input. Blocks the UI for
    /// the duration of the fetch, like the original one-shot trigger.
    pub fn gather_events(&mut self) -> anyhow::Result<()> {
        self.ui.last_error = None;
        let settings = self.input.resolve()?;
        let dataset = crate::ingest::gather(&settings)?;
        self.selected = dataset.rows.first_id();
        self.dataset = Some(dataset);
        self.ui.message_filter.clear();
        Ok(())
    }
}
