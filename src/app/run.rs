use crate::app::JobDebuggerApp;
use eframe::egui;

pub fn run() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Job Debugger")
            .with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Job Debugger",
        native_options,
        Box::new(|_cc| Box::<JobDebuggerApp>::default()),
    )
}
