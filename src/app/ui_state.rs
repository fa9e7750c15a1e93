#[derive(Default)]
pub struct UiState {
    pub show_about: bool,
    pub last_error: Option<String>,
    pub last_export: Option<String>,

    pub message_filter: String,
    pub show_fetch_log: bool,
}
