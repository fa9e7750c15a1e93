use anyhow::{bail, Result};

/// Upper bound for the event-count slider and the pagination ceiling.
pub const MAX_PAGE: u32 = 20000;

pub const DEFAULT_EVENT_LIMIT: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stack {
    Us,
    EuCentral,
    EuNorth,
}

impl Stack {
    pub const ALL: [Stack; 3] = [Stack::Us, Stack::EuCentral, Stack::EuNorth];

    pub fn label(self) -> &'static str {
        match self {
            Stack::Us => "US",
            Stack::EuCentral => "EU-C",
            Stack::EuNorth => "EU-N",
        }
    }

    pub fn events_url(self) -> &'static str {
        match self {
            Stack::Us => "https://connection.keboola.com/v2/storage/events",
            Stack::EuCentral => "https://connection.eu-central-1.keboola.com/v2/storage/events",
            Stack::EuNorth => {
                "https://connection.north-europe.azure.keboola.com/v2/storage/events"
            }
        }
    }
}

/// Raw widget state as edited in the sidebar.
#[derive(Clone, Debug)]
pub struct SettingsInput {
    pub stack: Stack,
    pub token: String,
    pub job_id: String,
    pub event_limit: u32,
}

impl Default for SettingsInput {
    fn default() -> Self {
        Self {
            stack: Stack::Us,
            token: String::new(),
            job_id: String::new(),
            event_limit: DEFAULT_EVENT_LIMIT,
        }
    }
}

impl SettingsInput {
    /// Validate the operator input before any network call is made.
    /// Missing token or run id halts the pipeline here; everything past this
    /// point degrades instead of aborting.
    pub fn resolve(&self) -> Result<Settings> {
        let token = self.token.trim();
        if token.is_empty() {
            bail!("no storage token provided");
        }
        let job_id = self.job_id.trim();
        if job_id.is_empty() {
            bail!("no run id provided");
        }
        Ok(Settings {
            stack: self.stack,
            token: token.to_string(),
            job_id: job_id.to_string(),
            url: self.stack.events_url().to_string(),
            max_offset: self.event_limit.min(MAX_PAGE),
        })
    }
}

/// One immutable settings record per pipeline invocation, passed explicitly
/// through each stage.
#[derive(Clone, Debug)]
pub struct Settings {
    pub stack: Stack,
    pub token: String,
    pub job_id: String,
    pub url: String,
    pub max_offset: u32,
}
