use std::time::Duration;

use thiserror::Error;
use tracing::{error, info};

use crate::model::Event;
use crate::settings::Settings;

pub const PAGE_SIZE: u32 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A fetch failure ends pagination but keeps whatever was accumulated; the
/// offending URL and raw body travel with the error for the operator log.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected response from {url}: {body}")]
    Body { url: String, body: String },
}

pub struct FetchOutcome {
    pub events: Vec<Event>,
    /// Number of page requests issued.
    pub pages: u32,
    /// Set when pagination was terminated by a failure; partial data above.
    pub error: Option<FetchError>,
}

/// Walk offsets 0, 100, 200, … strictly below `ceiling`, stopping on the
/// first empty page or failed page. Factored over the page source so the
/// stop conditions are testable without a server.
pub fn paginate<F>(ceiling: u32, mut fetch_page: F) -> FetchOutcome
where
    F: FnMut(u32) -> Result<Vec<Event>, FetchError>,
{
    let mut events: Vec<Event> = Vec::new();
    let mut pages = 0u32;
    let mut offset = 0u32;

    while offset < ceiling {
        pages += 1;
        match fetch_page(offset) {
            Ok(page) => {
                if page.is_empty() {
                    break;
                }
                events.extend(page);
            }
            Err(err) => {
                // No retry: a malformed response or transport failure is
                // terminal for this run, not for the pipeline.
                return FetchOutcome {
                    events,
                    pages,
                    error: Some(err),
                };
            }
        }
        offset += PAGE_SIZE;
    }

    FetchOutcome {
        events,
        pages,
        error: None,
    }
}

/// Pull every event page for the run described by `settings`, appending one
/// operator-visible line per page to `log`.
pub fn fetch_events(settings: &Settings, log: &mut Vec<String>) -> FetchOutcome {
    let client = match reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            error!(%err, "could not build http client");
            log.push(format!("could not build http client: {err}"));
            return FetchOutcome {
                events: Vec::new(),
                pages: 0,
                error: None,
            };
        }
    };

    let outcome = paginate(settings.max_offset, |offset| {
        fetch_page(&client, settings, offset, log)
    });

    if let Some(err) = &outcome.error {
        error!(%err, "pagination terminated early");
        log.push(err.to_string());
    }
    info!(
        pages = outcome.pages,
        events = outcome.events.len(),
        "pagination finished"
    );
    outcome
}

fn fetch_page(
    client: &reqwest::blocking::Client,
    settings: &Settings,
    offset: u32,
    log: &mut Vec<String>,
) -> Result<Vec<Event>, FetchError> {
    let limit = PAGE_SIZE.to_string();
    let offset_param = offset.to_string();
    let request = client
        .get(&settings.url)
        .header("X-StorageApi-Token", &settings.token)
        .header("Accept", "application/json")
        .query(&[
            ("runId", settings.job_id.as_str()),
            ("limit", limit.as_str()),
            ("offset", offset_param.as_str()),
        ]);

    let response = request.send().map_err(|source| FetchError::Request {
        url: settings.url.clone(),
        source,
    })?;

    let url = response.url().to_string();
    info!(%url, offset, "API call");
    log.push(format!("GET {url} (offset {offset})"));

    let body = response.text().map_err(|source| FetchError::Request {
        url: url.clone(),
        source,
    })?;

    // Error payloads from the API are JSON objects, not arrays; both those
    // and plain non-JSON bodies land here.
    serde_json::from_str::<Vec<Event>>(&body).map_err(|_| FetchError::Body { url, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(n: usize) -> Vec<Event> {
        std::iter::repeat_with(Event::default).take(n).collect()
    }

    #[test]
    fn pagination_halts_within_ceiling_bound() {
        let ceiling = 20000;
        let outcome = paginate(ceiling, |_| Ok(page_of(PAGE_SIZE as usize)));
        assert!(outcome.pages <= ceiling / PAGE_SIZE + 1);
        assert_eq!(outcome.events.len(), ceiling as usize);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn empty_first_page_yields_zero_events() {
        let outcome = paginate(20000, |_| Ok(Vec::new()));
        assert_eq!(outcome.pages, 1);
        assert!(outcome.events.is_empty());
        assert!(outcome.error.is_none());
    }

    #[test]
    fn zero_ceiling_issues_no_requests() {
        let outcome = paginate(0, |_| panic!("no page should be requested"));
        assert_eq!(outcome.pages, 0);
        assert!(outcome.events.is_empty());
    }

    #[test]
    fn failure_keeps_accumulated_events() {
        let outcome = paginate(20000, |offset| {
            if offset < 300 {
                Ok(page_of(PAGE_SIZE as usize))
            } else {
                Err(FetchError::Body {
                    url: "https://example.test/events".into(),
                    body: "Access token not valid".into(),
                })
            }
        });
        assert_eq!(outcome.events.len(), 300);
        assert_eq!(outcome.pages, 4);
        let err = outcome.error.expect("terminal error");
        assert!(err.to_string().contains("Access token not valid"));
        assert!(err.to_string().contains("https://example.test/events"));
    }

    #[test]
    fn short_page_still_advances_until_empty_page() {
        // The API signals end-of-data with an empty array, not a short page.
        let mut served = 0u32;
        let outcome = paginate(500, |_| {
            served += 1;
            if served <= 2 {
                Ok(page_of(40))
            } else {
                Ok(Vec::new())
            }
        });
        assert_eq!(outcome.events.len(), 80);
        assert_eq!(outcome.pages, 3);
    }
}
