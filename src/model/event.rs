use serde::{Deserialize, Deserializer};

/// One record from the events API. Unknown payload fields are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub component: String,
    /// Numeric on the wire for some event sources; always a string here.
    #[serde(rename = "runId", default, deserialize_with = "run_id_as_string")]
    pub run_id: String,
}

fn run_id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Coarse category assigned to an event by the classifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventHierarchy {
    Orchestration,
    OrchestrationState,
    ComponentStatus,
    Job,
    Storage,
    Component,
    ComponentStat,
    /// Fallback label parsed out of the component name; may be empty.
    Derived(String),
}

impl EventHierarchy {
    pub fn as_str(&self) -> &str {
        match self {
            EventHierarchy::Orchestration => "orchestration",
            EventHierarchy::OrchestrationState => "orchestration_state",
            EventHierarchy::ComponentStatus => "component_status",
            EventHierarchy::Job => "job",
            EventHierarchy::Storage => "storage",
            EventHierarchy::Component => "component",
            EventHierarchy::ComponentStat => "component_stat",
            EventHierarchy::Derived(label) => label,
        }
    }
}
