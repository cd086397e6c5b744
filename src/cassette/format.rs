//! Cassette data structures for recording and replaying task service calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded call to an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (e.g. "tasks").
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Arguments the port was called with.
    pub input: serde_json::Value,
    /// What the port returned, using the `{"Ok": ..}` / `{"Err": ..}` convention.
    pub output: serde_json::Value,
}

/// A named, timestamped sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Service base URL the session ran against.
    #[serde(default)]
    pub endpoint: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads a cassette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn yaml_keeps_nested_results() {
        let cassette = Cassette {
            name: "run".into(),
            recorded_at: Utc::now(),
            endpoint: "http://robots.local/task/v1.1".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "tasks".into(),
                method: "task_info".into(),
                input: json!({"task_id": "abc"}),
                output: json!({"Ok": {"isFinish": true, "isCancel": false}}),
            }],
        };
        let yaml = serde_yaml::to_string(&cassette).expect("serialize");
        let back: Cassette = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(back, cassette);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Cassette::load(std::path::Path::new("/nonexistent/robotask.yaml")).unwrap_err();
        assert!(err.contains("Failed to read cassette file"));
    }
}
