//! Records interactions into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Interaction};

/// Records interactions and writes them as a YAML cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    endpoint: String,
    interactions: Vec<Interaction>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            endpoint: endpoint.into(),
            interactions: Vec::new(),
            next_seq: 0,
        }
    }

    /// Record an interaction. The `seq` field is assigned automatically.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        self.interactions.push(Interaction {
            seq: self.next_seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
        self.next_seq += 1;
    }

    /// Number of interactions recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Write everything recorded so far to disk, leaving the recorder usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name.clone(),
            recorded_at: Utc::now(),
            endpoint: self.endpoint.clone(),
            interactions: self.interactions.clone(),
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        Ok(self.path.clone())
    }

    /// Finish recording and write the cassette YAML file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_and_finish() {
        let dir = std::env::temp_dir().join("robotask_recorder_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("session.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "session", "http://h/task/v1.1");
        recorder.record("tasks", "create_task", json!({"name": "T"}), json!({"Ok": "abc"}));
        recorder.record("tasks", "execute_task", json!({"task_id": "abc"}), json!({"Ok": null}));
        recorder.record(
            "tasks",
            "task_info",
            json!({"task_id": "abc"}),
            json!({"Ok": {"isFinish": true}}),
        );
        assert_eq!(recorder.len(), 3);

        let written = recorder.finish().expect("finish should succeed");
        assert_eq!(written, path);

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.name, "session");
        assert_eq!(cassette.endpoint, "http://h/task/v1.1");
        let seqs: Vec<u64> = cassette.interactions.iter().map(|i| i.seq).collect();
        assert_eq!(seqs, [0, 1, 2]);
        assert_eq!(cassette.interactions[1].method, "execute_task");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_can_run_repeatedly() {
        let dir = std::env::temp_dir().join("robotask_recorder_save_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("partial.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "partial", "");
        recorder.save().unwrap();
        assert!(Cassette::load(&path).unwrap().interactions.is_empty());

        recorder.record("tasks", "execute_task", json!({}), json!({"Ok": null}));
        recorder.save().unwrap();
        assert_eq!(Cassette::load(&path).unwrap().interactions.len(), 1);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
