use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Scratch directory holding an `app-config.json` that points at `files.json` beside it.
#[derive(Debug)]
pub struct JobWorkspace {
    dir: TempDir,
}

impl JobWorkspace {
    pub fn with_names(names: &[&str]) -> Self {
        let lines: Vec<String> = names
            .iter()
            .map(|n| serde_json::json!({ "nm": n, "sz": n.len() }).to_string())
            .collect();
        Self::with_input(&lines.join("\n"))
    }

    pub fn with_input(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = serde_json::json!({
            "file-location": dir.path(),
            "file-name": "files.json",
        });
        fs::write(dir.path().join("app-config.json"), config.to_string()).expect("write config");
        fs::write(dir.path().join("files.json"), contents).expect("write input");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("app-config.json")
    }

    pub fn report_path(&self) -> PathBuf {
        self.path().join("output.csv")
    }

    #[allow(dead_code)]
    pub fn read_report(&self) -> String {
        fs::read_to_string(self.report_path()).expect("report exists")
    }
}
