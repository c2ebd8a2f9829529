#![allow(dead_code)]

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;

pub struct CliHarness {
    scratch: PathBuf,
}

impl CliHarness {
    pub fn new(name: &str) -> Self {
        let scratch = env::temp_dir().join(format!("recipients-tui-{name}-{}", std::process::id()));
        fs::create_dir_all(&scratch).expect("Failed to create scratch dir");
        Self { scratch }
    }

    /// Write a file into the scratch directory and return its path.
    pub fn write(&self, file_name: &str, contents: &str) -> PathBuf {
        let path = self.scratch.join(file_name);
        fs::write(&path, contents).expect("Failed to write scratch file");
        path
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let log_file = self.scratch.join("test.log");
        Command::new(env!("CARGO_BIN_EXE_recipients-tui"))
            .arg("--log-file")
            .arg(&log_file)
            .args(args)
            .output()
            .expect("Failed to spawn recipients-tui")
    }

    /// Run `fit` and parse the JSON report.
    pub fn fit(&self, width: &str, args: &[&str]) -> Value {
        let mut full = vec!["fit", "--width", width];
        full.extend_from_slice(args);
        let output = self.run(&full);
        assert!(
            output.status.success(),
            "fit failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("fit should print JSON")
    }
}

impl Drop for CliHarness {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.scratch);
    }
}
