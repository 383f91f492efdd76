//! Shared test helpers: a command runner that fakes npm and git

#![allow(dead_code)]

use async_trait::async_trait;
use camino::Utf8Path;
use serde_json::{json, Value};
use std::sync::Mutex;
use tsgen_core::{CommandRunner, Error, Invocation, Result};

/// Commented config in the style `tsc --init` produces
pub const TSC_INIT_OUTPUT: &str = r#"{
  "compilerOptions": {
    /* Visit https://aka.ms/tsconfig to read more about this file */
    "target": "es2016",
    "module": "commonjs",
    // "outDir": "./",
    "skipLibCheck": true,
  }
}
"#;

/// Records every invocation and imitates the side effects of npm
#[derive(Default)]
pub struct FakeRunner {
    calls: Mutex<Vec<Invocation>>,
    fail_prefix: Option<String>,
    tsc_init_output: Option<Vec<u8>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every command whose command line starts with `prefix`
    pub fn failing_on(prefix: &str) -> Self {
        Self {
            fail_prefix: Some(prefix.to_string()),
            ..Self::default()
        }
    }

    /// Write `output` as tsconfig.json on `tsc --init` instead of the usual file
    pub fn with_tsc_init_output(output: &[u8]) -> Self {
        Self {
            tsc_init_output: Some(output.to_vec()),
            ..Self::default()
        }
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(Invocation::command_line)
            .collect()
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, invocation: &Invocation, cwd: &Utf8Path) -> Result<()> {
        let line = invocation.command_line();
        self.calls.lock().unwrap().push(invocation.clone());

        if let Some(prefix) = &self.fail_prefix {
            if line.starts_with(prefix.as_str()) {
                return Err(Error::command_failed(line, "1", "npm ERR! simulated failure"));
            }
        }

        let manifest_path = cwd.join("package.json");
        match line.as_str() {
            "npm init -y" | "npm init" => {
                let name = cwd.file_name().unwrap_or("app");
                let manifest = json!({
                    "name": name,
                    "version": "1.0.0",
                    "main": "index.js",
                    "scripts": { "test": "echo \"Error: no test specified\" && exit 1" },
                    "license": "ISC"
                });
                std::fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
            }
            "npm pkg set type=module" => {
                let text = std::fs::read_to_string(&manifest_path)?;
                let mut manifest: Value = serde_json::from_str(&text)?;
                manifest["type"] = json!("module");
                std::fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
            }
            "npx --yes tsc --init" => {
                let output = self
                    .tsc_init_output
                    .as_deref()
                    .unwrap_or(TSC_INIT_OUTPUT.as_bytes());
                std::fs::write(cwd.join("tsconfig.json"), output)?;
            }
            _ => {}
        }
        Ok(())
    }
}
