use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-key";

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
    workdir: TempDir,
    api_key: Option<String>,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary XDG data dir"),
            workdir: tempfile::tempdir().expect("create temporary working dir"),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_lecturer-rate"));
        command
            .args(args)
            .current_dir(self.workdir.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("XDG_DATA_HOME", self.data.path())
            .env_remove("GROQ_API_KEY")
            .env_remove("RUST_LOG");

        if let Some(key) = &self.api_key {
            command.env("GROQ_API_KEY", key);
        }
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("failed to execute lecturer-rate binary")
    }

    /// Run the binary without blocking the test runtime, so a mock server on it can answer.
    pub async fn run_async(&self, args: &[&str]) -> Output {
        tokio::process::Command::from(self.command(args))
            .output()
            .await
            .expect("failed to execute lecturer-rate binary")
    }

    pub fn workdir(&self) -> &Path {
        self.workdir.path()
    }

    /// Write a file relative to the working directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.workdir.path().join(name);
        std::fs::write(&path, contents).expect("write test file");
        path
    }

    pub fn config_path(&self) -> PathBuf {
        let output = self.run(&["config", "path"]);
        assert!(
            output.status.success(),
            "config path should succeed\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        let path = String::from_utf8_lossy(&output.stdout);
        PathBuf::from(path.trim())
    }

    pub fn write_config(&self, contents: &str) {
        let config_path = self.config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).expect("create config parent directory");
        }
        std::fs::write(&config_path, contents).expect("write config file");
    }
}

/// Render `(name, text, rating)` rows as a review table.
#[allow(dead_code)]
pub fn review_table(rows: &[(&str, &str, f64)]) -> String {
    let mut table = String::from("Person_Name,Review_Text,Rating\n");
    for (name, text, rating) in rows {
        table.push_str(&format!("{},{},{}\n", name, text, rating));
    }
    table
}

/// Base URL of `server` to use as `llm.endpoint`
#[allow(dead_code)]
pub fn endpoint(server: &MockServer) -> String {
    format!("{}/v1", server.uri())
}

/// Successful Responses API reply carrying `text`.
#[allow(dead_code)]
pub fn output_text_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "id": "resp_test",
        "output": [
            {
                "type": "message",
                "role": "assistant",
                "content": [{"type": "output_text", "text": text}]
            }
        ]
    }))
}

/// Answer successive authenticated `POST /v1/responses` calls with `replies`, in order.
///
/// Each reply is served once; requests beyond the script get a 404.
#[allow(dead_code)]
pub async fn mount_replies(server: &MockServer, replies: Vec<ResponseTemplate>) {
    for reply in replies {
        Mock::given(method("POST"))
            .and(path("/v1/responses"))
            .and(header("authorization", format!("Bearer {TEST_API_KEY}").as_str()))
            .respond_with(reply)
            .up_to_n_times(1)
            .mount(server)
            .await;
    }
}

/// JSON bodies of every request the server received.
#[allow(dead_code)]
pub async fn request_bodies(server: &MockServer) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .map(|request| request.body_json().expect("request body is json"))
        .collect()
}
