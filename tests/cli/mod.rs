use assert_cmd::prelude::*; // Add methods on commands
use serde_json::json;
use std::process::{Command, Output, Stdio}; // Run programs
use tempfile::{Builder, TempDir};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod basic;
mod one_off;

const TEST_CONFIG_FILE: &str = "dbms-console-test.toml";

fn setup_temp_dir() -> std::io::Result<TempDir> {
    Builder::new()
        .prefix("dbms-console-test-dir")
        .rand_bytes(5)
        .tempdir()
}

fn ok(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "message": message }))
}

fn err(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({ "message": message }))
}

// A stand-in DBMS REST API with databases `shop` and `foo`, `shop` holding one table `orders`
async fn mock_dbms() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/database"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["shop", "foo"])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/database/foo"))
        .respond_with(ok("deleted"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/database/shop/table"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["orders"])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/database/shop/table/items"))
        .respond_with(err("syntax error"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/database/shop/table/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "column_names": ["a", "b"],
            "columns_types": ["int", "text"],
            "rows": [{"id": 1, "data": [1, "x"]}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/database/shop/table/orders/row"))
        .and(query_param("row_data", "2, 'y'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Table row created successfully",
            "row": {"id": 2, "data": [2, "y"]}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/save"))
        .respond_with(ok("Databases saved successfully"))
        .mount(&server)
        .await;

    server
}

// The console binary, pointed at the mock server through the environment
fn console_command(server: &MockServer, temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dbms-console").expect("dbms-console bin exists");
    cmd.arg("-c")
        .arg(temp_dir.path().join(TEST_CONFIG_FILE))
        .env("DBMS_CONSOLE__REST__BASE_URL", server.uri())
        .env(
            "DBMS_CONSOLE__CLI__HISTORY_FILE",
            temp_dir.path().join(".history"),
        )
        .env("RUST_LOG", "warn");
    cmd
}

// Run the process off the async runtime, so the mock server keeps answering
async fn run_blocking(mut cmd: Command, stdin: Option<String>) -> std::io::Result<Output> {
    tokio::task::spawn_blocking(move || match stdin {
        Some(input) => {
            use std::io::Write;

            let mut child = cmd
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()?;
            {
                let mut child_stdin = child.stdin.take().expect("Failed to open stdin");
                child_stdin.write_all(input.as_bytes())?;
            }
            child.wait_with_output()
        }
        None => cmd.output(),
    })
    .await
    .expect("process thread panicked")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}
