use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::sync::{LazyLock, mpsc};
use std::thread;
use tempfile::TempDir;

/// What the stub server saw.
struct Captured {
    request_line: String,
    body: String,
}

/// Serves exactly one HTTP response, then reports the request it received.
fn stub_server(status: &str, body: &str) -> (String, mpsc::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':')
                && name.eq_ignore_ascii_case("content-length")
            {
                content_length = value.trim().parse().unwrap();
            }
        }

        let mut body = vec![0; content_length];
        reader.read_exact(&mut body).unwrap();

        let mut stream = stream;
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        let _ = tx.send(Captured {
            request_line: request_line.trim_end().to_string(),
            body: String::from_utf8(body).unwrap(),
        });
    });

    (url, rx)
}

/// Home with no config file, shared by runs that take their URL from the env.
static EMPTY_HOME: LazyLock<TempDir> = LazyLock::new(|| tempfile::tempdir().unwrap());

/// Runs the binary with `home` as both `HOME` and the XDG config root, so the
/// developer's own config file is never read.
fn catalog_in(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_PROXY", "127.0.0.1,localhost")
        .env("NO_COLOR", "1")
        .env_remove("CATALOG_API_URL")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    cmd
}

fn catalog(api_url: &str) -> Command {
    let mut cmd = catalog_in(EMPTY_HOME.path());
    cmd.env("CATALOG_API_URL", api_url);
    cmd
}

/// Writes `config.json` where the binary looks for it on Linux.
#[cfg(target_os = "linux")]
fn write_config(home: &Path, content: &str) {
    let dir = home.join(".config").join("catalog");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.json"), content).unwrap();
}

/// Nothing listens on port 1, so any request would fail loudly.
const DEAD_URL: &str = "http://127.0.0.1:1";

#[test]
fn unknown_method_prints_usage() {
    catalog(DEAD_URL)
        .args(["PATCH", "products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized command. Usage:"))
        .stdout(predicate::str::contains("GET products/<productId>"))
        .stdout(predicate::str::contains(
            "PUT products/<productId> <title> <price> <category>",
        ))
        .stdout(predicate::str::contains("DELETE products/<productId>"))
        .stderr(predicate::str::contains("error occurred").not());
}

#[test]
fn no_arguments_prints_usage() {
    catalog(DEAD_URL)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized command. Usage:"));
}

#[test]
fn invalid_id_is_rejected_locally() {
    for args in [
        ["GET", "products/abc"],
        ["DELETE", "products/0"],
        ["PUT", "products/-2"],
        ["GET", "products/ 5"],
        ["DELETE", "products/+5"],
    ] {
        catalog(DEAD_URL)
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("Invalid ID"))
            .stderr(predicate::str::contains("error occurred").not());
    }
}

#[test]
fn create_with_missing_fields_shows_usage() {
    catalog(DEAD_URL)
        .args(["post", "products", "Lamp", "19.99"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Missing parameters. Usage: POST products <title> <price> <category>",
        ))
        .stderr(predicate::str::contains("error occurred").not());
}

#[test]
fn update_without_fields_shows_guidance() {
    catalog(DEAD_URL)
        .args(["PUT", "products/5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Provide at least one field to update: title, price or category",
        ));
}

#[test]
fn network_failure_is_one_error_line_and_exit_zero() {
    let output = catalog(DEAD_URL)
        .args(["GET", "products"])
        .assert()
        .success()
        .stdout("")
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr).unwrap();
    let error_lines: Vec<&str> = stderr
        .lines()
        .filter(|l| l.starts_with("An error occurred:"))
        .collect();
    assert_eq!(error_lines.len(), 1, "stderr was: {stderr}");
}

#[test]
fn lists_products_in_order() {
    let (url, rx) = stub_server(
        "200 OK",
        r#"[{"id":1,"title":"Backpack","price":109.95,"category":"men's clothing"},
            {"id":2,"title":"Gold Ring","price":168,"category":"jewelery"}]"#,
    );

    catalog(&url)
        .args(["get", "PRODUCTS"])
        .assert()
        .success()
        .stdout(
            "ID: 1\nTitle: Backpack\nPrice: $109.95\nCategory: men's clothing\n---\n\
             ID: 2\nTitle: Gold Ring\nPrice: $168\nCategory: jewelery\n---\n",
        );

    let captured = rx.recv().unwrap();
    assert!(captured.request_line.starts_with("GET /products "));
}

#[test]
fn fetches_one_product() {
    let (url, rx) = stub_server(
        "200 OK",
        r#"{"id":7,"title":"Monitor","price":599,"category":"electronics","image":"x"}"#,
    );

    catalog(&url)
        .args(["GET", "products/7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 7\nTitle: Monitor\nPrice: $599"));

    assert!(rx.recv().unwrap().request_line.starts_with("GET /products/7 "));
}

#[test]
fn create_sends_parsed_price() {
    let (url, rx) = stub_server(
        "200 OK",
        r#"{"id":21,"title":"Lamp","price":19.99,"category":"home"}"#,
    );

    catalog(&url)
        .args(["POST", "products", "Lamp", "19.99", "home"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Product created:\nID: 21\n"));

    let captured = rx.recv().unwrap();
    assert!(captured.request_line.starts_with("POST /products "));
    let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "title": "Lamp", "price": 19.99, "category": "home" })
    );
}

#[test]
fn update_sends_only_supplied_fields() {
    let (url, rx) = stub_server(
        "200 OK",
        r#"{"id":5,"title":"newtitle","price":9.99,"category":"misc"}"#,
    );

    catalog(&url)
        .args(["PUT", "products/5", "newtitle"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Product with ID 5 updated:\n"));

    let captured = rx.recv().unwrap();
    assert!(captured.request_line.starts_with("PUT /products/5 "));
    let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(body, serde_json::json!({ "title": "newtitle" }));
}

#[test]
fn delete_prints_raw_payload() {
    let (url, rx) = stub_server(
        "200 OK",
        r#"{"id":3,"title":"Gold Ring","price":168,"category":"jewelery"}"#,
    );

    catalog(&url)
        .args(["DELETE", "products/3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product with ID 3 deleted:"))
        .stdout(predicate::str::contains("\"title\": \"Gold Ring\""))
        .stdout(predicate::str::contains("Title: Gold Ring").not());

    assert!(rx.recv().unwrap().request_line.starts_with("DELETE /products/3 "));
}

#[test]
fn server_error_collapses_into_generic_line() {
    let (url, _rx) = stub_server("500 Internal Server Error", r#"{"error":"boom"}"#);

    catalog(&url)
        .args(["GET", "products/1"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("An error occurred:"));
}

#[test]
fn malformed_json_collapses_into_generic_line() {
    let (url, _rx) = stub_server("200 OK", "not json");

    catalog(&url)
        .args(["GET", "products"])
        .assert()
        .success()
        .stderr(predicate::str::contains("An error occurred:"));
}

#[test]
fn api_url_flag_overrides_environment() {
    let (url, rx) = stub_server("200 OK", "[]");

    catalog(DEAD_URL)
        .args(["--api-url", url.as_str(), "GET", "products"])
        .assert()
        .success()
        .stdout("");

    assert!(rx.recv().unwrap().request_line.starts_with("GET /products "));
}

#[test]
fn unusable_api_url_does_not_block_local_output() {
    catalog(DEAD_URL)
        .args(["--api-url", "/", "PATCH", "products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized command. Usage:"))
        .stderr(predicate::str::contains("error occurred").not());

    catalog(DEAD_URL)
        .args(["--api-url", "/", "GET", "products/abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid ID"))
        .stderr(predicate::str::contains("error occurred").not());

    catalog(DEAD_URL)
        .args(["--api-url", "/", "GET", "products"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("An error occurred:"));
}

#[test]
fn flag_lookalikes_after_resource_are_fields() {
    let (url, rx) = stub_server(
        "200 OK",
        r#"{"id":5,"title":"-v","price":1,"category":"misc"}"#,
    );

    catalog(&url)
        .args(["PUT", "products/5", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Product with ID 5 updated:\n"))
        .stderr(predicate::str::contains("DEBUG").not());

    let body: serde_json::Value = serde_json::from_str(&rx.recv().unwrap().body).unwrap();
    assert_eq!(body, serde_json::json!({ "title": "-v" }));
}

#[cfg(target_os = "linux")]
#[test]
fn config_file_supplies_base_url() {
    let (url, rx) = stub_server("200 OK", "[]");
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), &format!(r#"{{ "base_url": "{url}" }}"#));

    catalog_in(home.path())
        .args(["GET", "products"])
        .assert()
        .success()
        .stdout("");

    assert!(rx.recv().unwrap().request_line.starts_with("GET /products "));
}

#[cfg(target_os = "linux")]
#[test]
fn malformed_config_is_ignored_with_a_warning() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), "not json");

    catalog_in(home.path())
        .args(["PATCH", "products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized command. Usage:"))
        .stderr(predicate::str::contains("ignoring unreadable config"))
        .stderr(predicate::str::contains("error occurred").not());
}

#[test]
fn usage_run_writes_nothing_to_stderr() {
    catalog(DEAD_URL)
        .args(["PATCH", "products"])
        .assert()
        .success()
        .stderr("");
}
