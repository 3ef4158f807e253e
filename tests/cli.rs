use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::{TempDir, tempdir};

const TODO_STRUCTURE: &str = r#"{
    "pages": ["TodoList", "CreateTodo", "Dashboard", "Settings"],
    "features": ["Task Management"],
    "models": {
        "Todo": { "task": "string", "completed": "boolean", "priority": "number" }
    }
}"#;

/// Isolated config file and store for one test
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempdir().expect("failed to create temp dir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("failed to write fixture");
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("appforge"));
        cmd.arg("--config")
            .arg(self.path("config.yaml"))
            .arg("--store")
            .arg(self.path("apps.db"))
            .env_remove("GROQ_API_KEY")
            .env_remove("APPFORGE_API_HOST")
            .env_remove("APPFORGE_FORMAT")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Run with `--format json` and return the `data` payload
    fn json(&self, args: &[&str]) -> Value {
        let assert = self.cmd().args(args).arg("--format").arg("json").assert().success();
        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
        let parsed: Value = serde_json::from_str(&stdout).expect("stdout is not JSON");
        assert!(parsed["meta"]["version"].is_string());
        parsed["data"].clone()
    }

    fn import_todo_app(&self) -> String {
        let file = self.write("todo.json", TODO_STRUCTURE);
        let app = self.json(&[
            "app",
            "import",
            file.to_str().unwrap(),
            "--name",
            "Todos",
            "--template",
            "task-manager",
        ]);
        app["id"].as_str().unwrap().to_string()
    }

    fn new_business_site(&self) -> String {
        let app = self.json(&["app", "new", "--name", "Acme", "--template", "business-info"]);
        app["id"].as_str().unwrap().to_string()
    }
}

#[test]
fn version_prints_package_version() {
    Workspace::new()
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "appforge version {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn template_list_json_includes_structures() {
    let ws = Workspace::new();
    let templates = ws.json(&["template", "list"]);

    let ids: Vec<&str> = templates
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 5);
    assert!(ids.contains(&"business-info"));
    assert!(ids.contains(&"custom"));
}

#[test]
fn classify_reports_strategies() {
    let ws = Workspace::new();
    let rows = ws.json(&["classify", "TodoList", "EditProfile", "Dashboard", "Contact", "Settings"]);

    let strategies: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["strategy"].as_str().unwrap())
        .collect();
    assert_eq!(
        strategies,
        vec!["list", "create-edit", "dashboard", "business:contact", "default"]
    );
    assert_eq!(rows[1]["model"], "Profile");
}

#[test]
fn classify_against_app_flags_missing_models() {
    let ws = Workspace::new();
    let id = ws.import_todo_app();

    let rows = ws.json(&["classify", "TodoList", "NoteList", "--app", &id]);
    assert_eq!(rows[0]["model"], "Todo");
    assert_eq!(rows[1]["model"], "Note (missing)");
}

#[test]
fn app_import_list_get_delete() {
    let ws = Workspace::new();
    let id = ws.import_todo_app();

    let apps = ws.json(&["app", "list"]);
    assert_eq!(apps.as_array().unwrap().len(), 1);
    assert_eq!(apps[0]["id"], id.as_str());

    let app = ws.json(&["app", "get", &id]);
    assert_eq!(app["name"], "Todos");
    assert_eq!(app["category"], "task-based");
    assert_eq!(app["pages"][0], "TodoList");
    assert_eq!(app["models"]["Todo"]["priority"], "number");

    ws.cmd()
        .args(["app", "delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    ws.cmd()
        .args(["app", "get", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("App not found"));
}

#[test]
fn app_new_without_prompt_needs_template_pages() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["app", "new", "--name", "Blank"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--prompt"));

    ws.cmd()
        .args(["app", "new", "--name", "X", "--template", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown template"));
}

#[test]
fn app_new_with_prompt_requires_api_key() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["app", "new", "--name", "Todos", "--prompt", "A todo app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("appforge init"));
}

#[test]
fn code_summary_and_single_file() {
    let ws = Workspace::new();
    let id = ws.import_todo_app();

    let files = ws.json(&["code", &id]);
    let paths: Vec<&str> = files
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["path"].as_str().unwrap())
        .collect();
    assert_eq!(
        paths,
        vec![
            "todolist/page",
            "createtodo/page",
            "dashboard/page",
            "settings/page",
            "layout"
        ]
    );

    ws.cmd()
        .args(["code", &id, "--file", "todolist/page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'use client';"))
        .stdout(predicate::str::contains("/api/todos"));

    ws.cmd()
        .args(["code", &id, "--file", "createtodo/page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("type=\"number\""));

    ws.cmd()
        .args(["code", &id, "--file", "missing/page"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("todolist/page"));
}

#[test]
fn code_out_writes_tsx_files() {
    let ws = Workspace::new();
    let id = ws.import_todo_app();
    let out = ws.path("site");

    ws.cmd()
        .args(["code", &id, "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 5 files"));

    let layout = fs::read_to_string(out.join("app").join("layout.tsx")).unwrap();
    assert!(layout.contains("href=\"/todolist\""));
    assert!(out.join("app/settings/page.tsx").exists());
}

#[test]
fn code_out_refuses_page_names_outside_directory() {
    let ws = Workspace::new();
    let file = ws.write(
        "escape.json",
        r#"{"pages": ["Home", "../../escaped"], "features": [], "models": {}}"#,
    );
    let app = ws.json(&["app", "import", file.to_str().unwrap(), "--name", "Escape"]);
    let id = app["id"].as_str().unwrap();
    let out = ws.path("gen").join("site");

    ws.cmd()
        .args(["code", id, "--out"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("single path segment"));

    assert!(!ws.path("gen").exists());
}

#[test]
fn content_set_chat_and_render() {
    let ws = Workspace::new();
    let id = ws.new_business_site();

    ws.cmd()
        .args(["content", "set", &id, "--name", "Acme Bakery"])
        .args(["--email", "hi@acme.test", "--hours", "Mon-Fri 7-3"])
        .assert()
        .success();

    let reply = ws.json(&["content", "chat", &id, "add service Wedding Cakes"]);
    assert_eq!(reply["updatedDocument"]["services"][0]["title"], "Wedding Cakes");

    let content = ws.json(&["content", "show", &id]);
    assert_eq!(content["businessInfo"]["name"], "Acme Bakery");
    assert_eq!(content["businessInfo"]["contact"]["hours"][0], "Mon-Fri 7-3");
    assert_eq!(content["services"][0]["title"], "Wedding Cakes");

    ws.cmd()
        .args(["code", &id, "--file", "home/page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Bakery"));

    ws.cmd()
        .args(["code", &id, "--file", "contact/page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hi@acme.test"));
}

#[test]
fn content_set_without_fields_fails() {
    let ws = Workspace::new();
    let id = ws.new_business_site();

    ws.cmd()
        .args(["content", "set", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to set"));
}

#[test]
fn content_chat_unknown_request_gets_help() {
    let ws = Workspace::new();
    let id = ws.new_business_site();

    let reply = ws.json(&["content", "chat", &id, "make it pop"]);
    assert!(reply["message"].as_str().unwrap().starts_with("I can help you with:"));
    assert!(reply.get("updatedDocument").is_none());
}

#[test]
fn content_analyze_and_import() {
    let ws = Workspace::new();
    let id = ws.new_business_site();

    let blank = ws.json(&["content", "analyze", &id]);
    assert_eq!(blank["recommendations"].as_array().unwrap().len(), 5);

    let doc = ws.write(
        "content.json",
        r#"{
            "businessInfo": {
                "name": "Acme",
                "description": "Fresh bread daily",
                "mission": "Feed the town",
                "contact": { "phone": "555-0100" }
            },
            "services": [
                { "title": "Bread", "description": "Sourdough", "price": "$5", "features": ["Organic"] }
            ]
        }"#,
    );

    let analysis = ws.json(&["content", "import", &id, doc.to_str().unwrap()]);
    assert!(analysis["recommendations"].as_array().unwrap().is_empty());
    assert_eq!(analysis["normalizedContent"]["services"][0]["price"], "$5");

    ws.cmd()
        .args(["code", &id, "--file", "services/page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Organic"));
}

#[test]
fn status_shows_store_location() {
    let ws = Workspace::new();
    ws.import_todo_app();

    ws.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration not found"))
        .stdout(predicate::str::contains("1 saved"));
}

#[test]
fn completion_generates_script() {
    Workspace::new()
        .cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("appforge"));
}

// ============================================================================
// Generation Service Tests
// ============================================================================

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn app_new_generates_structure_from_prompt() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_host = server.url();

    let content = serde_json::to_string(&serde_json::json!({
        "pages": ["NoteList", "CreateNote"],
        "features": ["Notes"],
        "models": { "Note": { "title": "string", "pinned": "boolean" } }
    }))?;
    let _completion = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer gsk_test")
        .with_status(200)
        .with_body(serde_json::json!({ "choices": [{ "message": { "content": content } }] }).to_string())
        .create();

    let ws = Workspace::new();
    let assert = ws
        .cmd()
        .args(["app", "new", "--name", "Notes", "--prompt", "A note taking app"])
        .args(["--format", "json"])
        .env("GROQ_API_KEY", "gsk_test")
        .env("APPFORGE_API_HOST", &api_host)
        .assert()
        .success();

    let stdout: Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(stdout["data"]["prompt"], "A note taking app");
    assert_eq!(stdout["data"]["pages"][1], "CreateNote");
    assert_eq!(stdout["data"]["models"]["Note"]["pinned"], "boolean");

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn unauthorized_error_suggests_init() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_host = server.url();

    let _completion = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error": {"message": "Invalid API Key"}}"#)
        .create();

    let ws = Workspace::new();
    ws.cmd()
        .args(["app", "new", "--name", "Notes", "--prompt", "A note taking app"])
        .env("GROQ_API_KEY", "gsk_bad")
        .env("APPFORGE_API_HOST", &api_host)
        .assert()
        .failure()
        .stderr(predicate::str::contains("appforge init"));

    assert_eq!(
        ws.json(&["app", "list"]).as_array().map(Vec::len),
        Some(0)
    );

    Ok(())
}
