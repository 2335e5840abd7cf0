use assert_cmd::Command;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn run_json(root: &Path, args: &[&str]) -> Value {
    let mut cmd = Command::cargo_bin("provis").expect("provis binary");
    cmd.arg("--root").arg(root).arg("--json").args(args);

    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("valid json output")
}

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("workspace");
    fs::create_dir_all(&root).unwrap();

    let range = run_json(&root, &["range", "2020", "2022"]);
    assert_eq!(range["ok"], true);
    validate("provision-report.schema.json", &range["data"]);

    let list = run_json(&root, &["list", "data-csv", "data-json"]);
    assert_eq!(list["ok"], true);
    validate("provision-report.schema.json", &list["data"]);

    let prefixed = run_json(&root, &["prefixed", "--prefix", "output-", "csv", "json"]);
    assert_eq!(prefixed["ok"], true);
    validate("provision-report.schema.json", &prefixed["data"]);

    let periodic = run_json(&root, &["periodic", "--delay-secs", "0"]);
    assert_eq!(periodic["ok"], true);
    validate("provision-report.schema.json", &periodic["data"]);

    let standardized = run_json(
        &root,
        &["standardized", "--lowercase", "--strip-spaces", "North America"],
    );
    assert_eq!(standardized["ok"], true);
    validate("provision-report.schema.json", &standardized["data"]);

    let byline = run_json(&root, &["byline"]);
    assert_eq!(byline["ok"], true);
    validate("byline-report.schema.json", &byline["data"]);
}
