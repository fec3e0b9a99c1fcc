use assert_cmd::cargo::cargo_bin_cmd;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn run_json(home: &Path, args: &[&str]) -> Value {
    let mut cmd = cargo_bin_cmd!("fairsplit");
    cmd.env("HOME", home).arg("--json").args(args);

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
    let home = tmp.path().join("home");
    fs::create_dir_all(&home).unwrap();

    let cmp = run_json(&home, &["compare"]);
    assert_eq!(cmp["ok"], true);
    validate("compare.schema.json", &cmp["data"]);

    let cn = run_json(&home, &["calculate", "cn"]);
    assert_eq!(cn["ok"], true);
    validate("outcome-cn.schema.json", &cn["data"]);

    let uk = run_json(&home, &["calculate", "uk"]);
    assert_eq!(uk["ok"], true);
    validate("outcome-uk.schema.json", &uk["data"]);

    let ins = run_json(
        &home,
        &["insights", "--marriage-years", "12", "--fault", "true"],
    );
    assert_eq!(ins["ok"], true);
    validate("insights.schema.json", &ins["data"]);

    let hits = run_json(&home, &["kb", "search", "Housework Compensation"]);
    assert_eq!(hits["ok"], true);
    validate("kb-search.schema.json", &hits["data"]);
}
