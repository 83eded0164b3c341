use super::helpers::TestWorkspace;
use spm_acknowledgements::Acknowledgement;
use std::fs;

const SPM_ARG: &str = "SourcePackages/checkouts";

#[test]
fn test_scan_without_manifest() {
    let workspace = TestWorkspace::new();
    workspace.add_package("A", Some("MIT"));
    workspace.add_package("B", None);

    let output = workspace.run(&["-s", SPM_ARG]);
    assert!(output.status.success());

    let acknowledgements: Vec<Acknowledgement> =
        serde_json::from_str(&workspace.read_output_file()).unwrap();

    assert_eq!(acknowledgements.len(), 2);
    assert_eq!(acknowledgements[0].package_name, "A");
    assert_eq!(acknowledgements[0].content, "MIT");
    assert_eq!(acknowledgements[0].url, "");
    assert_eq!(acknowledgements[1].package_name, "B");
    assert_eq!(acknowledgements[1].content, "");
}

#[test]
fn test_manifest_adds_urls() {
    let workspace = TestWorkspace::new();
    workspace.add_package("A", Some("MIT"));
    workspace.add_package("B", None);
    workspace.write_manifest(
        r#"{
  "object": {
    "dependencies": [
      {
        "packageRef": { "name": "A", "path": "https://example.com/A" },
        "state": { "checkoutState": { "version": "1.0.0" } }
      },
      {
        "packageRef": { "name": "unrelated", "path": "https://example.com/unrelated" },
        "state": { "checkoutState": { "version": "2.0.0" } }
      }
    ]
  },
  "version": 5
}"#,
    );

    let output = workspace.run(&["--spm", SPM_ARG]);
    assert!(output.status.success());

    let acknowledgements: Vec<Acknowledgement> =
        serde_json::from_str(&workspace.read_output_file()).unwrap();

    assert_eq!(acknowledgements.len(), 2);
    assert_eq!(acknowledgements[0].url, "https://example.com/A");
    assert_eq!(acknowledgements[1].url, "");
}

#[test]
fn test_malformed_manifest_aborts_run() {
    let workspace = TestWorkspace::new();
    workspace.add_package("A", Some("MIT"));
    workspace.write_manifest("{ not json");

    let output = workspace.run(&["-s", SPM_ARG]);

    assert!(!output.status.success());
    assert!(!workspace.output_file_exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parse"));
}

#[test]
fn test_missing_path_exits_nonzero_without_output() {
    let workspace = TestWorkspace::new();
    workspace.add_package("A", Some("MIT"));

    let output = workspace.run(&[]);

    assert!(!output.status.success());
    assert!(!workspace.output_file_exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--spm"));
}

#[test]
fn test_output_flag_controls_destination() {
    let workspace = TestWorkspace::new();
    workspace.add_package("A", Some("MIT"));
    fs::create_dir(workspace.dir.path().join("out")).unwrap();

    let output = workspace.run(&["-s", SPM_ARG, "-o", "out"]);
    assert!(output.status.success());

    assert!(!workspace.output_file_exists());
    let written = workspace.dir.path().join("out").join("acknowledgements.json");
    assert!(written.exists());
}

#[test]
fn test_build_dir_env_resolves_checkouts() {
    let workspace = TestWorkspace::new();
    workspace.add_package("A", Some("MIT"));
    // BUILD_DIR/../../SourcePackages/checkouts must land on the fixture's
    // checkouts directory.
    fs::create_dir_all(workspace.dir.path().join("Build").join("Products")).unwrap();

    let output = workspace.run_with_build_dir("Build/Products", &[]);
    assert!(output.status.success());

    let acknowledgements: Vec<Acknowledgement> =
        serde_json::from_str(&workspace.read_output_file()).unwrap();
    assert_eq!(acknowledgements.len(), 1);
    assert_eq!(acknowledgements[0].package_name, "A");
}

#[test]
fn test_success_message_reports_elapsed_time() {
    let workspace = TestWorkspace::new();
    workspace.add_package("A", Some("MIT"));

    let output = workspace.run(&["-s", SPM_ARG]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created acknowledgements file in"));
}
