//! Integration test for the generate workflow.
//!
//! Writes a doc model to a temp dir, runs the generate workflow through the
//! library API, and asserts on the emitted pages.

use decldoc::cli::GenerateArgs;
use decldoc::workflow::run_generate;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const COLOR_MODEL: &str = r#"{
  "schema_version": 1,
  "types": [
    {
      "name": "Color",
      "kind": "enum",
      "doc": { "summary": "Basic display colors." },
      "members": [
        {
          "name": "RED",
          "kind": "enum_constant",
          "doc": { "summary": "The color red." },
          "tags": [{ "name": "since", "text": "1.0" }]
        },
        {
          "name": "GREEN",
          "kind": "enum_constant",
          "deprecated": { "since": "2.0", "note": "use TEAL" }
        },
        {
          "name": "BLUE",
          "kind": "enum_constant",
          "preview": true
        }
      ]
    },
    {
      "name": "Empty",
      "kind": "enum",
      "members": []
    }
  ]
}"#;

fn write_model(dir: &Path) -> std::path::PathBuf {
    let model_path = dir.join("model.json");
    fs::write(&model_path, COLOR_MODEL).expect("write model");
    model_path
}

#[test]
fn generates_one_page_per_type() {
    let dir = TempDir::new().expect("tempdir");
    let model = write_model(dir.path());
    let out = dir.path().join("docs");

    run_generate(&GenerateArgs {
        model,
        out: out.clone(),
        no_comments: false,
        include_private: false,
    })
    .expect("generate");

    let color = fs::read_to_string(out.join("Color.html")).expect("read Color page");
    assert!(color.contains("<h1>Enum Color</h1>"));
    assert!(color.contains("Enum Constants of Color"));
    assert_eq!(color.matches("<li>").count(), 3);
    let red = color.find("constant-RED").expect("RED entry");
    let green = color.find("constant-GREEN").expect("GREEN entry");
    let blue = color.find("constant-BLUE").expect("BLUE entry");
    assert!(red < green && green < blue);
    assert!(color.contains("The color red."));
    assert!(color.contains("Deprecated since 2.0"));
    assert!(color.contains("preview feature"));
    assert!(color.contains("<dt>since</dt><dd>1.0</dd>"));

    // Empty enum gets a page but no enum constants section at all.
    let empty = fs::read_to_string(out.join("Empty.html")).expect("read Empty page");
    assert!(empty.contains("<h1>Enum Empty</h1>"));
    assert!(!empty.contains("enum-constant-details"));
    assert!(!empty.contains("<li>"));
}

#[test]
fn no_comments_suppresses_descriptions_but_not_markers() {
    let dir = TempDir::new().expect("tempdir");
    let model = write_model(dir.path());
    let out = dir.path().join("docs");

    run_generate(&GenerateArgs {
        model,
        out: out.clone(),
        no_comments: true,
        include_private: false,
    })
    .expect("generate");

    let color = fs::read_to_string(out.join("Color.html")).expect("read Color page");
    assert!(!color.contains("The color red."));
    assert!(!color.contains("Basic display colors."));
    assert!(color.contains("Deprecated since 2.0"));
    assert!(color.contains("preview feature"));
    assert!(color.contains("<dt>since</dt><dd>1.0</dd>"));
}

#[test]
fn rejects_model_with_unknown_fields() {
    let dir = TempDir::new().expect("tempdir");
    let model_path = dir.path().join("model.json");
    fs::write(
        &model_path,
        r#"{ "schema_version": 1, "types": [], "extra": true }"#,
    )
    .expect("write model");

    let err = run_generate(&GenerateArgs {
        model: model_path,
        out: dir.path().join("docs"),
        no_comments: false,
        include_private: false,
    })
    .expect_err("unknown field should fail");
    assert!(format!("{err:#}").contains("parse doc model"));
}
