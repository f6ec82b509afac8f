use std::fs;

use tempfile::tempdir;

use panelgrid::PanelGridError;
use panelgrid_cli::{Args, run};

fn args(width: i64, height: i64, layout: Option<&str>) -> Args {
    Args {
        width,
        height,
        layout: layout.map(str::to_string),
        output: None,
        stdout: false,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_writes_document_to_output_path() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("sheet.drawio");

    let mut args = args(4, 2, Some("2x3"));
    args.output = Some(output_path.to_string_lossy().to_string());

    run(&args).expect("valid grid should render");

    let document = fs::read_to_string(&output_path).expect("output file should exist");
    assert!(document.starts_with("<?xml"));
    assert!(document.ends_with("</mxfile>"));
    assert_eq!(document.matches("<mxCell ").count(), 2 + 8);
    assert!(document.contains(r#"value="2.2""#));
}

#[test]
fn e2e_layout_tags() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    for (tag, expected_second_label) in [("2x3", "1.3"), ("3x2", "1.4")] {
        let output_path = temp_dir.path().join(format!("{tag}.drawio"));
        let mut args = args(3, 3, Some(tag));
        args.output = Some(output_path.to_string_lossy().to_string());

        run(&args).expect("valid grid should render");

        let document = fs::read_to_string(&output_path).expect("output file should exist");
        let second_cell = document
            .find(r#"<mxCell id="3""#)
            .expect("second panel should exist");
        assert!(
            document[second_cell..].starts_with(&format!(r#"<mxCell id="3" value="{expected_second_label}""#)),
            "unexpected second label for {tag}"
        );
    }
}

#[test]
fn e2e_default_layout_is_three_by_two() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("default.drawio");

    let mut args = args(3, 3, None);
    args.output = Some(output_path.to_string_lossy().to_string());

    run(&args).expect("grid without a layout tag should render");

    let document = fs::read_to_string(&output_path).expect("output file should exist");
    // 3x2 numbering puts 1.4 in the second cell
    assert!(document.contains(r#"<mxCell id="3" value="1.4""#));
}

#[test]
fn e2e_config_supplies_default_layout() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[layout]\ndefault_kind = \"2x3\"\n\n[style]\nfont_size = 12\n",
    )
    .expect("Failed to write config");
    let output_path = temp_dir.path().join("configured.drawio");

    let mut args = args(3, 2, None);
    args.config = Some(config_path.to_string_lossy().to_string());
    args.output = Some(output_path.to_string_lossy().to_string());

    run(&args).expect("configured grid should render");

    let document = fs::read_to_string(&output_path).expect("output file should exist");
    // 2x3 numbering puts 1.3 in the second cell
    assert!(document.contains(r#"<mxCell id="3" value="1.3""#));
    assert!(document.contains("fontSize=12;"));
}

#[test]
fn e2e_error_cases_produce_no_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("never.drawio");

    let cases = [
        (args(0, 4, None), "zero width"),
        (args(4, -1, None), "negative height"),
        (args(2, 2, Some("4x4")), "unknown layout"),
    ];

    for (mut case, name) in cases {
        case.output = Some(output_path.to_string_lossy().to_string());
        assert!(run(&case).is_err(), "{name} should fail");
        assert!(!output_path.exists(), "{name} should not write output");
    }
}

#[test]
fn e2e_invalid_dimensions_error_kind() {
    let err = run(&args(0, 0, Some("3x2"))).unwrap_err();
    assert!(matches!(
        err,
        PanelGridError::InvalidDimensions {
            width: 0,
            height: 0
        }
    ));
}

#[test]
fn e2e_missing_explicit_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut args = args(1, 1, None);
    args.config = Some(
        temp_dir
            .path()
            .join("absent.toml")
            .to_string_lossy()
            .to_string(),
    );

    let err = run(&args).unwrap_err();
    assert!(matches!(err, PanelGridError::Config(_)));
}

#[test]
fn e2e_oversized_spacing_config_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[layout.spacing]\npitch_x = 9223372036854775807\n")
        .expect("Failed to write config");
    let output_path = temp_dir.path().join("never.drawio");

    let mut args = args(4, 2, Some("2x3"));
    args.config = Some(config_path.to_string_lossy().to_string());
    args.output = Some(output_path.to_string_lossy().to_string());

    let err = run(&args).unwrap_err();
    assert!(matches!(err, PanelGridError::Config(_)));
    assert!(!output_path.exists());
}
