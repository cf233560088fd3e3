use std::fs;

use tempfile::tempdir;

use cellpack_cli::{Args, run};

fn args(output: String) -> Args {
    Args {
        output,
        config: None,
        series: None,
        parallel: None,
        diameter: None,
        height: None,
        spacing: None,
        stagger: None,
        labels: false,
        save_config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_default_pack_writes_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("pack.svg");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "").expect("Failed to write config");

    let mut args = args(output.to_string_lossy().to_string());
    args.config = Some(config.to_string_lossy().to_string());

    run(&args).expect("Default pack should build");

    let svg = fs::read_to_string(&output).expect("Output should exist");
    assert_eq!(svg.matches("<circle").count(), 96);
    assert!(svg.contains("12s8p Pack"));
}

#[test]
fn e2e_config_file_and_overrides() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    fs::write(
        &config,
        r#"
        [pack]
        series_count = 4
        parallel_count = 4
        stagger = "series"

        [style]
        background_color = "white"
        "#,
    )
    .expect("Failed to write config");

    let output = temp_dir.path().join("pack.svg");
    let mut args = args(output.to_string_lossy().to_string());
    args.config = Some(config.to_string_lossy().to_string());
    args.parallel = Some(3);
    args.labels = true;

    run(&args).expect("Configured pack should build");

    let svg = fs::read_to_string(&output).expect("Output should exist");
    assert_eq!(svg.matches("<circle").count(), 12);
    assert_eq!(svg.matches("<text").count(), 12);
    assert!(svg.contains("4s3p Pack"));
    assert!(svg.contains("<rect"));
}

#[test]
fn e2e_invalid_parameters_fail_without_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "").expect("Failed to write config");

    let cases: [fn(&mut Args); 4] = [
        |args| args.spacing = Some(0.0),
        |args| args.series = Some(0),
        |args| args.parallel = Some(-1),
        |args| {
            args.series = Some(1 << 31);
            args.parallel = Some(1 << 31);
        },
    ];

    for (index, apply) in cases.iter().enumerate() {
        let output = temp_dir.path().join(format!("invalid_{index}.svg"));
        let mut args = args(output.to_string_lossy().to_string());
        args.config = Some(config.to_string_lossy().to_string());
        apply(&mut args);

        assert!(run(&args).is_err(), "case {index} should fail");
        assert!(!output.exists(), "case {index} should not write output");
    }
}

#[test]
fn e2e_missing_explicit_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("pack.svg");

    let mut args = args(output.to_string_lossy().to_string());
    args.config = Some(
        temp_dir
            .path()
            .join("does-not-exist.toml")
            .to_string_lossy()
            .to_string(),
    );

    assert!(run(&args).is_err());
    assert!(!output.exists());
}

#[test]
fn e2e_saved_config_reproduces_pack() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let empty = temp_dir.path().join("empty.toml");
    fs::write(&empty, "").expect("Failed to write config");
    let saved = temp_dir.path().join("saved.toml");

    let first_output = temp_dir.path().join("first.svg");
    let mut first = args(first_output.to_string_lossy().to_string());
    first.config = Some(empty.to_string_lossy().to_string());
    first.series = Some(5);
    first.parallel = Some(2);
    first.spacing = Some(1.9);
    first.stagger = Some(cellpack::StaggerMode::Parallel);
    first.save_config = Some(saved.to_string_lossy().to_string());
    run(&first).expect("First run should succeed");

    let second_output = temp_dir.path().join("second.svg");
    let mut second = args(second_output.to_string_lossy().to_string());
    second.config = Some(saved.to_string_lossy().to_string());
    run(&second).expect("Second run should succeed");

    let first_svg = fs::read_to_string(&first_output).expect("First output should exist");
    let second_svg = fs::read_to_string(&second_output).expect("Second output should exist");
    assert_eq!(first_svg, second_svg);
}

#[test]
fn e2e_invalid_style_is_not_saved() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    fs::write(
        &config,
        r#"
        [style]
        cell_fill_color = "not-a-color"
        "#,
    )
    .expect("Failed to write config");

    let output = temp_dir.path().join("pack.svg");
    let saved = temp_dir.path().join("saved.toml");
    let mut args = args(output.to_string_lossy().to_string());
    args.config = Some(config.to_string_lossy().to_string());
    args.save_config = Some(saved.to_string_lossy().to_string());

    assert!(run(&args).is_err());
    assert!(!saved.exists());
    assert!(!output.exists());
}
