use boxkit::{render_output, Config, Design, OutputFormat};
use tempfile::TempDir;

#[test]
fn test_job_file_renders_to_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("safe.toml");
    std::fs::write(
        &path,
        r#"
[canvas]
thickness = 3.0
burn = 0.0

[design]
generator = "coin_bank_safe"
h = 90.0

[output]
format = "polylines"
pretty = false
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.output.format, OutputFormat::Polylines);

    let design = config.resolved_design();
    assert!(matches!(design, Design::CoinBankSafe(ref p) if p.burn == 0.0));

    let drawing = design.render().unwrap();
    let json = render_output(&drawing, &config.output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let paths = value["paths"].as_array().unwrap();
    assert_eq!(paths.len(), drawing.paths.len());
    assert!(paths.iter().all(|p| p["closed"] == true));
}

#[test]
fn test_default_job_renders() {
    let config = Config::default();
    let drawing = config.resolved_design().render().unwrap();
    assert!(!drawing.is_empty());
    assert!(drawing.total_cut_length() > 0.0);
}
