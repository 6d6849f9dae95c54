//! End-to-end runs of the `mse-plot` binary and the plotting pipeline.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use mse_plot::data::loader::write_history;
use mse_plot::training::report::plot_mse_history;
use mse_plot::utils::plot::MseFigure;
use mse_plot::{ColumnNames, MseHistory, PlotConfig, PlotError};
use tempfile::tempdir;

const HEADER: &str = "Iteração,MSE_Treino,MSE_Validação\n";

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mse-plot"))
        .current_dir(dir)
        .output()
        .expect("failed to launch mse-plot")
}

fn decaying_history(rows: usize, scale: f64) -> MseHistory {
    let mut history = MseHistory::default();
    for i in 1..=rows {
        let t = i as f64;
        history.record(t, scale / t, scale * 1.2 / t + 0.01);
    }
    history
}

#[test]
fn test_writes_non_empty_png() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("mse_history.csv");
    write_history(&input, &decaying_history(50, 1.0), &ColumnNames::default()).unwrap();

    let output = run_in(dir.path());
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let png = fs::read(dir.path().join("mse_plot.png")).unwrap();
    assert!(!png.is_empty());
    assert_eq!(&png[1..4], b"PNG");
}

#[test]
fn test_second_run_overwrites_image() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("mse_history.csv");
    let image = dir.path().join("mse_plot.png");

    fs::write(&input, format!("{HEADER}1,0.5,0.6\n2,0.3,0.4\n")).unwrap();
    assert!(run_in(dir.path()).status.success());
    let first = fs::read(&image).unwrap();

    write_history(&input, &decaying_history(30, 4.0), &ColumnNames::default()).unwrap();
    assert!(run_in(dir.path()).status.success());
    let second = fs::read(&image).unwrap();

    assert!(!second.is_empty());
    assert_ne!(first, second);
}

#[test]
fn test_missing_column_leaves_image_untouched() {
    let dir = tempdir().unwrap();
    let image = dir.path().join("mse_plot.png");
    fs::write(&image, b"previous image").unwrap();
    fs::write(
        dir.path().join("mse_history.csv"),
        "Iteração,MSE_Treino\n1,0.5\n2,0.3\n",
    )
    .unwrap();

    let output = run_in(dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("MSE_Validação"));
    assert_eq!(fs::read(&image).unwrap(), b"previous image");
}

#[test]
fn test_missing_input_fails() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path());
    assert!(!output.status.success());
    assert!(!dir.path().join("mse_plot.png").exists());
}

#[test]
fn test_header_only_fails_without_image() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("mse_history.csv"), HEADER).unwrap();

    let output = run_in(dir.path());
    assert!(!output.status.success());
    assert!(!dir.path().join("mse_plot.png").exists());
}

#[test]
fn test_pipeline_returns_loaded_history() {
    let dir = tempdir().unwrap();
    let config = PlotConfig::in_dir(dir.path());
    fs::write(&config.input_path, format!("{HEADER}1,0.5,0.6\n2,0.3,0.4\n")).unwrap();

    let (history, figure) = plot_mse_history(&config).unwrap();

    assert_eq!(history.iterations, vec![1.0, 2.0]);
    assert_eq!(history.train_mse, vec![0.5, 0.3]);
    assert_eq!(history.val_mse, vec![0.6, 0.4]);
    assert!(fs::metadata(&config.output_path).unwrap().len() > 0);

    // The figure handed back is the one drawn from this history
    assert_eq!(figure, MseFigure::from_history(&history, &config));
    assert_eq!(figure.series[0].points, vec![(1.0, 0.5), (2.0, 0.3)]);
    assert_eq!(figure.series[1].points, vec![(1.0, 0.6), (2.0, 0.4)]);
}

#[test]
fn test_pipeline_single_row() {
    let dir = tempdir().unwrap();
    let config = PlotConfig::in_dir(dir.path());
    fs::write(&config.input_path, format!("{HEADER}1,0.5,0.6\n")).unwrap();

    let (history, figure) = plot_mse_history(&config).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(figure.series[1].points, vec![(1.0, 0.6)]);
    assert!(config.output_path.exists());
}

#[test]
fn test_pipeline_empty_history() {
    let dir = tempdir().unwrap();
    let config = PlotConfig::in_dir(dir.path());
    fs::write(&config.input_path, HEADER).unwrap();

    let err = plot_mse_history(&config).unwrap_err();
    assert!(matches!(err, PlotError::EmptyHistory { .. }));
    assert!(!config.output_path.exists());
}
