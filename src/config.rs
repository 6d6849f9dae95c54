use std::path::PathBuf;

/// Header names of the three required columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub iteration: String,
    pub train_mse: String,
    pub val_mse: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            iteration: "Iteração".to_string(),
            train_mse: "MSE_Treino".to_string(),
            val_mse: "MSE_Validação".to_string(),
        }
    }
}

/// Fixed inputs, outputs and labels of the plot.
///
/// The binary always runs with [`PlotConfig::default`]; nothing is read
/// from the command line or the environment.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// CSV history to read
    pub input_path: PathBuf,
    /// PNG to write, overwritten on every run
    pub output_path: PathBuf,
    pub columns: ColumnNames,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub train_label: String,
    pub val_label: String,
    /// Figure size in pixels
    pub size: (u32, u32),
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("mse_history.csv"),
            output_path: PathBuf::from("mse_plot.png"),
            columns: ColumnNames::default(),
            title: "Evolução do MSE durante o Treinamento".to_string(),
            x_label: "Iterações".to_string(),
            y_label: "MSE".to_string(),
            train_label: "MSE Treino".to_string(),
            val_label: "MSE Validação".to_string(),
            // 10x6 inches at 100 dpi
            size: (1000, 600),
        }
    }
}

impl PlotConfig {
    /// Default labels with the input and output placed under `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let defaults = Self::default();
        Self {
            input_path: dir.join(&defaults.input_path),
            output_path: dir.join(&defaults.output_path),
            ..defaults
        }
    }
}
