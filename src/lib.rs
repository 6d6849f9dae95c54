//! Plot training and validation MSE curves from a CSV history.
//!
//! Reads `mse_history.csv`, writes the chart to `mse_plot.png` and shows it
//! in an interactive terminal view.

pub mod config;
pub mod data;
pub mod error;
pub mod training;
pub mod utils;

pub use config::{ColumnNames, PlotConfig};
pub use error::{PlotError, PlotResult};
pub use training::history::{MseHistory, MseRecord};
