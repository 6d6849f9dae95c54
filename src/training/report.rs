use tracing::info;

use crate::config::PlotConfig;
use crate::data::loader::load_history;
use crate::error::PlotResult;
use crate::training::history::MseHistory;
use crate::utils::plot::{create_plot, MseFigure};

/// Load the MSE history and write its chart to `config.output_path`.
///
/// The output file is only touched once the whole history has loaded, so a
/// bad input leaves an existing image in place. Returns the history together
/// with the figure that was drawn, so the viewer shows the same chart.
pub fn plot_mse_history(config: &PlotConfig) -> PlotResult<(MseHistory, MseFigure)> {
    info!("loading MSE history from '{}'", config.input_path.display());
    let history = load_history(&config.input_path, &config.columns)?;
    info!("loaded {} iterations", history.len());

    let figure = MseFigure::from_history(&history, config);
    create_plot(&figure, &config.output_path)?;
    info!("plot saved to '{}'", config.output_path.display());

    Ok((history, figure))
}
