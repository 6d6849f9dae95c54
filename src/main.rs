use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use mse_plot::training::report::plot_mse_history;
use mse_plot::utils::viewer::show_history;
use mse_plot::PlotConfig;

fn main() -> Result<()> {
    // Fixed filter: the environment is never consulted
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("mse_plot=info"))
        .with_writer(std::io::stderr)
        .init();

    let config = PlotConfig::default();

    let (_history, figure) = plot_mse_history(&config).with_context(|| {
        format!(
            "failed to plot '{}' into '{}'",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    show_history(&figure).context("interactive view failed")?;

    Ok(())
}
