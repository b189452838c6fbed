//! Entry point for `pdump-plot`.
//! Projects selected time steps of every dataset onto a process grid and
//! writes one heat map image per dataset.

use clap::Parser;
use perf_dump_tools::cli::PlotArgs;
use perf_dump_tools::config::PlotConfig;
use perf_dump_tools::logging::init_logging;
use perf_dump_tools::pipeline::run_plot;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = PlotArgs::parse();
    init_logging(args.verbose);

    let config = PlotConfig::from(&args);
    match run_plot(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
