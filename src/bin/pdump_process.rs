//! Entry point for `pdump-process`.
//! Prints min/avg/max and imbalance ratios for every selected time step of
//! every dataset in a perf-dump file.

use clap::Parser;
use perf_dump_tools::cli::ProcessArgs;
use perf_dump_tools::config::ProcessConfig;
use perf_dump_tools::errors::Result;
use perf_dump_tools::logging::init_logging;
use perf_dump_tools::metadata::list_datasets;
use perf_dump_tools::netcdf_io::PerfDumpFile;
use perf_dump_tools::pipeline::run_process;
use std::process::ExitCode;

fn run(args: &ProcessArgs) -> Result<()> {
    if args.list {
        let file = PerfDumpFile::open(&args.source_file)?;
        list_datasets(&file);
        return Ok(());
    }

    let config = ProcessConfig::from(args);
    run_process(&config)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = ProcessArgs::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
