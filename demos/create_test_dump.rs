//! Creates a sample perf-dump file for trying out the tools.
//!
//! 256 ranks on an 8x32 process grid, 4 time steps, two counters. The L1
//! miss counter has a hot spot that drifts across the grid from step to step.

use perf_dump_tools::dataset::CounterTable;
use perf_dump_tools::netcdf_io::write_counter_dump;
use std::path::Path;

const ROWS: usize = 8;
const COLS: usize = 32;
const STEPS: usize = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = Path::new("perf-dump.h5");
    let ranks = ROWS * COLS;

    println!("🔨 Creating test perf-dump file: {}", output_path.display());

    let mut misses = Vec::with_capacity(ranks * STEPS);
    let mut cycles = Vec::with_capacity(ranks * STEPS);
    for rank in 0..ranks {
        let (row, col) = ((rank / COLS) as f64, (rank % COLS) as f64);
        for step in 0..STEPS {
            let hot_col = 4.0 + step as f64 * 8.0;
            let dist2 = (row - 3.5).powi(2) + (col - hot_col).powi(2);
            misses.push((1.0e5 + 9.0e5 * (-dist2 / 12.0).exp()).round());
            cycles.push(2.0e9 + 1.0e7 * ((rank * 7 + step * 13) % 17) as f64);
        }
    }

    let tables = vec![
        CounterTable::from_row_major("PAPI_L1_TCM", ranks, STEPS, misses)?,
        CounterTable::from_row_major("PAPI_TOT_CYC", ranks, STEPS, cycles)?,
    ];
    write_counter_dump(output_path, &tables)?;

    println!("✅ Successfully created test perf-dump file with:");
    println!("   📏 {ranks} ranks x {STEPS} steps");
    println!("   📈 Datasets: PAPI_L1_TCM, PAPI_TOT_CYC");
    println!("\n🧪 Try:");
    println!("   cargo run --bin pdump-process -- perf-dump.h5 -t 0 1");
    println!("   cargo run --bin pdump-plot -- perf-dump.h5 8x32");

    Ok(())
}
