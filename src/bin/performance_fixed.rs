//! Plots `fixed_data.txt` (integer matrix multiplication) to `res/performance_fixed.png`.

use matmul_perf_plots::cli::main_for;
use matmul_perf_plots::common::schema::FIXED_SCHEMA;
use std::process::ExitCode;

fn main() -> ExitCode {
    main_for(&FIXED_SCHEMA)
}
