//! Plots `float_data.txt` (floating point matrix multiplication) to `res/performance_float.png`.

use matmul_perf_plots::cli::main_for;
use matmul_perf_plots::common::schema::FLOAT_SCHEMA;
use std::process::ExitCode;

fn main() -> ExitCode {
    main_for(&FLOAT_SCHEMA)
}
