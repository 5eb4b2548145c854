//! Runs the container comparison suite with default parameters and prints
//! the timing report.
//!
//! Takes no arguments; `RUST_LOG` controls diagnostic verbosity only.

use seqbench::{print_report, run_suite, WorkloadConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let workload = WorkloadConfig::default().generate();
    let timings = run_suite(&workload);
    print_report(&timings);
}
