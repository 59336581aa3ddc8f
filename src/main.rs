//! Runs one multiplication kernel, selected by name, exactly once.
//!
//! `matmul-loops <kernel_name> [block_size]`
//!
//! Exit status 0 on success, 1 for a missing or unknown kernel name or an
//! invalid block size. Success produces no output at all; time the process
//! from outside.

use std::env;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use matmul_loops::cli;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Matrix dimension under study. Fixed for the whole process; change it
/// here and rebuild to vary the workload.
const DIM: usize = 4096;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    // Wall-clock seed: runs are intentionally non-reproducible. Callers who
    // need determinism go through `cli::run_with` with a seeded RNG.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let mut rng = StdRng::seed_from_u64(seed);

    match cli::run_with(DIM, &mut rng, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
