//! rkintai binary entrypoint.

use std::process::ExitCode;

fn main() -> ExitCode {
    println!();
    match rkintai::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
