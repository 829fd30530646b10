use std::process::ExitCode;

fn main() -> ExitCode {
    match tinyclean::cli::execute(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
