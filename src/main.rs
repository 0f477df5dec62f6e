use std::process::ExitCode;

fn main() -> ExitCode {
    match version_stamp::stamp::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Version stamp error: {e}");
            ExitCode::FAILURE
        }
    }
}
