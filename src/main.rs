use std::process::ExitCode;

use turbolift::ui::output;

fn main() -> ExitCode {
    match turbolift::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
