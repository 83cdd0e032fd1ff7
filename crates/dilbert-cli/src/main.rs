use dilbert_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    let file_logging = match logging::init_logging() {
        Ok(()) => true,
        Err(err) => {
            logging::init_logging_stderr();
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
            false
        }
    };

    if let Err(err) = Cli::run_from_args() {
        eprintln!("{}", failure_line(&err, file_logging));
        std::process::exit(1);
    }
}

/// Line printed on stderr for a fatal error. The error also goes to the log
/// file, but only when logging is not already on stderr.
fn failure_line(err: &anyhow::Error, file_logging: bool) -> String {
    if file_logging {
        tracing::error!("{:#}", err);
    }
    format!("dilbert error: {:#}", err)
}
