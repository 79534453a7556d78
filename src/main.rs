use std::process::ExitCode;

use diddy_chess::session::session_config::SessionConfig;
use diddy_chess::session::text_frontend::run_stdio_loop;
use diddy_chess::utils::logging::init_logging;

fn main() -> ExitCode {
    init_logging();
    let config = SessionConfig::from_env();

    match run_stdio_loop(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "stdio loop failed");
            ExitCode::FAILURE
        }
    }
}
