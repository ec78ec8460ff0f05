use api_buddy_core::logging;
use api_buddy_core::UserInputError;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    if let Err(err) = Cli::run_from_args() {
        match err.downcast_ref::<UserInputError>() {
            Some(user_err) => eprintln!("{}", cli::format_user_error(user_err)),
            None => eprintln!("api-buddy error: {:#}", err),
        }
        std::process::exit(1);
    }
}
