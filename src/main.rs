use human_panic::{metadata, setup_panic};
use vaxmap::cli::run_cli;
use vaxmap::log;

fn main() {
    setup_panic!(metadata!().support("Open an issue with the data file that caused the crash."));

    if let Err(err) = run_cli() {
        if log::is_logger_initialised() {
            ::log::error!("{err:?}");
        } else {
            eprintln!("Error: {err:?}");
        }

        std::process::exit(1);
    }
}
