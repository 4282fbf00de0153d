#![allow(clippy::cargo_common_metadata)]
use std::process;

use cmdcheck::error::{EXIT_INVALID_VALUE, EXIT_SUCCESS};
use cmdcheck::{cli, config::Config, setup_logging};

fn main() {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    if let Err(e) = setup_logging(args.debug) {
        eprintln!("{}", e);
        process::exit(EXIT_INVALID_VALUE);
    }

    // A bare invocation is a request for orientation
    let Some(command) = &args.command else {
        if let Err(e) = cli::print_help() {
            eprintln!("{}", e);
            process::exit(e.exit_code());
        }
        process::exit(EXIT_SUCCESS);
    };

    // Initialize configuration and execute the appropriate command
    let result = Config::from_args(&args).and_then(|config| cli::execute_command(&config, command));

    match result {
        Ok(()) => process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.exit_code());
        }
    }
}
