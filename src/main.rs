use std::process;
use ioctl_dump::init::cmdline::DumpConfig;
use ioctl_dump::debug::logger;
use colored::*;

fn main() {
    let dump_config = DumpConfig::new().unwrap_or_else(|err| {
        eprintln!("{}: {}", "error".bright_red(), err);
        process::exit(1);
    });

    if !DumpConfig::verify_args(&dump_config) {
        process::exit(1);
    }

    if let Err(err) = logger::logger_init(dump_config.verbosity) {
        eprintln!("{}: {}", "error".bright_red(), err);
        process::exit(1);
    }

    if let Err(err) = ioctl_dump::run(&dump_config) {
        eprintln!("{}: failed to write output: {}", "error".bright_red(), err);
        process::exit(1);
    }
}
