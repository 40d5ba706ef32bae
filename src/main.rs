use binres::cli::Cli;
use std::process;

fn main() {
    let matches = Cli::build_command().get_matches();

    // Warnings by default, -v for debug, -vv for trace; RUST_LOG overrides
    let level = match Cli::verbosity(&matches) {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_module("binres", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = Cli::run_with_matches(matches) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
