use dts_walker::cli::{Args, Command};
use dts_walker::output::init_logger;
use std::process;

fn main() {
    let args = Args::parse_args();

    init_logger(args.verbose, args.quiet, args.no_colors);

    let command = Command::from_args(args);
    process::exit(command.run());
}
