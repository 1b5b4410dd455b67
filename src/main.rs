use clap::Parser;
use footprint::cli::Args;
use std::io;

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = footprint::run(&args, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
