//! Entry point for the `portuvan` command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = portuvan_cli::run() {
        eprintln!("portuvan: {err}");
        std::process::exit(1);
    }
}
