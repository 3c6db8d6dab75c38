//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = siterank_cli::run() {
        eprintln!("siterank: {err}");
        std::process::exit(1);
    }
}
