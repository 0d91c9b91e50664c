use pdftool_core::logging::FILE_ONLY_TARGET;

mod cli;

fn main() {
    if let Err(err) = cli::run_from_args() {
        tracing::error!(target: FILE_ONLY_TARGET, "{:#}", err);
        eprintln!("pdftool error: {:#}", err);
        std::process::exit(1);
    }
}
