use compute_sales::args::Args;
use compute_sales::report::REPORT_FILE;
use std::io;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let args = Args::parse();

    let report = match compute_sales::run(&args) {
        Ok(report) => report,
        Err(err) => {
            println!("{}", err);
            process::exit(1);
        }
    };

    // An unwritable report file is already logged and the console copy has
    // been printed, so the run still counts as a success.
    let _ = report.emit(Path::new(REPORT_FILE));
}

/// Diagnostics share stdout with the report. `RUST_LOG` overrides the
/// default `info` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .with_writer(io::stdout)
        .init();
}
