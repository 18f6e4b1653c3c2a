mod commands;
mod error;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::ErrorCode;

#[derive(Parser)]
#[command(name = "docbind", version, about = "Document template data binding", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,

    /// Log decisions (skipped regions, table projections) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => ErrorCode::Usage as i32,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_tracing(cli.verbose);

    if let Err(err) = commands::run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}
