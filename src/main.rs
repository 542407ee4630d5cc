use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use codeprint_cli::args::{self, Directive};
use codeprint_cli::cmdline::ParsedCommand;
use codeprint_cli::commands;
use codeprint_cli::dispatch::TextDispatcher;
use codeprint_cli::exits;
use codeprint_cli::lang::LanguageRegistry;
use codeprint_cli::visuals;

fn main() -> ExitCode {
    // Logs go to stderr so the rendered pages on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let parsed = ParsedCommand::parse(std::env::args().skip(1));
    let directive = match args::resolve(&parsed) {
        Ok(directive) => directive,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return ExitCode::from(exits::EX_USAGE as u8);
        }
    };

    let registry = LanguageRegistry::new();
    match directive {
        Directive::Help => {
            print_usage();
            ExitCode::SUCCESS
        }
        Directive::Version => {
            println!("codeprint {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Directive::Warranty => {
            print_warranty();
            ExitCode::SUCCESS
        }
        Directive::Languages => {
            visuals::print_languages(&registry);
            ExitCode::SUCCESS
        }
        Directive::Print {
            request,
            detailed_stats,
            quiet,
        } => {
            let mut dispatcher = TextDispatcher::stdout();
            match commands::run(&request, &registry, &mut dispatcher) {
                Ok(run_stats) => {
                    if !quiet {
                        if detailed_stats {
                            visuals::print_detailed(&run_stats);
                        } else {
                            visuals::print_summary(&run_stats);
                        }
                    }
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("codeprint: {err}");
                    ExitCode::from(exits::code_for(&err) as u8)
                }
            }
        }
    }
}

fn print_usage() {
    println!("codeprint - recursive source printer");
    println!();
    println!("Usage: codeprint -d PATH -l CODE [options]");
    println!("       codeprint --languages | --help | --version | --warranty");
    println!();
    println!("Options:");
    println!("  -d, --dir PATH            root of the source tree to print");
    println!("  -l, --lang CODE           language code selecting file suffixes");
    println!(
        "  -p, --lines-per-page N    printable lines per page (default {})",
        args::DEFAULT_LINES_PER_PAGE
    );
    println!(
        "      --page-width N        printable columns per line (default {})",
        args::DEFAULT_PAGE_WIDTH
    );
    println!(
        "      --timeout SECONDS     print-completion wait (default {})",
        args::DEFAULT_TIMEOUT_SECS
    );
    println!("      --stats               detailed per-file statistics");
    println!("      --quiet               suppress the summary line");
    println!("      --languages           list supported language codes");
    println!("  -h, --help                this text");
    println!("  -v, --version             version");
    println!("  -w, --warranty            warranty notice");
}

fn print_warranty() {
    println!("codeprint comes with ABSOLUTELY NO WARRANTY, to the extent");
    println!("permitted by applicable law. It is distributed in the hope that");
    println!("it will be useful, but without any implied warranty of");
    println!("merchantability or fitness for a particular purpose.");
}
