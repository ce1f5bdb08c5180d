//! depver - Gradle dependency latest-version checker CLI
//!
//! Reads a build.gradle script (file or stdin), extracts the declared
//! dependency coordinates and reports the latest published version of
//! each by querying the repository's maven-metadata.xml documents.

use clap::Parser;
use depver::cli::CliArgs;
use depver::error::ManifestError;
use depver::manifest::{GradleScanner, ScannerConfig};
use depver::orchestrator::{ResolutionItem, Resolver};
use depver::output::{create_formatter, OutputConfig};
use depver::progress::{ConsoleProgress, ProgressSink};
use depver::registry::{metadata_url, HttpClient, MavenMetadataFetcher};
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("depver v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Repository: {}", args.repository);
    }

    let manifest = read_manifest(&args)?;

    // Scan the build script
    let config = ScannerConfig::default().with_extra_keywords(args.configurations.clone());
    let scanner = GradleScanner::new(config);
    let outcome = scanner.scan(&manifest);

    if args.verbose {
        for dropped in &outcome.dropped {
            eprintln!("Skipping '{}': {}", dropped.literal, dropped.error);
        }
    }

    // Derive one metadata URL per declaration
    let mut items = Vec::with_capacity(outcome.declarations.len());
    for declaration in outcome.declarations {
        match metadata_url(&declaration.coordinate, &args.repository) {
            Ok(url) => items.push(ResolutionItem::new(declaration, url)),
            Err(e) => {
                if args.verbose {
                    eprintln!("Skipping declaration: {}", e);
                }
            }
        }
    }

    // Resolve the latest version of every item
    let client = HttpClient::with_timeout(Duration::from_secs(args.timeout))?;
    let fetcher = Arc::new(MavenMetadataFetcher::new(client));
    let resolver = Resolver::new(fetcher).with_concurrency(args.concurrency);

    let progress: Arc<dyn ProgressSink> = if args.quiet {
        Arc::new(ConsoleProgress::disabled())
    } else {
        Arc::new(ConsoleProgress::new())
    };

    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = Arc::clone(&cancel);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.store(true, Ordering::SeqCst);
            }
        });
    }

    let report = resolver.resolve_all(items, progress, cancel).await;

    // Output results
    let formatter = create_formatter(OutputConfig::from_cli(args.json, args.verbose, args.quiet));
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    if report.cancelled {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Read the build script from the configured source
fn read_manifest(args: &CliArgs) -> Result<String, ManifestError> {
    if args.reads_stdin() {
        return io::read_to_string(io::stdin())
            .map_err(|e| ManifestError::read_error(&args.path, e));
    }

    std::fs::read_to_string(&args.path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ManifestError::not_found(&args.path)
        } else {
            ManifestError::read_error(&args.path, e)
        }
    })
}
