//! authorgraph CLI
//!
//! Resolves the authors of a list of documents against a directory snapshot
//! and prints the co-authorship graph as JSON on stdout.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use authorgraph::{
    CachedLookup, Document, GraphBuilder, InMemoryDirectory, NameResolver, ResolveError,
    ResolverConfig, TracingSink,
};

/// CLI configuration
#[derive(Debug, PartialEq, Eq)]
struct Config {
    /// JSON array of directory people
    directory: PathBuf,
    /// JSON array of documents
    documents: PathBuf,
    /// Optional resolver configuration file
    resolver: Option<PathBuf>,
}

fn print_help() {
    println!("authorgraph - resolve document authors into a co-authorship graph");
    println!();
    println!("USAGE:");
    println!("    authorgraph --directory <FILE> --documents <FILE> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -d, --directory <FILE>    Directory snapshot (JSON array of people)");
    println!("    -i, --documents <FILE>    Documents to resolve (JSON array)");
    println!("    -c, --config <FILE>       Resolver configuration (JSON)");
    println!("    -h, --help                Print help information");
    println!();
    println!("Diagnostics are logged to stderr; set RUST_LOG to adjust verbosity.");
}

/// Parses command-line arguments, excluding the program name.
///
/// Returns `Ok(None)` when help was requested.
fn parse_args<I>(args: I) -> Result<Option<Config>, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut directory = None;
    let mut documents = None;
    let mut resolver = None;

    while let Some(flag) = args.next() {
        let slot = match flag.as_str() {
            "--directory" | "-d" => &mut directory,
            "--documents" | "-i" => &mut documents,
            "--config" | "-c" => &mut resolver,
            "--help" | "-h" => return Ok(None),
            arg => return Err(format!("unknown argument: {arg}")),
        };
        let value = args
            .next()
            .ok_or_else(|| format!("{flag} requires a value"))?;
        *slot = Some(PathBuf::from(value));
    }

    Ok(Some(Config {
        directory: directory.ok_or("--directory is required")?,
        documents: documents.ok_or("--documents is required")?,
        resolver,
    }))
}

fn load_documents(path: &Path) -> Result<Vec<Document>, ResolveError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| ResolveError::io(path.display().to_string(), &e))?;
    serde_json::from_str(&json).map_err(|e| ResolveError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn run(config: &Config) -> Result<String, ResolveError> {
    let resolver_config = match &config.resolver {
        Some(path) => ResolverConfig::from_path(path)?,
        None => ResolverConfig::default(),
    };

    let directory = CachedLookup::new(InMemoryDirectory::from_path(&config.directory)?);
    let documents = load_documents(&config.documents)?;
    let resolver = NameResolver::with_config(directory, TracingSink, resolver_config)?;

    let mut builder = GraphBuilder::new(&resolver);
    builder.add_documents(&documents)?;
    info!(
        documents = builder.document_count(),
        skipped_authors = builder.skipped_authors(),
        cache_hits = resolver.lookup().hits(),
        cache_misses = resolver.lookup().misses(),
        policy = resolver.tie_break().name(),
        "resolution complete"
    );

    let graph = builder.finish();
    serde_json::to_string_pretty(&graph).map_err(|e| ResolveError::Io {
        path: "<stdout>".to_string(),
        message: e.to_string(),
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("authorgraph=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
