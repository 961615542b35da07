extern crate clap;
extern crate colored;
#[macro_use]
extern crate log;
extern crate log_panics;
extern crate simple_logging;

mod reporting;
pub use self::reporting::*;

use colored::Colorize;
use log::LevelFilter;
use portlit::semantics::Analysis;
use portlit::*;
use std::io;
use std::path::Path;
use std::process::exit;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{0}")]
    Usage(String),
}

fn log_to_stderr(verbose: bool) {
    log_panics::init();
    if verbose || cfg!(debug_assertions) {
        simple_logging::log_to_stderr(LevelFilter::Debug);
    } else {
        simple_logging::log_to_stderr(LevelFilter::Error);
    }
}

fn app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("portlit")
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            clap::Arg::with_name("files")
                .takes_value(true)
                .multiple(true)
                .value_name("FILES")
                .help("Glob patterns of C sources to check; reads stdin when omitted"),
        )
        .arg(
            clap::Arg::with_name("mode")
                .long("mode")
                .takes_value(true)
                .possible_values(&["first-match", "all-reasons"]),
        )
        .arg(
            clap::Arg::with_name("data-model")
                .long("data-model")
                .takes_value(true)
                .possible_values(&["ilp32", "lp64", "llp64"]),
        )
        .arg(
            clap::Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .value_name("CONFIG_FILE"),
        )
        .arg(
            clap::Arg::with_name("deny-warnings")
                .short("D")
                .long("deny-warnings")
                .help("Exit with failure when warnings are emitted"),
        )
        .arg(
            clap::Arg::with_name("verbose")
                .short("v")
                .long("verbose"),
        )
}

fn load_config(cli: &clap::ArgMatches) -> Result<Config, CliError> {
    let mut config = match cli.value_of("config") {
        Some(path) => Config::load(Path::new(path))?,
        None => Config::discover(&std::env::current_dir()?)?,
    };

    if let Some(mode) = cli.value_of("mode") {
        config.mode = mode.parse().map_err(CliError::Usage)?;
    }
    if let Some(model) = cli.value_of("data-model") {
        config.data_model = model.parse().map_err(CliError::Usage)?;
    }
    if cli.is_present("deny-warnings") {
        config.deny_warnings = true;
    }

    Ok(config)
}

fn load_sources(cli: &clap::ArgMatches) -> Result<Vec<Arc<Source>>, CliError> {
    let patterns = match cli.values_of("files") {
        None => return Ok(vec![Source::stdin()?]),
        Some(patterns) => patterns,
    };

    let mut sources = vec![];
    for pattern in patterns {
        let matched = Source::files(pattern)?;
        if matched.is_empty() {
            warn!("No files match {}", pattern);
        }
        sources.extend(matched);
    }
    Ok(sources)
}

fn run(cli: &clap::ArgMatches) -> Result<bool, CliError> {
    let config = load_config(cli)?;
    debug!("{:?}", config);

    let sources = load_sources(cli)?;
    info!("Checking {} source(s)", sources.len());

    let analysis = Analysis::new(sources, config);
    let diagnostics = analysis.diagnostics();

    PrettyReporter::report(&diagnostics, &analysis);

    Ok(!analysis.failed(&diagnostics))
}

fn main() {
    let cli = app().get_matches();
    log_to_stderr(cli.is_present("verbose"));

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(err) => {
            error!("{}", err);
            eprintln!("{}: {}", "error".bright_red().bold(), err);
            exit(2);
        }
    }
}
