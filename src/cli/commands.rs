//! CLI command implementations
//!
//! Every command follows the same sequence:
//! 1. Resolve configuration
//! 2. Set the log level
//! 3. Load and link the source data
//! 4. Run the command, writing to stdout (or an output file)

use std::io::{self, Write};

use crate::database::NeoDatabase;
use crate::ingest::{load_approaches, load_neos};
use crate::observability::{Logger, ObservationScope};
use crate::output::write_results;
use crate::query::QueryExecutor;

use super::args::{Cli, Command, InspectTarget, QueryArgs};
use super::config::Config;
use super::errors::CliResult;

/// Result cap when printing to the terminal without an explicit `--limit`
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    run_cli(Cli::parse_args())
}

/// Runs parsed arguments
pub fn run_cli(cli: Cli) -> CliResult<()> {
    let config = Config::resolve(cli.config.as_deref(), cli.neofile, cli.cadfile)?;
    Logger::set_min_severity(config.log_severity()?);

    let db = load_database(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Inspect { target, verbose } => inspect(&db, &target, verbose, &mut out),
        Command::Query(args) => query(&db, &args, &mut out),
    }
}

/// Reads both source files and links them
pub fn load_database(config: &Config) -> CliResult<NeoDatabase> {
    let scope = ObservationScope::new("LOAD");

    match read_and_link(config) {
        Ok(db) => {
            scope.complete_with_fields(&[
                ("approaches", &db.len_approaches().to_string()),
                ("neos", &db.len_neos().to_string()),
            ]);
            Ok(db)
        }
        Err(e) => {
            scope.fail(e.message());
            Err(e)
        }
    }
}

fn read_and_link(config: &Config) -> CliResult<NeoDatabase> {
    let neos = load_neos(&config.neo_path)?;
    let approaches = load_approaches(&config.cad_path)?;
    Ok(NeoDatabase::new(neos, approaches)?)
}

/// Prints one object, and with `verbose` each of its approaches
pub fn inspect<W: Write>(
    db: &NeoDatabase,
    target: &InspectTarget,
    verbose: bool,
    out: &mut W,
) -> CliResult<()> {
    let neo = match (&target.pdes, &target.name) {
        (Some(pdes), _) => db.get_neo_by_designation(pdes),
        (None, name) => db.get_neo_by_optional_name(name.as_deref()),
    };

    let neo = match neo {
        Some(neo) => neo,
        None => {
            writeln!(out, "No matching NEOs exist in the database.")?;
            return Ok(());
        }
    };

    writeln!(out, "{}", neo)?;
    if verbose {
        for record in db.approaches_of(neo) {
            writeln!(out, "- {}", record)?;
        }
    }

    Ok(())
}

/// Runs a filtered query and prints or writes the results
pub fn query<W: Write>(db: &NeoDatabase, args: &QueryArgs, out: &mut W) -> CliResult<()> {
    let mut plan = args.to_plan()?;
    if args.outfile.is_none() && plan.limit.is_none() {
        plan.limit = Some(DEFAULT_DISPLAY_LIMIT);
    }

    let scope = ObservationScope::new("QUERY");
    let result = QueryExecutor::new(db).execute(&plan);

    match &args.outfile {
        Some(path) => {
            if let Err(e) = write_results(path, result.iter().copied()) {
                scope.fail(&e.to_string());
                return Err(e.into());
            }
        }
        None => {
            if result.is_empty() {
                writeln!(out, "No matching close approaches.")?;
            }
            for record in result.iter() {
                writeln!(out, "{}", record)?;
            }
        }
    }

    scope.complete_with_fields(&[
        ("returned", &result.returned_count.to_string()),
        ("scanned", &result.scanned_count.to_string()),
    ]);

    Ok(())
}
