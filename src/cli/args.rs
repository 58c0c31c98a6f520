//! CLI argument definitions using clap
//!
//! Commands:
//! - neodb inspect (--pdes <designation> | --name <name>) [--verbose]
//! - neodb query [filters] [--sort <key>] [--desc] [--limit <n>] [--outfile <path>]
//!
//! `--config`, `--neofile` and `--cadfile` are accepted by every command.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::time::parse_date;
use crate::query::{QueryCriteria, QueryPlan, QueryResult, SortKey, SortSpec};

/// neodb - explore near-Earth objects and their close approaches
#[derive(Parser, Debug)]
#[command(name = "neodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the NEO catalog CSV (overrides config)
    #[arg(long, global = true)]
    pub neofile: Option<PathBuf>,

    /// Path to the close-approach JSON (overrides config)
    #[arg(long, global = true)]
    pub cadfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up one NEO by designation or name
    Inspect {
        #[command(flatten)]
        target: InspectTarget,

        /// Also list every close approach of the object
        #[arg(short, long)]
        verbose: bool,
    },

    /// Filter close approaches
    Query(QueryArgs),
}

/// Exactly one lookup key
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct InspectTarget {
    /// Primary designation, e.g. 433
    #[arg(short, long)]
    pub pdes: Option<String>,

    /// IAU name, e.g. Eros
    #[arg(short, long)]
    pub name: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = date_arg, conflicts_with_all = ["start_date", "end_date"])]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = date_arg)]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = date_arg)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance (au)
    #[arg(long)]
    pub min_distance: Option<f64>,

    /// Maximum approach distance (au)
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Minimum relative velocity (km/s)
    #[arg(long)]
    pub min_velocity: Option<f64>,

    /// Maximum relative velocity (km/s)
    #[arg(long)]
    pub max_velocity: Option<f64>,

    /// Minimum object diameter (km)
    #[arg(long)]
    pub min_diameter: Option<f64>,

    /// Maximum object diameter (km)
    #[arg(long)]
    pub max_diameter: Option<f64>,

    /// Only potentially hazardous objects
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only objects that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Order results by this attribute
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Maximum number of results (0 = unlimited)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Write results to a .csv or .json file instead of stdout
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortArg {
    Time,
    Distance,
    Velocity,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Time => SortKey::Time,
            SortArg::Distance => SortKey::Distance,
            SortArg::Velocity => SortKey::Velocity,
        }
    }
}

impl QueryArgs {
    /// Filter criteria named on the command line
    pub fn criteria(&self) -> QueryCriteria {
        let hazardous = match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };

        QueryCriteria {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.min_distance,
            distance_max: self.max_distance,
            velocity_min: self.min_velocity,
            velocity_max: self.max_velocity,
            diameter_min: self.min_diameter,
            diameter_max: self.max_diameter,
            hazardous,
        }
    }

    /// Plan with criteria, sort and limit applied
    pub fn to_plan(&self) -> QueryResult<QueryPlan> {
        let mut plan = QueryPlan::from_criteria(&self.criteria())?;
        plan.sort = self.sort.map(|arg| {
            let key = SortKey::from(arg);
            if self.desc {
                SortSpec::desc(key)
            } else {
                SortSpec::asc(key)
            }
        });
        plan.limit = self.limit;
        Ok(plan)
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

fn date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}
