//! Command line driver.
//!
//! Reads input files, runs the aggregation or diff pipeline and hands the
//! results to [`crate::output`].

use crate::config::Config;
use crate::models::{FilterListModel, ListKind, Network};
use crate::output::{self, AggregationReport, Sections};
use crate::processing::{
    acl_to_prefix_list, aggregate_lines, all_subnets_possible, hosts, select_top_n,
    symmetric_diff,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};

/// Largest network the `hosts` subcommand will expand (a /16).
const MAX_HOSTS_LISTED: u64 = 1 << 16;

#[derive(Parser, Debug)]
#[command(name = "net-cli-tools")]
#[command(about = "Network engineering helpers: aggregation and ACL/prefix-list diffs.")]
pub struct CommandLine {
    /// Directory for output files (overrides NET_TOOLS_OUTPUT_DIR)
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find supernets that aggregate a list of networks
    #[command(alias = "agg")]
    Aggregate {
        file: PathBuf,
        /// Shortest prefix length to consider
        #[arg(short, long)]
        lower: Option<u8>,
        /// Longest prefix length to consider
        #[arg(short, long)]
        upper: Option<u8>,
        /// Number of best candidates to keep
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },
    /// Diff two standard ACLs
    AclDiff { file_a: PathBuf, file_b: PathBuf },
    /// Diff two prefix-lists
    PlDiff { file_a: PathBuf, file_b: PathBuf },
    /// Convert a standard ACL to a prefix-list
    AclToPl {
        file: PathBuf,
        /// Name for the new prefix-list, defaults to the ACL name
        #[arg(long)]
        name: Option<String>,
    },
    /// List every subnet an address belongs to, with masks
    Subnets { cidr: String },
    /// List every address in a network
    Hosts { cidr: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading input file {}: {e}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

fn label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Print `lines`, or write them to a dated file when an output dir is set.
fn emit(
    config: &Config,
    stem: &str,
    ext: &str,
    lines: &[String],
) -> Result<(), Box<dyn Error>> {
    match &config.output_dir {
        Some(dir) => {
            let path = output::write_lines(dir, &output::dated_file_name(stem, ext), lines)?;
            println!("File named {} created", path.display());
        }
        None => lines.iter().for_each(|l| println!("{l}")),
    }
    Ok(())
}

fn diff(
    config: &Config,
    file_a: &Path,
    file_b: &Path,
    kind: ListKind,
) -> Result<(), Box<dyn Error>> {
    let a = FilterListModel::parse(&read_lines(file_a)?, kind);
    let b = FilterListModel::parse(&read_lines(file_b)?, kind);
    let records = symmetric_diff(&a, &label(file_a), &b, &label(file_b))?;
    if config.output_dir.is_some() {
        let stem = match kind {
            ListKind::Acl => "acl_diff",
            ListKind::PrefixList => "pl_diff",
        };
        emit(config, stem, "txt", &output::diff_lines(&records))
    } else {
        output::print_diff(&records);
        Ok(())
    }
}

/// Run one subcommand. CLI flags win over `config`.
pub fn run(cli: CommandLine, mut config: Config) -> Result<(), Box<dyn Error>> {
    if cli.output_dir.is_some() {
        config.output_dir = cli.output_dir;
    }
    log::debug!("run() {:?} config={:?}", cli.command, config);

    match cli.command {
        Commands::Aggregate {
            file,
            lower,
            upper,
            top,
        } => {
            let lower = lower.unwrap_or(config.lower);
            let upper = upper.unwrap_or(config.upper);
            let top = top.unwrap_or(config.top_n);
            let aggregation = aggregate_lines(&read_lines(&file)?, lower, upper)?;
            let top_n = select_top_n(&aggregation.coverage, top);

            if config.output_dir.is_some() {
                let report = AggregationReport::new(&aggregation, &top_n);
                emit(&config, "aggregate", "json", &[report.to_json()?])
            } else {
                let sections: Sections = vec![
                    (
                        format!("Top {top}"),
                        output::top_n_rows(&top_n, aggregation.valid_count()),
                    ),
                    (
                        "Bad input".to_string(),
                        aggregation.bad().iter().map(|s| s.to_string()).collect(),
                    ),
                ];
                output::print_sections(&sections);
                Ok(())
            }
        }
        Commands::AclDiff { file_a, file_b } => diff(&config, &file_a, &file_b, ListKind::Acl),
        Commands::PlDiff { file_a, file_b } => {
            diff(&config, &file_a, &file_b, ListKind::PrefixList)
        }
        Commands::AclToPl { file, name } => {
            let acl = FilterListModel::parse(&read_lines(&file)?, ListKind::Acl);
            emit(&config, "acl_to_pl", "txt", &acl_to_prefix_list(&acl, name.as_deref()))
        }
        Commands::Subnets { cidr } => {
            let network = Network::new(&cidr)?;
            let lines: Vec<String> = all_subnets_possible(&network)
                .iter()
                .map(|(n, mask)| format!("{n} or {mask}"))
                .collect();
            emit(&config, "subnets", "txt", &lines)
        }
        Commands::Hosts { cidr } => {
            let network = Network::new(&cidr)?;
            if network.size() > MAX_HOSTS_LISTED {
                return Err(format!("{network} has more than {MAX_HOSTS_LISTED} addresses").into());
            }
            let lines: Vec<String> = hosts(&network).map(|ip| ip.to_string()).collect();
            emit(&config, "hosts", "txt", &lines)
        }
    }
}
