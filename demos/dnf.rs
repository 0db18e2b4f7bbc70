//! Builds a synthetic rule `AND(OR(...), OR(...), ...)` and converts it to DNF.
//!
//! Run with:
//! ```bash
//! cargo run --example dnf -- --groups 3 --width 4
//! cargo run --example dnf -- --groups 3 --width 10 --distinct   # exceeds the default limit
//! ```

use ccs_dnf::ast::Expr;
use ccs_dnf::config::{DnfConfig, DEFAULT_LIMIT};
use ccs_dnf::dnf::to_dnf_with_config;
use ccs_dnf::flatten::flatten;
use ccs_dnf::types::Key;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about = "DNF conversion of a synthetic AND-of-ORs rule")]
struct Cli {
    /// Number of OR groups under the top-level AND
    #[arg(long, default_value = "2")]
    groups: usize,

    /// Number of alternatives in each OR group
    #[arg(long, default_value = "3")]
    width: usize,

    /// Give every alternative its own key name, so flattening cannot merge them
    #[arg(long)]
    distinct: bool,

    /// Maximum clause count of a single AND expansion
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Skip flattening before conversion
    #[arg(long)]
    no_flatten: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn build_rule(cli: &Cli) -> Expr {
    Expr::and((0..cli.groups).map(|g| {
        Expr::or((0..cli.width).map(|w| {
            let key = if cli.distinct {
                Key::single(format!("k{}_{}", g, w), "on")
            } else {
                Key::single(format!("k{}", g), format!("v{}", w))
            };
            Expr::literal(key)
        }))
    }))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let level = if cli.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let rule = build_rule(&cli);
    println!("rule      = {}", rule);
    println!("size      = {} nodes, depth {}", rule.size(), rule.depth());
    if !cli.no_flatten {
        println!("flattened = {}", flatten(&rule));
    }

    let config = DnfConfig::default().with_limit(cli.limit).with_flatten(!cli.no_flatten);
    let dnf = to_dnf_with_config(&rule, &config)?;

    println!("dnf has {} clauses:", dnf.len());
    for clause in &dnf {
        println!("  {}", clause);
    }
    if !dnf.shared().is_empty() {
        println!("shared sub-clauses:");
        for clause in dnf.shared() {
            println!("  {}", clause);
        }
    }

    Ok(())
}
