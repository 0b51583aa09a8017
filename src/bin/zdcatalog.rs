//! Command-line access to the zero-divisor catalog.
use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use zero_divisor_catalog::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "zdcatalog")]
#[command(version)]
#[command(about = "Zero-divisor and exact zero-divisor graphs of Z_n", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the catalog entry for Z_n as JSON
    Entry {
        n: u64,

        /// Omit the vertex and edge sets
        #[arg(long)]
        summary: bool,

        /// Fail if any component is neither a clique nor complete bipartite
        #[arg(long)]
        strict: bool,
    },

    /// Print the component description of every n in 2..=max_n
    Catalog {
        #[arg(default_value_t = 100)]
        max_n: u64,
    },

    /// Print every n in 2..=max_n whose exact graph contains all the given components
    ///
    /// Components are written `4` for the clique K_4 and `(1,8)` for K_{1,8}.
    Filter {
        max_n: u64,

        components: Vec<String>,

        /// Only match entries with no further components
        #[arg(long)]
        exact: bool,

        /// Only match entries having a component of this kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Clique,
    Bipartite,
}

impl From<KindArg> for ComponentKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Clique => ComponentKind::Clique,
            KindArg::Bipartite => ComponentKind::Bipartite,
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Entry { n, summary, strict } => {
            let mut options = CatalogOptions::new().strict(strict);
            if summary {
                options = options.with_summary_threshold(0);
            }
            let entry = compute_catalog_entry_with(n, &options)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Commands::Catalog { max_n } => {
            let catalog = build_catalog(2..=max_n, &CatalogOptions::new().with_summary_threshold(0))?;
            for (n, description) in catalog.table() {
                println!("{n:>6}  {description}");
            }
        }
        Commands::Filter {
            max_n,
            components,
            exact,
            kind,
        } => {
            let mut query = ComponentQuery::new()
                .requiring_str(&components.join(","))?
                .exact(exact);
            if let Some(kind) = kind {
                query = query.with_kind(kind.into());
            }
            let catalog = build_catalog(2..=max_n, &CatalogOptions::new().with_summary_threshold(0))?;
            for entry in catalog.filter(&query) {
                println!("{:>6}  {}", entry.n, entry.description);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
