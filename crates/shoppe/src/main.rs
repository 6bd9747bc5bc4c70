use anyhow::Context;
use clap::{Parser, Subcommand};
use micro_cone::chain::Customer;
use micro_cone::ingredient::{Catalog, IngredientKind};
use micro_shoppe::demo::open_for_business;
use micro_shoppe::sink::WriterSink;
use micro_shoppe::{Engineer, ShoppeConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Builds ice cream cones from ingredients listed in any order
#[derive(Parser, Debug)]
#[command(name = "shoppe", version, about, long_about = None)]
struct Cli {
    /// Path to a JSON shoppe config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the sample orders (default command)
    Demo,
    /// Serve a single order
    Order {
        /// Name of the customer
        #[arg(long)]
        customer: String,

        /// Name of the engineer taking the order
        #[arg(long, default_value = "Julie")]
        engineer: String,

        /// Ingredient identifiers, in any order
        ingredients: Vec<String>,
    },
    /// List the ingredients on the menu
    Menu,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    run(cli, &mut io::stdout().lock())
}

fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = ShoppeConfig::load_or_default(cli.config.as_deref())?;
    let catalog = config.catalog()?;
    info!(ingredients = catalog.len(), "shoppe is open");

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => open_for_business(&catalog, config.script(), &mut WriterSink::new(&mut *out))?,
        Commands::Order { customer, engineer, ingredients } => {
            Engineer::new(engineer).serve_to(
                &catalog,
                config.script(),
                Customer::new(customer),
                &ingredients,
                &mut WriterSink::new(&mut *out),
            )?;
        }
        Commands::Menu => print_menu(&catalog, out)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).with_writer(io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")
}

fn print_menu(catalog: &Catalog, out: &mut impl Write) -> io::Result<()> {
    for kind in IngredientKind::ALL {
        writeln!(out, "{kind}:")?;
        for spec in catalog.of_kind(kind) {
            writeln!(out, "  {}", spec.id())?;
        }
    }
    out.flush()
}
