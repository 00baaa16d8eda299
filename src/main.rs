use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use colored::Colorize;
use miette::Result;
use std::path::PathBuf;
use tracing::info;

use smellcatalog::{CatalogStore, Category, Config, Platform, ReportFormat, ReportOptions, Reporter};

/// smellcatalog - query the catalog of mobile energy & privacy code smells
#[derive(Parser, Debug)]
#[command(name = "smellcatalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to an alternate catalog document (markdown)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Platform to query
    #[arg(short, long, value_enum)]
    platform: Option<Platform>,

    /// Restrict the listing to one category
    #[arg(short, long, value_enum)]
    category: Option<Category>,

    /// Look up a single smell by its exact name
    #[arg(short, long, value_name = "NAME")]
    name: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Output file (json format)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// List the categories of the selected platform with entry counts
    #[arg(long)]
    list_categories: bool,

    /// Hide the environmental/social axis labels in terminal output
    #[arg(long)]
    no_axis: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completions
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    init_logging(cli.verbose, cli.quiet);

    info!("smellcatalog v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;

    // Load the catalog once; everything after this is read-only.
    let store = load_store(&cli, &config)?;
    info!("catalog loaded: {} entries", store.len());

    let platform = cli
        .platform
        .or(config.platform)
        .unwrap_or(Platform::Android);

    // Exact-name lookup short-circuits the listing paths.
    if let Some(ref name) = cli.name {
        return lookup(&cli, &config, &store, platform, name);
    }

    if cli.list_categories {
        list_categories(&store, platform);
        return Ok(());
    }

    let entries = match cli.category {
        Some(category) => store.list_by_category(platform, category),
        None => store.list_by_platform(platform),
    };

    let format = cli.format.or(config.format).unwrap_or_default();
    let reporter = Reporter::with_options(
        format,
        ReportOptions {
            output_path: cli.output.clone(),
            show_axis: !cli.no_axis,
        },
    );
    reporter.report(&entries)?;

    Ok(())
}

/// Resolve the catalog source: CLI flag, then config, then the embedded copy.
fn load_store(cli: &Cli, config: &Config) -> Result<CatalogStore> {
    let path = cli.catalog.as_ref().or(config.catalog.as_ref());
    let store = match path {
        Some(path) => {
            info!("loading catalog from {}", path.display());
            CatalogStore::from_file(path)?
        }
        None => CatalogStore::embedded()?,
    };
    Ok(store)
}

fn lookup(
    cli: &Cli,
    config: &Config,
    store: &CatalogStore,
    platform: Platform,
    name: &str,
) -> Result<()> {
    match store.find_by_name(platform, name) {
        Some(entry) => {
            let format = cli.format.or(config.format).unwrap_or_default();
            let reporter = Reporter::with_options(
                format,
                ReportOptions {
                    output_path: cli.output.clone(),
                    show_axis: !cli.no_axis,
                },
            );
            reporter.report(&[entry])?;
            Ok(())
        }
        None => {
            // Not-found is an explicit outcome, not a fault.
            eprintln!(
                "{}: no smell named '{}' for {} (names are case-sensitive)",
                "Not found".red(),
                name,
                platform
            );
            std::process::exit(1);
        }
    }
}

fn list_categories(store: &CatalogStore, platform: Platform) {
    let categories = store.categories(platform);
    if categories.is_empty() {
        println!("{}", format!("No categories cataloged for {} yet.", platform).yellow());
        return;
    }

    println!("{}", format!("Categories for {}:", platform).cyan().bold());
    for category in categories {
        let count = store.list_by_category(platform, category).len();
        println!(
            "  {:<14} {} {}",
            category.as_str().bold(),
            count.to_string().white().bold(),
            format!("smells · {}", category.axis()).dimmed()
        );
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so json output on stdout stays machine-readable.
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Config::from_default_locations(&cwd)?
    };
    Ok(config)
}
