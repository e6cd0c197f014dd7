use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use patchbook_core::{
    AnyExample, Catalog, CatalogError, Config, ExampleQuery, IntegrityPolicy, Result,
};

mod args;
mod files;
use args::{Cli, Commands, ConfigAction, Shell};
use files::SourcePlan;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir.clone());

    let result = match cli.command {
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        Some(command) => run_catalog_command(
            command,
            &base_dir,
            cli.sources,
            cli.source_dir,
            cli.strict,
        ),
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else if quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("PATCHBOOK_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".patchbook"))
        .unwrap_or_else(|| PathBuf::from(".patchbook"))
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "patchbook", &mut io::stdout());
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = files::load_config(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(CatalogError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = files::load_config(base_dir)?;
            config.set(&key, &value)?;
            files::save_config(&config, base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = files::load_config(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            println!("{}", files::config_path(base_dir).display());
        }
        ConfigAction::Init => {
            let path = files::init_config(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}

fn run_catalog_command(
    command: Commands,
    base_dir: &Path,
    sources: Vec<PathBuf>,
    source_dir: Option<PathBuf>,
    strict: bool,
) -> Result<()> {
    let config = files::load_config(base_dir)?;
    let plan = SourcePlan {
        configured: config.catalog.sources.clone(),
        explicit: sources,
        directory: source_dir,
    };

    // `check` always builds leniently so it can report every violation itself
    let policy = match command {
        Commands::Check => IntegrityPolicy::Lenient,
        _ if strict => IntegrityPolicy::Strict,
        _ => config.policy(),
    };
    let catalog = files::build_catalog(base_dir, &plan, policy)?;

    match command {
        Commands::Groups => handle_groups(&catalog),
        Commands::Categories => handle_categories(&catalog),
        Commands::List {
            category,
            subcategory,
            pattern,
        } => handle_list(&catalog, &config, category, subcategory, pattern),
        Commands::Show { id, file } => handle_show(&catalog, &id, file.as_deref()),
        Commands::Files { id } => handle_files(&catalog, &id),
        Commands::Check => handle_check(&catalog),
        Commands::Export { category } => handle_export(&catalog, category),
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}

fn handle_groups(catalog: &Catalog) -> Result<()> {
    if catalog.groups().is_empty() {
        println!("No category groups defined.");
        return Ok(());
    }

    println!();
    for group in catalog.groups() {
        println!("{} ({})", group.title.cyan().bold(), group.id.dimmed());
        for category in &group.categories {
            println!(
                "  {} ({}) - {} examples",
                category.title.bold(),
                category.id,
                catalog.by_category(&category.id).len()
            );
            for sub in &category.subcategories {
                println!(
                    "    {} ({}) - {} examples",
                    sub.title,
                    sub.id,
                    catalog.by_subcategory(&category.id, &sub.id).len()
                );
            }
        }
        println!();
    }
    Ok(())
}

fn handle_categories(catalog: &Catalog) -> Result<()> {
    let categories = catalog.categories();
    let width = categories.iter().map(|c| c.id.len()).max().unwrap_or(0);

    println!();
    for category in categories {
        println!(
            "  {}  {} ({})",
            format!("{:<width$}", category.id, width = width).cyan(),
            category.title,
            catalog.by_category(&category.id).len()
        );
    }
    println!();
    Ok(())
}

fn handle_list(
    catalog: &Catalog,
    config: &Config,
    category: Option<String>,
    subcategory: Option<String>,
    pattern: Option<String>,
) -> Result<()> {
    let query = ExampleQuery {
        category,
        subcategory,
        id_pattern: pattern,
    };
    let examples = catalog.query(&query)?;

    if examples.is_empty() {
        println!("No examples found.");
        return Ok(());
    }

    println!();
    for example in examples {
        print_example_line(catalog, example, &config.display.separator);
    }
    println!();
    Ok(())
}

fn print_example_line(catalog: &Catalog, example: &AnyExample, separator: &str) {
    let marker = if example.is_multi_file() {
        " [multi-file]".yellow().to_string()
    } else {
        String::new()
    };
    println!(
        "  {}  {}{}",
        example.id().cyan().bold(),
        example.title(),
        marker
    );
    println!("    {}", catalog.label(example, separator).dimmed());
    if !example.description().is_empty() {
        println!("    {}", example.description());
    }
}

fn find<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a AnyExample> {
    catalog
        .get(id)
        .ok_or_else(|| CatalogError::ExampleNotFound { id: id.to_string() })
}

fn handle_show(catalog: &Catalog, id: &str, file: Option<&str>) -> Result<()> {
    let example = find(catalog, id)?;

    let content = match (file, example) {
        (None, _) => catalog.main_content(example),
        (Some(path), AnyExample::Multi(multi)) => multi
            .file(path)
            .map(|f| f.content.as_str())
            .ok_or_else(|| CatalogError::FileNotFound {
                example_id: id.to_string(),
                path: path.to_string(),
            })?,
        (Some(path), AnyExample::Single(_)) => {
            return Err(CatalogError::FileNotFound {
                example_id: id.to_string(),
                path: path.to_string(),
            })
        }
    };

    print!("{}", content);
    if !content.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn handle_files(catalog: &Catalog, id: &str) -> Result<()> {
    match find(catalog, id)? {
        AnyExample::Single(_) => {
            println!("{} is a single-file example", id.cyan());
        }
        AnyExample::Multi(multi) => {
            let main = multi.resolved_main_file().map(|f| f.path.as_str());
            println!();
            for file in &multi.files {
                if Some(file.path.as_str()) == main {
                    println!("  {} {}", file.path.bold(), "(main)".green());
                } else {
                    println!("  {}", file.path);
                }
            }
            if multi.main_file_entry().is_none() {
                println!();
                println!(
                    "{} main file '{}' not found, loading first file instead",
                    "[WARN]".yellow().bold(),
                    multi.main_file
                );
            }
            println!();
        }
    }
    Ok(())
}

fn handle_check(catalog: &Catalog) -> Result<()> {
    let violations = catalog.report();
    if violations.is_empty() {
        println!(
            "{} {} examples, {} categories, no integrity violations",
            "[OK]".green().bold(),
            catalog.len(),
            catalog.categories().len()
        );
        return Ok(());
    }

    Err(CatalogError::Integrity {
        violations: violations.to_vec(),
    })
}

fn handle_export(catalog: &Catalog, category: Option<String>) -> Result<()> {
    let examples: Vec<&AnyExample> = match category.as_deref() {
        Some(c) => catalog.by_category(c),
        None => catalog.examples().iter().collect(),
    };
    println!("{}", serde_json::to_string_pretty(&examples)?);
    Ok(())
}
