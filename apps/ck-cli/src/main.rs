use ck_app::{
    AppResult, Session, Spacing, SweepRequest, calculate, convert, dimension, dimensions,
    list_formulas, load_config, parse_assignments, resolve_formula, run_sweep, sweep_csv,
    write_export,
};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};

mod repl;

#[derive(Parser)]
#[command(name = "chemkit")]
#[command(about = "chemkit - engineering formula calculator", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "CHEMKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Log evaluation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available formulas
    List {
        /// Only formulas whose name or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show a formula's parameters and defaults
    Show {
        /// Formula name (e.g. "Reynolds Number" or reynolds-number)
        formula: String,
    },
    /// Evaluate a formula
    Calc {
        formula: String,
        /// Parameter overrides as KEY=VALUE; unset keys take their defaults
        assignments: Vec<String>,
    },
    /// Evaluate a formula across a range of one parameter, as CSV
    Sweep {
        formula: String,
        /// Parameter to vary
        #[arg(long)]
        vary: String,
        #[arg(long, allow_negative_numbers = true)]
        start: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        end: Option<f64>,
        /// Number of samples
        #[arg(long)]
        steps: Option<usize>,
        /// Logarithmic spacing (positive bounds only)
        #[arg(long)]
        log: bool,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Constant parameter overrides as KEY=VALUE
        assignments: Vec<String>,
    },
    /// Convert a value between units of one dimension
    Convert {
        /// Dimension, e.g. Temperature or "Flow Rate"
        dimension: String,
        from: String,
        to: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// List unit dimensions, or the units of one dimension
    Units { dimension: Option<String> },
    /// Interactive session with history and templates
    Session,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // stdout carries results (and CSV); diagnostics go to stderr
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;
    let mut session = Session::new(config);

    match cli.command {
        Commands::List { search } => cmd_list(search.as_deref()),
        Commands::Show { formula } => cmd_show(&formula),
        Commands::Calc {
            formula,
            assignments,
        } => cmd_calc(&mut session, &formula, &assignments),
        Commands::Sweep {
            formula,
            vary,
            start,
            end,
            steps,
            log,
            output,
            assignments,
        } => {
            let request = SweepRequest {
                formula,
                vary,
                start,
                end,
                steps,
                spacing: if log {
                    Spacing::Logarithmic
                } else {
                    Spacing::Linear
                },
                overrides: parse_assignments(&assignments)?,
            };
            cmd_sweep(&session, &request, output.as_deref())
        }
        Commands::Convert {
            dimension,
            from,
            to,
            value,
        } => cmd_convert(&session, &dimension, &from, &to, value),
        Commands::Units { dimension } => cmd_units(dimension.as_deref()),
        Commands::Session => {
            let stdin = io::stdin();
            repl::run(&mut session, stdin.lock(), &mut io::stdout())
        }
    }
}

fn cmd_list(search: Option<&str>) -> AppResult<()> {
    let formulas = list_formulas(search);
    if formulas.is_empty() {
        println!("No formulas match");
    } else {
        for formula in formulas {
            println!("  {:<20} {}", formula.name(), formula.description());
        }
    }
    Ok(())
}

fn cmd_show(name: &str) -> AppResult<()> {
    let formula = resolve_formula(name)?;
    println!("{}", formula.name());
    println!("  {}", formula.description());
    println!("  {}", formula.formula_text());
    println!("Parameters:");
    for param in formula.params() {
        println!(
            "  {:<5} {:<28} default {}",
            param.key,
            param.axis_label(),
            param.default
        );
    }
    println!("Result: {}", formula.result_axis_label());
    Ok(())
}

fn cmd_calc(session: &mut Session, formula: &str, assignments: &[String]) -> AppResult<()> {
    let overrides = parse_assignments(assignments)?;
    let calc = calculate(session, formula, &overrides)?;
    println!("{}", calc.display(session.config().precision));
    if let Some(regime) = calc.regime {
        println!("Flow regime: {regime}");
    }
    Ok(())
}

fn cmd_sweep(session: &Session, request: &SweepRequest, output: Option<&Path>) -> AppResult<()> {
    let result = run_sweep(session, request)?;
    let csv = sweep_csv(&result);

    if let Some(path) = output {
        write_export(path, &csv)?;
        println!(
            "✓ Exported {} points ({} undefined) to {}",
            result.len(),
            result.num_undefined(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_convert(session: &Session, dimension: &str, from: &str, to: &str, value: f64) -> AppResult<()> {
    let result = convert(dimension, from, to, value)?;
    println!(
        "{} {} = {} {}",
        session.format_value(value),
        from,
        session.format_value(result),
        to
    );
    Ok(())
}

fn cmd_units(name: Option<&str>) -> AppResult<()> {
    let Some(name) = name else {
        for dim in dimensions() {
            println!("  {dim}");
        }
        return Ok(());
    };

    let dim = dimension(name)?;
    println!("{} (base unit: {})", dim.name(), dim.base());
    for unit in dim.units() {
        if unit.aliases.is_empty() {
            println!("  {:<8} {}", unit.symbol, unit.name);
        } else {
            println!(
                "  {:<8} {} (also: {})",
                unit.symbol,
                unit.name,
                unit.aliases.join(", ")
            );
        }
    }
    Ok(())
}
