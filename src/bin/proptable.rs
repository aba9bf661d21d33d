//! Reads one formula (from the arguments, or a line from the standard input), then prints
//! its truth table followed by its syntax tree.

use clap::Parser;
use proptable::{Formula, FormulaError, TableOptions, TruthTable};
use std::convert::TryFrom;
use std::error::Error;
use std::io::{BufRead, Write};
use tracing::{debug, Level};
use tracing_subscriber::fmt;

#[derive(Parser, Debug)]
#[command(name = "proptable")]
#[command(version, about = "Print the truth table and syntax tree of a formula", long_about = None)]
struct Args {
    /// The formula, e.g. `a & ~b > c`. Read from the standard input when missing.
    formula: Vec<String>,

    /// Refuse to build tables for formulas with more variables than this.
    #[arg(short, long, default_value_t = TableOptions::DEFAULT_MAX_VARIABLES)]
    max_variables: u16,

    /// Only print the truth table.
    #[arg(long)]
    no_tree: bool,

    /// Print debug logs to the standard error.
    #[arg(long)]
    debug: bool,
}

fn setup_tracing(lvl: Level) {
    let format = fmt::format()
        .with_level(true)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .without_time()
        .compact();

    tracing_subscriber::fmt()
        .with_max_level(lvl)
        .with_writer(std::io::stderr)
        .event_format(format)
        .init();
}

/// Read the formula line after a prompt. The trailing line break is not part of the formula.
fn read_formula() -> Result<String, std::io::Error> {
    print!("Input the Boolean Expression: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn run(source: &str, options: &TableOptions, print_tree: bool) -> Result<(), Box<dyn Error>> {
    let formula = Formula::try_from(source)?;
    let table = TruthTable::new(&formula, options)?;
    debug!(
        rows = table.num_rows(),
        satisfied = table.count_true(),
        "Truth table ready."
    );

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    table.write_table(&mut output, source)?;
    if print_tree {
        writeln!(output)?;
        formula.write_tree(&mut output)?;
        writeln!(output)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_tracing(if args.debug { Level::TRACE } else { Level::WARN });

    let source = if args.formula.is_empty() {
        match read_formula() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Cannot read formula: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        args.formula.join(" ")
    };
    debug!(formula = %source, "Formula read.");

    let options = TableOptions::new(args.max_variables);
    if let Err(e) = run(&source, &options, !args.no_tree) {
        if let Some(FormulaError::TooManyVariables { .. }) = e.downcast_ref::<FormulaError>() {
            eprintln!("{} Use --max-variables to raise the limit.", e);
        } else {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}
