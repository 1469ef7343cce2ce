use clap::{Parser, Subcommand};
use dsk_core::DskResult;
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(name = "dsk-cli")]
#[command(about = "dsk CLI - demo driver for the dsk data-structure crates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate integer postfix expressions
    Eval {
        /// Expressions, e.g. "1 2 - 3 4 + *"
        #[arg(required = true)]
        exprs: Vec<String>,
        /// Emit one JSON object per expression instead of plain values
        #[arg(long)]
        json: bool,
    },
    /// Sort integers with the randomized quicksort
    Sort {
        /// Values to sort
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
        /// Emit a JSON array instead of a space-separated line
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct EvalRow<'a> {
    expr: &'a str,
    value: i32,
}

fn main() -> DskResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Eval { exprs, json } => cmd_eval(&exprs, json),
        Commands::Sort { values, json } => cmd_sort(values, json),
    }
}

fn cmd_eval(exprs: &[String], json: bool) -> DskResult<()> {
    for expr in exprs {
        debug!(%expr, "evaluating postfix expression");
        let value = dsk_postfix::evaluate(expr)?;
        if json {
            let row = EvalRow { expr, value };
            println!(
                "{}",
                serde_json::to_string(&row).expect("row serializes to JSON")
            );
        } else {
            println!("{value}");
        }
    }
    Ok(())
}

fn cmd_sort(mut values: Vec<i64>, json: bool) -> DskResult<()> {
    debug!(count = values.len(), "sorting values");
    dsk_sort::quicksort(&mut values);
    if json {
        println!(
            "{}",
            serde_json::to_string(&values).expect("values serialize to JSON")
        );
    } else {
        let line: Vec<String> = values.iter().map(i64::to_string).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}
