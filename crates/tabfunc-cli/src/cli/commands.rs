use super::CliError;
use super::helpers::{TableArgs, format_value, load_table};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tabfunc_core::{TabulatedFunction, invert};

#[derive(clap::Args)]
pub(super) struct InfoArgs {
    #[command(flatten)]
    input: TableArgs,
}

#[derive(clap::Args)]
pub(super) struct EvalArgs {
    #[command(flatten)]
    input: TableArgs,

    /// Abscissa to evaluate at
    #[arg(value_name = "X", allow_negative_numbers = true)]
    x: f64,

    /// Print the interpolated derivative dy/dx instead of y
    #[arg(long, conflicts_with = "err")]
    derivative: bool,

    /// Print the error channel taken from the bracketing interval
    #[arg(long)]
    err: bool,
}

#[derive(clap::Args)]
pub(super) struct SolveArgs {
    #[command(flatten)]
    input: TableArgs,

    /// Ordinate to solve for
    #[arg(value_name = "Y", allow_negative_numbers = true)]
    y: f64,

    /// Print the error channel at the solution instead of x
    #[arg(long)]
    err: bool,
}

#[derive(clap::Args)]
pub(super) struct TransformArgs {
    #[command(flatten)]
    input: TableArgs,

    /// Write the resulting table here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct ExportArgs {
    #[command(flatten)]
    input: TableArgs,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
}

pub(super) fn run_info_command(args: InfoArgs) -> Result<i32, CliError> {
    let function = load_table(&args.input)?;
    println!("Points: {}", function.size());
    if function.is_empty() {
        return Ok(0);
    }

    println!(
        "X range: [{}, {}]",
        format_value(function.min_x()?),
        format_value(function.max_x()?)
    );
    println!(
        "Y range: [{}, {}]",
        format_value(function.min_y()?),
        format_value(function.max_y()?)
    );
    match function.step() {
        Some(step) => println!("Const step: yes ({})", format_value(step)),
        None => println!("Const step: no"),
    }
    println!("Monotonicity: {}", function.monotonicity());
    match function.integral() {
        Ok(integral) => println!("Integral: {}", format_value(integral)),
        Err(error) => println!("Integral: unavailable ({error})"),
    }
    Ok(0)
}

pub(super) fn run_eval_command(args: EvalArgs) -> Result<i32, CliError> {
    let function = load_table(&args.input)?;
    let value = if args.derivative {
        function.get_yp(args.x)?
    } else if args.err {
        function.err_at(args.x)?
    } else {
        function.get_y(args.x)?
    };
    println!("{}", format_value(value));
    Ok(0)
}

pub(super) fn run_solve_command(args: SolveArgs) -> Result<i32, CliError> {
    let function = load_table(&args.input)?;
    let value = if args.err {
        function.get_y_err(args.y)?
    } else {
        function.get_x(args.y)?
    };
    println!("{}", format_value(value));
    Ok(0)
}

pub(super) fn run_invert_command(args: TransformArgs) -> Result<i32, CliError> {
    let function = load_table(&args.input)?;
    let inverse = invert(&function)?;
    emit_table(&inverse, args.output.as_deref())?;
    Ok(0)
}

pub(super) fn run_normalize_command(args: TransformArgs) -> Result<i32, CliError> {
    let mut function = load_table(&args.input)?;
    let integral = function.normalize()?;
    tracing::info!(integral, "normalized table");
    emit_table(&function, args.output.as_deref())?;
    Ok(0)
}

pub(super) fn run_export_command(args: ExportArgs) -> Result<i32, CliError> {
    let function = load_table(&args.input)?;
    let lists = function.xy_err_lists();
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&lists)
    } else {
        serde_json::to_string(&lists)
    }
    .with_context(|| format!("failed to serialize '{}'", args.input.table.display()))?;
    println!("{rendered}");
    Ok(0)
}

fn emit_table(function: &TabulatedFunction, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            function.dump(path)?;
            println!("Wrote {} points to '{}'", function.size(), path.display());
        }
        None => function.print()?,
    }
    Ok(())
}
