use super::CliError;
use std::path::PathBuf;
use tabfunc_core::{
    Extrapolation, FunctionSettings, InterpolationOrder, TabulatedFunction, load_function_settings,
};

#[derive(clap::Args)]
pub(super) struct TableArgs {
    /// Table dump: one `x y [err]` row per line, `#` starts a comment
    #[arg(value_name = "TABLE")]
    pub(super) table: PathBuf,

    /// JSON function settings (`stepEps`, `order`, `extrapolation`)
    #[arg(long)]
    pub(super) settings: Option<PathBuf>,

    /// Interpolation order, overrides the settings file
    #[arg(long, value_enum)]
    pub(super) order: Option<OrderArg>,

    /// Behavior outside [min_x, max_x], overrides the settings file
    #[arg(long, value_enum)]
    pub(super) extrapolate: Option<ExtrapolateArg>,

    /// Relative tolerance for uniform-step detection
    #[arg(long, allow_negative_numbers = true)]
    pub(super) step_eps: Option<f64>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub(super) enum OrderArg {
    Linear,
    Cubic,
}

impl From<OrderArg> for InterpolationOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Linear => Self::Linear,
            OrderArg::Cubic => Self::Cubic,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub(super) enum ExtrapolateArg {
    Forbid,
    Linear,
}

impl From<ExtrapolateArg> for Extrapolation {
    fn from(value: ExtrapolateArg) -> Self {
        match value {
            ExtrapolateArg::Forbid => Self::Forbid,
            ExtrapolateArg::Linear => Self::Linear,
        }
    }
}

pub(super) fn resolve_settings(args: &TableArgs) -> Result<FunctionSettings, CliError> {
    let mut settings = match &args.settings {
        Some(path) => load_function_settings(path)?,
        None => FunctionSettings::default(),
    };
    if let Some(order) = args.order {
        settings.order = order.into();
    }
    if let Some(extrapolate) = args.extrapolate {
        settings.extrapolation = extrapolate.into();
    }
    if let Some(step_eps) = args.step_eps {
        settings.step_eps = step_eps;
    }
    settings.validate()?;
    Ok(settings)
}

pub(super) fn load_table(args: &TableArgs) -> Result<TabulatedFunction, CliError> {
    let settings = resolve_settings(args)?;
    let function = TabulatedFunction::load(&args.table, settings)?;
    tracing::info!(
        table = %args.table.display(),
        points = function.size(),
        order = settings.order.as_str(),
        "loaded table"
    );
    Ok(function)
}

/// Shortest decimal that parses back to the same value.
pub(super) fn format_value(value: f64) -> String {
    format!("{value}")
}
