pub mod common;
pub mod domain;
pub mod function;
pub mod numerics;

pub use common::config::{
    Extrapolation, FunctionSettings, InterpolationOrder, SettingsError, load_function_settings,
};
pub use domain::{
    FunctionError, FunctionErrorKind, FunctionResult, Monotonicity, Point, XyErrLists,
};
pub use function::{TabulatedFunction, invert};
