//! Plain-text table dumps: one `x y err` line per point.
//!
//! Values are written with `{:e}`, the shortest representation that parses
//! back to the same `f64`. Readers skip blank lines and `#` comments and
//! accept two (`x y`) or three (`x y err`) columns.

use super::TabulatedFunction;
use crate::common::config::FunctionSettings;
use crate::domain::{FunctionError, FunctionResult, Point};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const STDOUT_TARGET: &str = "<stdout>";
const READER_TARGET: &str = "<reader>";

pub(super) fn format_point(point: &Point) -> String {
    format!("{:e} {:e} {:e}", point.x, point.y, point.err)
}

impl TabulatedFunction {
    pub fn write_table<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for point in &self.points {
            writeln!(writer, "{}", format_point(point))?;
        }
        writer.flush()
    }

    /// Writes the dump layout to stdout.
    pub fn print(&self) -> FunctionResult<()> {
        let stdout = std::io::stdout();
        self.write_table(stdout.lock())
            .map_err(|source| FunctionError::io("print", STDOUT_TARGET, source))
    }

    pub fn dump(&self, path: impl AsRef<Path>) -> FunctionResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| FunctionError::io("dump", path, source))?;
        self.write_table(BufWriter::new(file))
            .map_err(|source| FunctionError::io("dump", path, source))?;
        tracing::debug!(path = %path.display(), points = self.points.len(), "dumped table");
        Ok(())
    }

    /// Parses a dump. Rows may come in any order; they go through the same
    /// sort and duplicate handling as `init_from_lists`.
    pub fn read_table<R: BufRead>(reader: R, settings: FunctionSettings) -> FunctionResult<Self> {
        parse_columns(reader, "read_table", Path::new(READER_TARGET))?.into_function(settings)
    }

    pub fn load(path: impl AsRef<Path>, settings: FunctionSettings) -> FunctionResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FunctionError::io("load", path, source))?;
        let columns = parse_columns(BufReader::new(file), "load", path)?;
        let rows = columns.x.len();
        let function = columns.into_function(settings)?;
        tracing::debug!(
            path = %path.display(),
            rows,
            points = function.points.len(),
            "loaded table"
        );
        Ok(function)
    }
}

#[derive(Default)]
struct Columns {
    x: Vec<f64>,
    y: Vec<f64>,
    err: Vec<f64>,
}

impl Columns {
    fn into_function(self, settings: FunctionSettings) -> FunctionResult<TabulatedFunction> {
        let err = Some(self.err.as_slice());
        TabulatedFunction::from_lists_with_settings(&self.x, &self.y, err, settings)
    }
}

fn parse_columns<R: BufRead>(
    reader: R,
    operation: &'static str,
    target: &Path,
) -> FunctionResult<Columns> {
    let mut columns = Columns::default();
    for (line_index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| FunctionError::io(operation, target, source))?;
        let line_number = line_index + 1;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let fields = content
            .split_whitespace()
            .map(|field| {
                field.parse::<f64>().map_err(|_| {
                    FunctionError::value(
                        operation,
                        format!("line {line_number}: '{field}' is not a number"),
                    )
                })
            })
            .collect::<FunctionResult<Vec<f64>>>()?;
        let (x, y, err) = match fields.as_slice() {
            [x, y] => (*x, *y, 0.0),
            [x, y, err] => (*x, *y, *err),
            _ => {
                return Err(FunctionError::value(
                    operation,
                    format!(
                        "line {line_number}: expected 2 or 3 columns, found {}",
                        fields.len()
                    ),
                ));
            }
        };
        columns.x.push(x);
        columns.y.push(y);
        columns.err.push(err);
    }
    Ok(columns)
}
