//! Point table with `x` / `f(x)` headers.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::interpolation::point::Point;

#[derive(Debug, Tabled)]
struct PointRow {
    #[tabled(rename = "x")]
    x: String,
    #[tabled(rename = "f(x)")]
    fx: String,
}

pub fn points_table<'a, I>(points: I) -> String
where
    I: IntoIterator<Item = &'a Point>,
{
    let rows: Vec<PointRow> = points
        .into_iter()
        .map(|p| PointRow { x: p.x.to_string(), fx: p.y.to_string() })
        .collect();

    Table::new(rows).with(Style::psql()).to_string()
}
