//! Cell values and the named series produced by one aggregation pass.

use std::fmt;

/// One value in a series
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
}

/// One value per snapshot, in snapshot order
pub type Series = Vec<Cell>;

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Int(value as i64)
    }
}

impl fmt::Display for Cell {
    /// Numbers render the way the original JavaScript report did
    /// (`10`, `0.5`, `1e-7`, `1e+21`, `NaN`, `Infinity`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) if v.is_nan() => f.write_str("NaN"),
            Cell::Float(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0 prints as 0
            Cell::Float(v) if *v == 0.0 => f.write_str("0"),
            Cell::Float(v) if v.abs() < 1e-6 || v.abs() >= 1e21 => write_exponent(f, *v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// Exponent notation with an explicit sign on positive exponents (`1e+21`)
fn write_exponent(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let rendered = format!("{:e}", v);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&rendered),
    }
}

/// Named series from aggregating one dataset, in insertion order
///
/// Every series has one entry per snapshot of the source dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticBundle {
    series: Vec<(String, Series)>,
}

impl StatisticBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series, replacing any existing series of the same name in place
    pub fn insert(&mut self, name: impl Into<String>, values: Series) {
        let name = name.into();
        match self.series.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = values,
            None => self.series.push((name, values)),
        }
    }

    /// Add every series of `other` in its order; existing names are replaced in place
    pub fn extend(&mut self, other: StatisticBundle) {
        for (name, values) in other.series {
            self.insert(name, values);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.series.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl IntoIterator for StatisticBundle {
    type Item = (String, Series);
    type IntoIter = std::vec::IntoIter<(String, Series)>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Int(42).to_string(), "42");
        assert_eq!(Cell::Float(10.0).to_string(), "10");
        assert_eq!(Cell::Float(0.5).to_string(), "0.5");
        assert_eq!(Cell::Float(-0.0).to_string(), "0");
        assert_eq!(Cell::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Cell::Float(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Cell::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Cell::Float(0.000001).to_string(), "0.000001");
        assert_eq!(Cell::Float(1e-7).to_string(), "1e-7");
        assert_eq!(Cell::Float(-2.5e-8).to_string(), "-2.5e-8");
        assert_eq!(Cell::Float(1e20).to_string(), "100000000000000000000");
        assert_eq!(Cell::Float(1e21).to_string(), "1e+21");
        assert_eq!(Cell::Float(-1.5e22).to_string(), "-1.5e+22");
        assert_eq!(Cell::Text("09-01 08:05".into()).to_string(), "09-01 08:05");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut bundle = StatisticBundle::new();
        bundle.insert("a", vec![Cell::Int(1)]);
        bundle.insert("b", vec![Cell::Int(2)]);
        bundle.insert("a", vec![Cell::Int(3)]);

        assert_eq!(bundle.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(bundle.get("a"), Some(&vec![Cell::Int(3)]));
    }

    #[test]
    fn test_extend_replaces_existing_series() {
        let mut bundle = StatisticBundle::new();
        bundle.insert("total", vec![Cell::Int(1)]);
        bundle.insert("mining", vec![Cell::Int(0)]);

        let mut sampled = StatisticBundle::new();
        sampled.insert("v-0", vec![Cell::Float(5.0)]);
        sampled.insert("total", vec![Cell::Int(9)]);
        bundle.extend(sampled);

        assert_eq!(bundle.keys().collect::<Vec<_>>(), vec!["total", "mining", "v-0"]);
        assert_eq!(bundle.get("total"), Some(&vec![Cell::Int(9)]));
    }
}
