use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

pub type AttrMap = HashMap<String, AttrValue>;

#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Float(f64),
    Ints(Vec<i64>),
    Floats(Vec<f64>),
}

impl AttrValue {
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(x) => Some(*x),
            AttrValue::Int(x) => Some(*x as f64),
            _ => None,
        }
    }

    pub fn as_floats(&self) -> Option<Vec<f64>> {
        match self {
            AttrValue::Float(x) => Some(vec![*x]),
            AttrValue::Int(x) => Some(vec![*x as f64]),
            AttrValue::Floats(x) => Some(x.clone()),
            AttrValue::Ints(x) => Some(x.iter().map(|&x| x as f64).collect()),
            AttrValue::Str(_) => None,
        }
    }

    pub fn as_ints(&self) -> Option<Vec<i64>> {
        match self {
            AttrValue::Int(x) => Some(vec![*x]),
            AttrValue::Ints(x) => Some(x.clone()),
            _ => None,
        }
    }

    // Integer counts are annotated either natively or as decimal strings
    pub fn parse_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(x) => Some(*x),
            AttrValue::Str(x) => x.trim().parse().ok(),
            _ => None,
        }
    }
}

impl Display for AttrValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::Str(x) => write!(f, "{}", x),
            AttrValue::Int(x) => write!(f, "{}", x),
            AttrValue::Float(x) => write!(f, "{}", x),
            AttrValue::Ints(x) => write!(f, "{}", x.iter().join(",")),
            AttrValue::Floats(x) => write!(f, "{}", x.iter().join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_accessors() {
        assert_eq!(AttrValue::Float(1.5).as_float(), Some(1.5));
        assert_eq!(AttrValue::Int(2).as_float(), Some(2.0));
        assert_eq!(AttrValue::Str("1.5".into()).as_float(), None);
        assert_eq!(AttrValue::Floats(vec![1.5]).as_float(), None);
    }

    #[test]
    fn vector_accessors() {
        assert_eq!(AttrValue::Float(1.5).as_floats(), Some(vec![1.5]));
        assert_eq!(AttrValue::Int(2).as_floats(), Some(vec![2.0]));
        assert_eq!(AttrValue::Floats(vec![1.0, 2.0]).as_floats(), Some(vec![1.0, 2.0]));
        assert_eq!(AttrValue::Ints(vec![1, 2]).as_floats(), Some(vec![1.0, 2.0]));
        assert_eq!(AttrValue::Str("1,2".into()).as_floats(), None);

        assert_eq!(AttrValue::Int(2).as_ints(), Some(vec![2]));
        assert_eq!(AttrValue::Ints(vec![30, 10]).as_ints(), Some(vec![30, 10]));
        assert_eq!(AttrValue::Float(2.0).as_ints(), None);
    }

    #[test]
    fn parse_int() {
        for (value, expected) in [
            (AttrValue::Int(20), Some(20)),
            (AttrValue::Str("20".into()), Some(20)),
            (AttrValue::Str(" 13 ".into()), Some(13)),
            (AttrValue::Str("-4".into()), Some(-4)),
            (AttrValue::Str("abc".into()), None),
            (AttrValue::Str("20.5".into()), None),
            (AttrValue::Str("".into()), None),
            (AttrValue::Float(20.0), None),
            (AttrValue::Ints(vec![20]), None),
        ] {
            assert_eq!(value.parse_int(), expected, "{}", value);
        }
    }

    #[test]
    fn display() {
        assert_eq!(AttrValue::Str("x".into()).to_string(), "x");
        assert_eq!(AttrValue::Int(-3).to_string(), "-3");
        assert_eq!(AttrValue::Float(0.25).to_string(), "0.25");
        assert_eq!(AttrValue::Ints(vec![1, 2, 3]).to_string(), "1,2,3");
        assert_eq!(AttrValue::Floats(vec![0.5, 1.5]).to_string(), "0.5,1.5");
    }
}
