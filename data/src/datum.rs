//! `DatumType` is the native numeric type descriptor attached to IR nodes.
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum DatumType {
    Bool,
    U1,
    U4,
    U8,
    U32,
    U64,
    I4,
    I8,
    I32,
    I64,
    F16,
    F32,
    F64,
}

impl DatumType {
    pub const ALL: [DatumType; 13] = [
        DatumType::Bool,
        DatumType::U1,
        DatumType::U4,
        DatumType::U8,
        DatumType::U32,
        DatumType::U64,
        DatumType::I4,
        DatumType::I8,
        DatumType::I32,
        DatumType::I64,
        DatumType::F16,
        DatumType::F32,
        DatumType::F64,
    ];
}

impl fmt::Display for DatumType {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{:?}", self)
    }
}

/// Parses destination type tokens, with the same rules as
/// `destination_type_to_datum_type`.
impl std::str::FromStr for DatumType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::convert::destination_type_to_datum_type(s)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn parse_datum_type() {
        assert_eq!("i32".parse::<DatumType>().unwrap(), DatumType::I32);
        assert_eq!("boolean".parse::<DatumType>().unwrap(), DatumType::Bool);
        assert!("q8".parse::<DatumType>().is_err());
    }

    #[test]
    fn parse_agrees_with_destination_table() {
        for token in ["I32", "bool", "Bool", "F64", "f64", "u4", "tdim"] {
            assert_eq!(
                token.parse::<DatumType>().ok(),
                destination_type_to_datum_type(token).ok(),
                "{}",
                token
            );
        }
        assert!("I32".parse::<DatumType>().is_err());
        assert!("bool".parse::<DatumType>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(DatumType::F16.to_string(), "F16");
    }
}
