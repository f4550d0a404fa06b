//! Translation between serialized type names and `DatumType`.
//!
//! IR files name element types with short lower-case "destination type"
//! tokens (`f32`, `i64`, `boolean`...). User-facing options use either
//! framework names (`float`, `int64`) or upper-case precisions (`FP32`).
use crate::datum::DatumType;
use crate::IrResult;
use anyhow::format_err;
use itertools::Itertools;

/// (user-facing name, datum type). Several names may alias one type.
const SUPPORTED_DATA_TYPES: &[(&str, DatumType)] = &[
    ("float", DatumType::F32),
    ("half", DatumType::F16),
    ("FP32", DatumType::F32),
    ("FP64", DatumType::F64),
    ("FP16", DatumType::F16),
    ("I32", DatumType::I32),
    ("I64", DatumType::I64),
    ("int8", DatumType::I8),
    ("int32", DatumType::I32),
    ("int64", DatumType::I64),
    ("bool", DatumType::Bool),
    ("uint8", DatumType::U8),
    ("uint32", DatumType::U32),
    ("uint64", DatumType::U64),
    ("U1", DatumType::U1),
    ("int4", DatumType::I4),
    ("uint4", DatumType::U4),
    ("I4", DatumType::I4),
    ("U4", DatumType::U4),
];

impl DatumType {
    /// Token used for this type in serialized IR.
    pub fn destination_type(&self) -> &'static str {
        use DatumType::*;
        match self {
            Bool => "boolean",
            U1 => "u1",
            U4 => "u4",
            U8 => "u8",
            U32 => "u32",
            U64 => "u64",
            I4 => "i4",
            I8 => "i8",
            I32 => "i32",
            I64 => "i64",
            F16 => "f16",
            F32 => "f32",
            F64 => "f64",
        }
    }

    pub fn precision(&self) -> &'static str {
        use DatumType::*;
        match self {
            Bool => "BOOL",
            U1 => "U1",
            U4 => "U4",
            U8 => "U8",
            U32 => "U32",
            U64 => "U64",
            I4 => "I4",
            I8 => "I8",
            I32 => "I32",
            I64 => "I64",
            F16 => "FP16",
            F32 => "FP32",
            F64 => "FP64",
        }
    }
}

/// Resolve a destination type token found in a serialized IR.
///
/// Unknown tokens are an error: a node must never silently fall back to an
/// arbitrary type.
pub fn destination_type_to_datum_type(token: &str) -> IrResult<DatumType> {
    DatumType::ALL.iter().copied().find(|dt| dt.destination_type() == token).ok_or_else(|| {
        format_err!(
            "Destination type \"{}\" is not supported (expected one of {})",
            token,
            DatumType::ALL.iter().map(|dt| dt.destination_type()).join(", ")
        )
    })
}

pub fn precision_to_destination_type(precision: &str) -> IrResult<&'static str> {
    DatumType::ALL
        .iter()
        .find(|dt| dt.precision() == precision)
        .map(|dt| dt.destination_type())
        .ok_or_else(|| format_err!("Data type \"{}\" is not supported", precision))
}

pub fn data_type_str_to_datum_type(name: &str) -> IrResult<DatumType> {
    SUPPORTED_DATA_TYPES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, dt)| *dt)
        .ok_or_else(|| format_err!("Data type \"{}\" is not supported", name))
}
