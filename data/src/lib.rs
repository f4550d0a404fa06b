pub mod convert;
mod datum;

pub type IrResult<T> = anyhow::Result<T>;
pub type IrError = anyhow::Error;

pub mod prelude {
    pub use crate::convert::{
        data_type_str_to_datum_type, destination_type_to_datum_type, precision_to_destination_type,
    };
    pub use crate::datum::DatumType;
    pub use crate::{IrError, IrResult};
}

pub mod internal {
    pub use crate::prelude::*;
    pub use anyhow::{Context as IrErrorContext, bail, ensure, format_err};
}

pub use anyhow;
