#[macro_use]
extern crate log;

pub mod extender;
pub mod framework;
pub mod node;
pub mod ops;

pub use irload_data;

pub mod prelude {
    pub use crate::extender::{EXTENSION_OPSET, Extend, ExtenderRegister};
    pub use crate::framework::IrReader;
    pub use crate::node::{Attr, Node};
    pub use irload_data::prelude::*;
}

pub mod internal {
    pub use crate::extender::attr_to_list;
    pub use crate::prelude::*;
    pub use irload_data::internal::*;
}

/// An `IrReader` knowing about all the extenders of this crate.
pub fn ir_reader() -> framework::IrReader {
    framework::IrReader::default()
}

#[cfg(test)]
#[allow(dead_code)]
fn setup_test_logger() {
    let _ = env_logger::Builder::from_env("IRLOAD_LOG").try_init();
}
