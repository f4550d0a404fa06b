use crate::extender::ExtenderRegister;

mod bucketize;

pub use bucketize::bucketize;

pub fn register_all_ops(reg: &mut ExtenderRegister) {
    reg.insert("Bucketize", bucketize);
}
