pub mod po;
pub mod rst;
