//! gtrans 的公共工具：响应解析和通用错误

mod error;
pub mod helper;

pub use error::Error;
