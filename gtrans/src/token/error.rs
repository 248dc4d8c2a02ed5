#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// 文本中存在无法编码的码点
    #[error("invalid code point: {code:#x} in {text}")]
    InvalidCodePoint { code: u32, text: String },
}
