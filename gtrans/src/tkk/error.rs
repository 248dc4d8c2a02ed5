#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// 获取tkk页面失败，由自定义的`PageFetcher`返回
    #[error("fetch tkk page failed: {0}")]
    Fetch(String),
    #[error("request api failed: {status}, message: {message}")]
    RequestAPIFailed { status: String, message: String },
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// 页面中找不到tkk，或者tkk格式不正确
    #[error("extract tkk failed: {reason}, content: {snippet}")]
    Extraction { reason: String, snippet: String },
    #[error("generate token failed: {0}")]
    Token(#[from] crate::token::Error),
}

impl From<gtrans_common::Error> for Error {
    fn from(e: gtrans_common::Error) -> Self {
        match e {
            gtrans_common::Error::RequestAPIFailed { status, message } => {
                Error::RequestAPIFailed { status, message }
            }
            gtrans_common::Error::Reqwest(e) => Error::Reqwest(e),
        }
    }
}
