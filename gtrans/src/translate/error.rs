#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("request api failed: {status}, message: {message}")]
    RequestAPIFailed { status: String, message: String },
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// 响应不是json数组或者数组为空
    #[error("malformed translate response: {message}, content: {snippet}")]
    MalformedResponse { message: String, snippet: String },
    #[error("tkk error: {0}")]
    Tkk(#[from] crate::tkk::Error),
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
