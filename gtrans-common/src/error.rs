#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// 非2xx状态码，`message`为截断后的响应内容
    #[error("request api failed: {status}, message: {message}")]
    RequestAPIFailed { status: String, message: String },
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
