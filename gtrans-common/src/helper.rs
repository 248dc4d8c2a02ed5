use crate::Error;

/// 错误信息中携带的响应内容最多保留的字符数
pub const SNIPPET_MAX_CHARS: usize = 200;

/// 截取一段内容用于错误诊断，超出`SNIPPET_MAX_CHARS`的部分用`...`代替
///
/// 按字符截取，不会切断多字节字符
pub fn snippet(content: &str) -> String {
    match content.char_indices().nth(SNIPPET_MAX_CHARS) {
        Some((idx, _)) => format!("{}...", &content[..idx]),
        None => content.to_owned(),
    }
}

#[test]
fn snippet_test() {
    assert_eq!(snippet("tkk:'1.2'"), "tkk:'1.2'");

    let long = "翻".repeat(SNIPPET_MAX_CHARS + 10);
    let s = snippet(&long);
    assert!(s.ends_with("..."));
    assert_eq!(s.chars().count(), SNIPPET_MAX_CHARS + 3);
}

pub async fn into_request_failed_error(resp: reqwest::Response) -> Error {
    let status = resp.status();
    let body = resp.text().await;
    match body {
        Ok(message) => Error::RequestAPIFailed {
            status: status.to_string(),
            message: snippet(&message),
        },
        Err(e) => Error::Reqwest(e),
    }
}

/// 读取响应文本，状态码不是2xx时返回`RequestAPIFailed`
pub async fn parse_text_response(resp: reqwest::Response) -> Result<String, Error> {
    if !resp.status().is_success() {
        return Err(into_request_failed_error(resp).await);
    }

    let text = resp.text().await?;
    Ok(text)
}
