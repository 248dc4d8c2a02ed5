use crate::translate::Error;
use gtrans_common::helper::snippet;
use serde_json::Value;

/// 解析翻译接口返回的json数组
///
/// 格式为`[[["译文片段", "原文片段", ...], ...], ...]`，按顺序拼接每个片段的第一个元素
pub(crate) fn parse_translation(body: &str) -> Result<String, Error> {
    let malformed = |message: String| Error::MalformedResponse {
        message,
        snippet: snippet(body),
    };

    let value: Value =
        serde_json::from_str(body).map_err(|e| malformed(format!("invalid json: {}", e)))?;
    let Some(items) = value.as_array() else {
        return Err(malformed("response is not a json array".to_owned()));
    };
    let Some(first) = items.first() else {
        return Err(malformed("response array is empty".to_owned()));
    };

    // 第一个元素不是数组时没有译文，返回空字符串
    let translated = first
        .as_array()
        .map(|segments| {
            segments
                .iter()
                .filter_map(|seg| seg.as_array()?.first()?.as_str())
                .collect::<String>()
        })
        .unwrap_or_default();

    Ok(translated)
}

#[test]
fn parse_translation_test() {
    let body = r#"[[["你的好","your good",null,null,1]],null,"en",null,null,null,null,[]]"#;
    assert_eq!(parse_translation(body).unwrap(), "你的好");

    let body = r#"[[["Hello. ","你好。",null,null,3],["World",  "世界",null,null,3],[null,null,"Nǐ hǎo"]],null,"zh-CN"]"#;
    assert_eq!(parse_translation(body).unwrap(), "Hello. World");

    assert_eq!(parse_translation(r#"[null,"en"]"#).unwrap(), "");
    assert_eq!(parse_translation(r#"[[[], [1, "x"]]]"#).unwrap(), "");
}

#[test]
fn parse_malformed_translation_test() {
    for body in ["", "<html></html>", "{}", "[]", r#""text""#] {
        assert!(
            matches!(parse_translation(body), Err(Error::MalformedResponse { .. })),
            "{body} should be malformed"
        );
    }
}
