use super::Error;
use gtrans_common::helper::snippet;
use regex::Regex;
use std::sync::LazyLock;

static TKK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tkk:\s*'(\d+\.\d+)'").unwrap());

/// 从页面内容中找到第一个`tkk:'<数字>.<数字>'`，返回引号内的部分
pub fn extract_tkk(content: &str) -> Result<&str, Error> {
    TKK_REGEX
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Extraction {
            reason: "cannot find tkk".to_owned(),
            snippet: snippet(content),
        })
}

#[test]
fn extract_tkk_test() {
    let cases = [
        ("tkk: '32324.1323223'", "32324.1323223"),
        ("tkk:'441153.2601734278'", "441153.2601734278"),
        ("tkk:'441153.2601734278',exp", "441153.2601734278"),
        ("1h\",tkk:'441153.2601734278',exp", "441153.2601734278"),
    ];
    for (input, expect) in cases {
        assert_eq!(extract_tkk(input).unwrap(), expect);
    }
}

#[test]
fn extract_tkk_missing_test() {
    for input in ["", "<html>no secret here</html>", "tkk:'441153'", "TKK:'1.2'"] {
        assert!(matches!(
            extract_tkk(input),
            Err(Error::Extraction { .. })
        ));
    }
}
