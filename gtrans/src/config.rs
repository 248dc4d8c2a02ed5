//! 服务地址配置
//!
//! 默认请求`https://translate.google.com`，可以通过环境变量`GOOGLE_TRANSLATE_URL`替换为镜像地址，
//! 例如`GOOGLE_TRANSLATE_URL=translate.google.cn`

use tracing::warn;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://translate.google.com";
pub const TRANSLATE_PATH: &str = "/translate_a/single";
pub const URL_ENV_NAME: &str = "GOOGLE_TRANSLATE_URL";

/// 解析服务地址
///
/// - `None`或空字符串使用默认地址
/// - 没有scheme时自动加上`https://`
/// - 最终必须是带host的https地址，否则使用默认地址
pub fn resolve_base_url(override_url: Option<&str>) -> Url {
    let default_url = || Url::parse(DEFAULT_BASE_URL).unwrap();

    let Some(raw) = override_url.map(str::trim).filter(|s| !s.is_empty()) else {
        return default_url();
    };

    let with_scheme = if raw.contains("://") {
        raw.to_owned()
    } else {
        format!("https://{raw}")
    };

    match Url::parse(&with_scheme) {
        Ok(u) if u.scheme() == "https" && u.has_host() => u,
        Ok(u) => {
            warn!(url = %u, "base url must be https with a host, fallback to default");
            default_url()
        }
        Err(e) => {
            warn!(url = raw, error = %e, "invalid base url, fallback to default");
            default_url()
        }
    }
}

/// 读取环境变量`GOOGLE_TRANSLATE_URL`并解析
pub fn base_url_from_env() -> Url {
    let env_url = std::env::var(URL_ENV_NAME).ok();
    resolve_base_url(env_url.as_deref())
}

#[test]
fn resolve_base_url_test() {
    let cases = [
        (None, "https://translate.google.com/"),
        (Some(""), "https://translate.google.com/"),
        (Some("   "), "https://translate.google.com/"),
        (Some("translate.google.cn"), "https://translate.google.cn/"),
        (Some("https://translate.google.cn"), "https://translate.google.cn/"),
        (Some("example.com:8443/mirror"), "https://example.com:8443/mirror"),
        (Some("http://translate.google.cn"), "https://translate.google.com/"),
        (Some("ftp://translate.google.cn"), "https://translate.google.com/"),
        (Some("bad host name"), "https://translate.google.com/"),
    ];
    for (input, expect) in cases {
        assert_eq!(resolve_base_url(input).as_str(), expect, "input: {:?}", input);
    }
}
