#![cfg(feature = "translate")]

#[path = "../mock_server/mod.rs"]
mod mock_server;

use gtrans::config::TRANSLATE_PATH;
use gtrans::tkk::{Error as TkkError, PageFetcher, TkkCache};
use gtrans::translate::*;
use mock_server::{MockServer, http_client, query_pairs};
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

#[derive(Deserialize, Debug, Default)]
pub struct TransConfig {
    pub base_url: Option<String>,
}

impl TransConfig {
    /// 配置文件不存在时使用默认配置
    pub fn get_conf() -> Self {
        match std::fs::read_to_string("tests/translate/config.toml") {
            Ok(file_str) => toml::from_str(&file_str).unwrap(),
            Err(_) => Self::default(),
        }
    }
}

fn get_trans_client() -> Client {
    let conf = TransConfig::get_conf();
    let base_url = gtrans::config::resolve_base_url(conf.base_url.as_deref());
    Client::builder().base_url(base_url).build()
}

struct FixedPage(&'static str);

#[async_trait::async_trait]
impl PageFetcher for FixedPage {
    async fn fetch(&self, _url: &Url) -> Result<String, TkkError> {
        Ok(self.0.to_owned())
    }
}

#[tokio::test]
async fn client_shares_tkk_cache() {
    let base_url = Url::parse("https://translate.example.com").unwrap();
    let cache = Arc::new(
        TkkCache::builder()
            .fetcher(Arc::new(FixedPage("tkk:'441156.1924457848'")))
            .url(base_url.clone())
            .build(),
    );
    let client = Client::builder()
        .base_url(base_url.clone())
        .tkk_cache(cache.clone())
        .build();
    let other = Client::builder()
        .base_url(base_url)
        .tkk_cache(cache.clone())
        .build();

    let token = client.token("这里是北京市中心").await.unwrap();
    assert_eq!(token.to_string(), "248966.358338");
    // 第二个client直接使用缓存
    assert_eq!(other.tkk().await.unwrap(), cache.cached().unwrap().value);
    assert!(Arc::ptr_eq(client.tkk_cache(), other.tkk_cache()));
}

#[tokio::test]
async fn token_error_from_bad_page() {
    let cache = Arc::new(
        TkkCache::builder()
            .fetcher(Arc::new(FixedPage("<html></html>")))
            .url(Url::parse("https://translate.example.com").unwrap())
            .build(),
    );
    let client = Client::builder().tkk_cache(cache).build();

    let res = client.token("hello").await;
    assert!(matches!(res, Err(Error::Tkk(TkkError::Extraction { .. }))));
}

const TRANSLATE_BODY: &str = r#"[[["你的好","your good",null,null,1]],null,"en"]"#;

fn query_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[tokio::test]
async fn translate_sends_query_without_token() {
    let server = MockServer::start(|path| match path {
        TRANSLATE_PATH => (200, TRANSLATE_BODY.to_owned()),
        _ => (404, "not found".to_owned()),
    })
    .await;
    // base_url中的路径会被替换为翻译接口路径
    let base_url = server.url.join("/mirror/").unwrap();
    let client = Client::builder()
        .base_url(base_url)
        .http_client(http_client())
        .build();

    let res = client
        .translate()
        .source_language("en")
        .target_language("zh-CN")
        .text("your good")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(res, "你的好");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("/translate_a/single?"));

    let pairs = query_pairs(&requests[0]);
    assert_eq!(query_value(&pairs, "sl"), Some("en"));
    assert_eq!(query_value(&pairs, "tl"), Some("zh-CN"));
    assert_eq!(query_value(&pairs, "dt"), Some("t"));
    assert_eq!(query_value(&pairs, "client"), Some("gtx"));
    assert_eq!(query_value(&pairs, "q"), Some("your good"));
    assert_eq!(query_value(&pairs, "tk"), None);
    assert_eq!(pairs.len(), 5);
}

#[tokio::test]
async fn translate_default_source_language_is_auto() {
    let server = MockServer::start(|_| (200, TRANSLATE_BODY.to_owned())).await;
    let client = Client::builder()
        .base_url(server.url.clone())
        .http_client(http_client())
        .build();

    client
        .translate()
        .target_language("zh-CN")
        .text("your good")
        .build()
        .send()
        .await
        .unwrap();

    let pairs = query_pairs(&server.requests()[0]);
    assert_eq!(query_value(&pairs, "sl"), Some("auto"));
}

#[tokio::test]
async fn translate_with_token_fetches_tkk_page() {
    let server = MockServer::start(|path| match path {
        "/" => (200, "<script>tkk:'441156.1924457848',exp</script>".to_owned()),
        TRANSLATE_PATH => (200, r#"[[["This is the center of Beijing","这里是北京市中心"]]]"#.to_owned()),
        _ => (404, "not found".to_owned()),
    })
    .await;
    let client = Client::builder()
        .base_url(server.url.clone())
        .http_client(http_client())
        .build();

    let res = client
        .translate()
        .source_language("zh-CN")
        .target_language("en")
        .text("这里是北京市中心")
        .with_token(true)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(res, "This is the center of Beijing");

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], "/");
    let pairs = query_pairs(&requests[1]);
    assert_eq!(query_value(&pairs, "tk"), Some("248966.358338"));
    assert_eq!(query_value(&pairs, "q"), Some("这里是北京市中心"));
}

#[tokio::test]
async fn translate_non_success_status_is_request_failed() {
    let server = MockServer::start(|_| (429, "Too Many Requests".to_owned())).await;
    let client = Client::builder()
        .base_url(server.url.clone())
        .http_client(http_client())
        .build();

    let res = client
        .translate()
        .target_language("en")
        .text("你好")
        .build()
        .send()
        .await;
    match res {
        Err(Error::RequestAPIFailed { status, message }) => {
            assert!(status.starts_with("429"), "status: {status}");
            assert_eq!(message, "Too Many Requests");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn translate_malformed_body() {
    let server = MockServer::start(|_| (200, "<html>sorry</html>".to_owned())).await;
    let client = Client::builder()
        .base_url(server.url.clone())
        .http_client(http_client())
        .build();

    let res = client
        .translate()
        .target_language("en")
        .text("你好")
        .build()
        .send()
        .await;
    assert!(matches!(res, Err(Error::MalformedResponse { .. })));
}

#[tokio::test]
#[ignore]
async fn translate_test() {
    let client = get_trans_client();
    let res = client
        .translate()
        .source_language("en")
        .target_language("zh-CN")
        .text("your good")
        .build()
        .send()
        .await;

    match res {
        Ok(s) => println!("[success] res: {}", s),
        Err(e) => println!("[error] {:#?}", e),
    }
}

#[tokio::test]
#[ignore]
async fn translate_with_token_test() {
    let client = get_trans_client();
    let res = client
        .translate()
        .source_language("zh-CN")
        .target_language("en")
        .text("Google翻译是结合了自然语言处理与人工智能，所以翻译结果相对令人满意。")
        .with_token(true)
        .build()
        .send()
        .await;

    match res {
        Ok(s) => println!("[success] res: {}", s),
        Err(e) => println!("[error] {:#?}", e),
    }
}
