use super::Error;
use gtrans_common::helper::parse_text_response;
use url::Url;

/// 获取包含tkk的页面内容
///
/// 默认使用[`HttpPageFetcher`]，测试或者需要自定义请求（代理、请求头等）时可以自行实现
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, Error>;
}

pub struct HttpPageFetcher {
    http_client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, Error> {
        let resp = self.http_client.get(url.clone()).send().await?;
        let text = parse_text_response(resp).await?;
        Ok(text)
    }
}
