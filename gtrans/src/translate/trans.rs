use super::Client;
use super::Error;
use super::types_rs::*;
use super::utils::parse_translation;
use crate::config::TRANSLATE_PATH;
use crate::tkk::Tkk;
use crate::token::Token;
use gtrans_common::helper::parse_text_response;
use tracing::debug;

impl Client {
    /// 翻译文本
    ///
    /// 注意：默认不携带`tk`参数，需要时使用`with_token(true)`
    pub fn translate(&self) -> TranslateBuilder<'_> {
        Translate::builder(self)
    }

    /// 获取当前有效的tkk，过期时会重新请求页面
    pub async fn tkk(&self) -> Result<Tkk, Error> {
        let tkk = self.tkk_cache.acquire().await?;
        Ok(tkk)
    }

    /// 计算`text`的tk
    pub async fn token(&self, text: &str) -> Result<Token, Error> {
        let token = self.tkk_cache.token(text).await?;
        Ok(token)
    }
}

impl Translate<'_> {
    pub async fn send(&self) -> Result<String, Error> {
        let client = self.client;

        let mut url_ = client.base_url.clone();
        url_.set_path(TRANSLATE_PATH);

        let mut req = client.http_client.get(url_).query(self);
        if self.with_token {
            let token = client.token(self.text).await?;
            req = req.query(&[("tk", token.to_string())]);
        }
        debug!(
            chars = self.text.chars().count(),
            with_token = self.with_token,
            "send translate request"
        );

        let resp = req.send().await?;
        let body = parse_text_response(resp).await?;
        parse_translation(&body)
    }
}
