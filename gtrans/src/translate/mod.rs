//! 网页版文本翻译
//!
//! # Example
//! ```no_run
//! # async fn run() -> Result<(), gtrans::translate::Error> {
//! let client = gtrans::translate::Client::builder().build();
//! let translated = client
//!     .translate()
//!     .source_language("en")
//!     .target_language("zh-CN")
//!     .text("your good")
//!     .build()
//!     .send()
//!     .await?;
//! println!("{translated}");
//! # Ok(())
//! # }
//! ```

use crate::config::base_url_from_env;
use crate::tkk::{HttpPageFetcher, TkkCache};
use bon::bon;
use std::sync::Arc;
use url::Url;

mod error;
pub use error::Error;

mod trans;
mod types_rs;
mod utils;
pub use types_rs::*;

pub struct Client {
    http_client: reqwest::Client,
    base_url: Url,
    tkk_cache: Arc<TkkCache>,
}

#[bon]
impl Client {
    /// - `base_url`: 服务地址，不传时读取环境变量，见[`crate::config`]
    /// - `tkk_cache`: 多个client之间共享tkk缓存时传入，不传时使用`base_url`新建
    #[builder]
    pub fn new(
        base_url: Option<Url>,
        tkk_cache: Option<Arc<TkkCache>>,
        http_client: Option<reqwest::Client>,
    ) -> Self {
        let http_client = http_client.unwrap_or_default();
        let base_url = base_url.unwrap_or_else(base_url_from_env);
        let tkk_cache = tkk_cache.unwrap_or_else(|| {
            let fetcher = Arc::new(HttpPageFetcher::new(http_client.clone()));
            Arc::new(
                TkkCache::builder()
                    .fetcher(fetcher)
                    .url(base_url.clone())
                    .build(),
            )
        });

        Self {
            http_client,
            base_url,
            tkk_cache,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn tkk_cache(&self) -> &Arc<TkkCache> {
        &self.tkk_cache
    }
}
