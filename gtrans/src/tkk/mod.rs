//! tkk的获取和缓存
//!
//! tkk是翻译页面中内嵌的`tkk:'<tl>.<tr>'`，计算tk时需要用到。页面内容有一定的有效期，
//! 所以[`TkkCache`]会缓存tkk，过期后（默认10小时）再重新请求页面获取

mod error;
mod extract;
mod fetcher;

pub use error::Error;
pub use extract::extract_tkk;
pub use fetcher::{HttpPageFetcher, PageFetcher};

use crate::token::{self, Token};
use bon::bon;
use gtrans_common::helper::snippet;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;
use time::Duration;
use tracing::debug;
use url::Url;

/// tkk的默认有效期
pub const MAX_TKK_AGE: Duration = Duration::hours(10);

// region    --- tkk
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tkk {
    pub tl: i64,
    pub tr: i64,
}

impl Tkk {
    pub fn new(tl: i64, tr: i64) -> Self {
        Self { tl, tr }
    }
}

impl FromStr for Tkk {
    type Err = Error;

    /// 格式为`<int>.<int>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| Error::Extraction {
            reason: reason.to_owned(),
            snippet: snippet(s),
        };

        let (tl, tr) = s
            .split_once('.')
            .ok_or_else(|| invalid("tkk should be two integers joined by `.`"))?;
        let tl = tl.parse().map_err(|_| invalid("invalid tkk left part"))?;
        let tr = tr.parse().map_err(|_| invalid("invalid tkk right part"))?;
        Ok(Self { tl, tr })
    }
}

impl fmt::Display for Tkk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tl, self.tr)
    }
}

#[test]
fn parse_tkk_test() {
    let tkk: Tkk = "441153.2601734278".parse().unwrap();
    assert_eq!(tkk, Tkk::new(441153, 2601734278));
    assert_eq!(tkk.to_string(), "441153.2601734278");

    for s in ["", "441153", "441153.", ".2601734278", "1.2.3", "a.1", "99999999999999999999.1"] {
        assert!(s.parse::<Tkk>().is_err(), "{s} should be rejected");
    }
}
// endregion --- tkk

// region    --- cache
/// 缓存的tkk以及获取的时间
///
/// `fetched_at`使用单调时钟，系统时间被调整不会影响过期判断
#[derive(Clone, Copy, Debug)]
pub struct CachedTkk {
    pub value: Tkk,
    pub fetched_at: Instant,
}

impl CachedTkk {
    /// `now`早于`fetched_at`时视为过期
    pub fn is_fresh_at(&self, now: Instant, max_age: Duration) -> bool {
        now.checked_duration_since(self.fetched_at)
            .is_some_and(|age| max_age > age)
    }
}

#[test]
fn cached_tkk_fresh_test() {
    use std::time::Duration as StdDuration;

    let fetched_at = Instant::now();
    let cached = CachedTkk {
        value: Tkk::new(1, 2),
        fetched_at,
    };
    let hours = |h: u64| StdDuration::from_secs(h * 3600);

    assert!(cached.is_fresh_at(fetched_at, MAX_TKK_AGE));
    assert!(cached.is_fresh_at(fetched_at + hours(9), MAX_TKK_AGE));
    assert!(!cached.is_fresh_at(fetched_at + hours(10), MAX_TKK_AGE));
    assert!(!cached.is_fresh_at(fetched_at + hours(11), MAX_TKK_AGE));
    assert!(!cached.is_fresh_at(fetched_at, Duration::ZERO));
}

#[test]
fn cached_tkk_earlier_now_is_stale_test() {
    // 获取时间在`now`之后（时间倒退）不能当作有效缓存
    let now = Instant::now();
    let cached = CachedTkk {
        value: Tkk::new(1, 2),
        fetched_at: now + std::time::Duration::from_secs(30 * 24 * 3600),
    };
    assert!(!cached.is_fresh_at(now, MAX_TKK_AGE));
}

/// tkk缓存，可以在多个client之间共享
///
/// 缓存过期时并发调用`acquire`可能会重复请求页面，结果相同所以不做处理；缓存值整体替换，
/// 不会读到不完整的tkk
pub struct TkkCache {
    fetcher: Arc<dyn PageFetcher>,
    url: Url,
    max_age: Duration,
    cached: RwLock<Option<CachedTkk>>,
}

#[bon]
impl TkkCache {
    /// - `url`: 包含tkk的页面地址，一般为[`crate::config::base_url_from_env`]
    /// - `max_age`: 缓存有效期，默认为[`MAX_TKK_AGE`]
    #[builder]
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        url: Url,
        #[builder(default = MAX_TKK_AGE)] max_age: Duration,
    ) -> Self {
        Self {
            fetcher,
            url,
            max_age,
            cached: RwLock::new(None),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// 获取tkk，缓存有效时直接返回缓存值，否则重新请求页面
    pub async fn acquire(&self) -> Result<Tkk, Error> {
        if let Some(cached) = self.cached() {
            if cached.is_fresh_at(Instant::now(), self.max_age) {
                debug!(tkk = %cached.value, "use cached tkk");
                return Ok(cached.value);
            }
        }

        debug!(url = %self.url, "fetch tkk page");
        let content = self.fetcher.fetch(&self.url).await?;
        let tkk: Tkk = extract_tkk(&content)?.parse()?;

        let fresh = CachedTkk {
            value: tkk,
            fetched_at: Instant::now(),
        };
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = Some(fresh);
        debug!(tkk = %tkk, "tkk refreshed");

        Ok(tkk)
    }

    /// 当前缓存的值，不会发起请求，也不检查是否过期
    pub fn cached(&self) -> Option<CachedTkk> {
        *self.cached.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// 清除缓存，下一次`acquire`会重新请求页面
    pub fn invalidate(&self) {
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// 获取tkk并计算`text`的tk
    pub async fn token(&self, text: &str) -> Result<Token, Error> {
        let tkk = self.acquire().await?;
        let token = token::sign(&tkk, text)?;
        Ok(token)
    }
}
// endregion --- cache
