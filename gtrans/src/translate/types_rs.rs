use crate::translate::Client;
use bon::Builder;
use serde::Serialize;

// region    --- translate
/// 序列化后即为请求的query参数
#[derive(Builder, Serialize)]
pub struct Translate<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    /// 源语言，默认为`auto`自动检测
    #[builder(default = "auto")]
    #[serde(rename = "sl")]
    source_language: &'a str,
    /// 目标语言，例如`zh-CN`、`en`
    #[serde(rename = "tl")]
    target_language: &'a str,
    #[builder(skip = "t")]
    dt: &'a str,
    #[builder(skip = "gtx")]
    #[serde(rename = "client")]
    client_name: &'a str,
    #[serde(rename = "q")]
    pub(crate) text: &'a str,
    /// 是否在请求中附加`tk`参数，目前的接口不带tk也能正常返回
    #[builder(default = false)]
    #[serde(skip_serializing)]
    pub(crate) with_token: bool,
}
// endregion --- translate
