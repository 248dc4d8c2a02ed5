//! tk签名计算
//!
//! 网页版翻译接口要求每个请求携带`tk`参数，由页面中的tkk和待翻译文本计算得到。
//! 计算过程全部是纯函数，不涉及网络请求，tkk的获取见[`crate::tkk`]

mod encode;
mod error;
mod mix;

pub use encode::{encode, encode_scalars};
pub use error::Error;
pub use mix::{TABLE_1, TABLE_2, mix};

use crate::tkk::Tkk;
use std::fmt;

const TOKEN_MODULUS: u32 = 1_000_000;

/// 签名结果，格式化后为`"{left}.{right}"`
///
/// `left`小于1000000，`right = left ^ tl`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub left: u32,
    pub right: u32,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.left, self.right)
    }
}

/// 计算文本的tk
pub fn sign(tkk: &Tkk, text: &str) -> Result<Token, Error> {
    let codes = encode(text)?;
    Ok(sign_codes(tkk, &codes))
}

fn sign_codes(tkk: &Tkk, codes: &[u32]) -> Token {
    // 和js实现一样按32位截断
    let tl = tkk.tl as u32;
    let tr = tkk.tr as u32;

    let mut left = tl;
    for &code in codes {
        left = mix(left.wrapping_add(code), TABLE_1);
    }
    left = mix(left, TABLE_2);
    left ^= tr;
    left %= TOKEN_MODULUS;

    Token {
        left,
        right: left ^ tl,
    }
}

#[test]
fn sign_test() {
    let tkk = Tkk::new(441156, 1924457848);
    let token = sign(&tkk, "这里是北京市中心").unwrap();
    assert_eq!(token.to_string(), "248966.358338");
}

#[test]
fn sign_is_deterministic_test() {
    let tkk = Tkk::new(441153, 2601734278);
    for text in ["", "hello", "你𐀀好߿c😍8🐨", "Je peux manger du verre"] {
        let a = sign(&tkk, text).unwrap();
        let b = sign(&tkk, text).unwrap();
        assert_eq!(a, b);
        assert!(a.left < TOKEN_MODULUS);
        assert_eq!(a.right, a.left ^ tkk.tl as u32);
    }
}
