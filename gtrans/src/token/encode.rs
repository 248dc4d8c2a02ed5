use super::Error;

/// 把文本转换为计算tk用的编码序列
///
/// 注意这不是标准的UTF-8编码，和网页端的js实现保持一致：
///
/// - `0x80..=0x7FF`只保留两字节编码的首字节
/// - `0x10000..=0x10FFFF`只输出三个单元而不是四个
pub fn encode(text: &str) -> Result<Vec<u32>, Error> {
    let mut codes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        push_code(&mut codes, u32::from(ch)).map_err(|code| Error::InvalidCodePoint {
            code,
            text: text.to_owned(),
        })?;
    }
    Ok(codes)
}

/// 和`encode`相同，但输入为原始的码点值
///
/// `&str`中不可能出现代理码点或超出`0x10FFFF`的值，需要检查这类输入时使用这个函数
pub fn encode_scalars(scalars: &[u32]) -> Result<Vec<u32>, Error> {
    let mut codes = Vec::with_capacity(scalars.len() * 3);
    for &scalar in scalars {
        push_code(&mut codes, scalar).map_err(|code| Error::InvalidCodePoint {
            code,
            text: lossy_text(scalars),
        })?;
    }
    Ok(codes)
}

fn push_code(codes: &mut Vec<u32>, code: u32) -> Result<(), u32> {
    match code {
        0..=0x7F => codes.push(code),
        0x80..=0x7FF => codes.push((code >> 6) | 0xC0),
        // 标准的三字节UTF-8
        0x800..=0xD7FF | 0xE000..=0xFFFF => codes.extend([
            (code >> 12) | 0xE0,
            ((code >> 6) & 0x3F) | 0x80,
            (code & 0x3F) | 0x80,
        ]),
        0x10000..=0x10FFFF => codes.extend([
            (code >> 12) | 0xE0,
            ((code >> 6) & 0x3F) | 0x80,
            (code & 0x3F) | 0x80,
        ]),
        _ => return Err(code),
    }
    Ok(())
}

fn lossy_text(scalars: &[u32]) -> String {
    scalars
        .iter()
        .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[test]
fn encode_test() {
    let cases: [(&str, &[u32]); 5] = [
        (
            "你𐀀好߿c😍8🐨",
            &[
                228, 189, 160, 240, 128, 128, 229, 165, 189, 223, 99, 255, 152, 141, 56, 255, 144,
                168,
            ],
        ),
        (
            "我能吞下玻璃而不伤身体。",
            &[
                230, 136, 145, 232, 131, 189, 229, 144, 158, 228, 184, 139, 231, 142, 187, 231,
                146, 131, 232, 128, 140, 228, 184, 141, 228, 188, 164, 232, 186, 171, 228, 189,
                147, 227, 128, 130,
            ],
        ),
        (
            "나는 유리를 먹을 수 있어요. 그래도 아프지 않아요",
            &[
                235, 130, 152, 235, 138, 148, 32, 236, 156, 160, 235, 166, 172, 235, 165, 188, 32,
                235, 168, 185, 236, 157, 132, 32, 236, 136, 152, 32, 236, 158, 136, 236, 150, 180,
                236, 154, 148, 46, 32, 234, 183, 184, 235, 158, 152, 235, 143, 132, 32, 236, 149,
                132, 237, 148, 132, 236, 167, 128, 32, 236, 149, 138, 236, 149, 132, 236, 154,
                148,
            ],
        ),
        (
            "Μπορώ να φάω σπασμένα γυαλιά χωρίς να πάθω τίποτα.",
            &[
                206, 207, 206, 207, 207, 32, 206, 206, 32, 207, 206, 207, 32, 207, 207, 206, 207,
                206, 206, 206, 206, 32, 206, 207, 206, 206, 206, 206, 32, 207, 207, 207, 206, 207,
                32, 206, 206, 32, 207, 206, 206, 207, 32, 207, 206, 207, 206, 207, 206, 46,
            ],
        ),
        (
            "Je peux manger du verre, ça ne me fait pas mal.",
            &[
                74, 101, 32, 112, 101, 117, 120, 32, 109, 97, 110, 103, 101, 114, 32, 100, 117,
                32, 118, 101, 114, 114, 101, 44, 32, 195, 97, 32, 110, 101, 32, 109, 101, 32, 102,
                97, 105, 116, 32, 112, 97, 115, 32, 109, 97, 108, 46,
            ],
        ),
    ];

    for (text, expect) in cases {
        let codes = encode(text).unwrap();
        assert_eq!(codes, expect, "encode {text}");
    }
}

#[test]
fn encode_scalars_boundary_test() {
    // 三字节区间应与标准UTF-8一致
    let mut buf = [0u8; 4];
    let expect: Vec<u32> = '中'.encode_utf8(&mut buf).bytes().map(u32::from).collect();
    assert_eq!(encode_scalars(&['中' as u32]).unwrap(), expect);

    assert_eq!(encode_scalars(&[0x10FFFF]).unwrap(), vec![0x1EF, 0xBF, 0xBF]);

    match encode_scalars(&[0x61, 0x110000]) {
        Err(Error::InvalidCodePoint { code, text }) => {
            assert_eq!(code, 0x110000);
            assert_eq!(text, "a\u{FFFD}");
        }
        other => panic!("unexpected result: {:?}", other),
    }

    // 单独的代理码点同样不在任何区间内
    assert!(matches!(
        encode_scalars(&[0xD800]),
        Err(Error::InvalidCodePoint { code: 0xD800, .. })
    ));
}
