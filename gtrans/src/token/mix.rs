/// 逐字符计算tk时使用的运算表
pub const TABLE_1: &[u8] = b"+-a^+6";
/// 所有字符处理完之后再混合一次使用的运算表
pub const TABLE_2: &[u8] = b"+-3^+b+-f";

/// 按运算表对`acc`做位运算混合
///
/// 运算表每三个字节为一组`(op, dir, mag)`：
///
/// - `mag`: 位移量，`'0'..='9'`对应0到9，`'a'..='z'`对应10到35
/// - `dir`: `'+'`为右移，其它为左移
/// - `op`: `'+'`为相加，其它为异或
///
/// 所有运算都是u32回绕运算，位移量不小于32时结果为0。末尾不足三个字节的部分忽略
pub fn mix(mut acc: u32, table: &[u8]) -> u32 {
    for group in table.chunks_exact(3) {
        let (op, dir, mag) = (group[0], group[1], group[2]);

        let shift = if mag >= b'a' {
            u32::from(mag) - 87
        } else {
            u32::from(mag).wrapping_sub(48)
        };

        let d = if dir == b'+' {
            acc.checked_shr(shift).unwrap_or(0)
        } else {
            acc.checked_shl(shift).unwrap_or(0)
        };

        acc = if op == b'+' {
            acc.wrapping_add(d)
        } else {
            acc ^ d
        };
    }
    acc
}

#[test]
fn mix_test() {
    assert_eq!(mix(33, TABLE_1), 34353);
    assert_eq!(mix(33, b"+-a^+6xy"), 34353);
    assert_eq!(mix(33, b""), 33);
}

#[test]
fn mix_wrapping_test() {
    // 左移溢出截断，加法回绕
    assert_eq!(mix(0xFFFF_FFFF, b"+-1"), 0xFFFF_FFFD);
    assert_eq!(mix(0x8000_0001, b"^-f"), 0x8000_0001 ^ 0x8000);
    // 'z' 对应35，超过32位
    assert_eq!(mix(12345, b"+-z"), 12345);
    assert_eq!(mix(12345, b"^+z"), 12345);
}
