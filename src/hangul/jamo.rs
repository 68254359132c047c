//! 호환용 자모 테이블과 초성/중성/종성 역할 판별

/// 초성 테이블 (19개)
/// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
/// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
#[rustfmt::skip]
pub const CHOSEONGS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 테이블 (21개)
/// ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
/// ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
#[rustfmt::skip]
pub const JUNGSEONGS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 테이블 (27개, "종성 없음"은 테이블에 없음)
/// ㄱ(0) ㄲ(1) ㄳ(2) ㄴ(3) ㄵ(4) ㄶ(5) ㄷ(6) ㄹ(7) ㄺ(8) ㄻ(9)
/// ㄼ(10) ㄽ(11) ㄾ(12) ㄿ(13) ㅀ(14) ㅁ(15) ㅂ(16) ㅄ(17) ㅅ(18)
/// ㅆ(19) ㅇ(20) ㅈ(21) ㅊ(22) ㅋ(23) ㅌ(24) ㅍ(25) ㅎ(26)
#[rustfmt::skip]
pub const JONGSEONGS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 초성 테이블에서의 인덱스 (없으면 None)
pub fn choseong_index(c: char) -> Option<u32> {
    CHOSEONGS.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 중성 테이블에서의 인덱스 (없으면 None)
pub fn jungseong_index(c: char) -> Option<u32> {
    JUNGSEONGS.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 종성 테이블에서의 인덱스 (없으면 None)
/// 음절 산술에 쓸 때는 +1 해야 함 (0 = 종성 없음)
pub fn jongseong_index(c: char) -> Option<u32> {
    JONGSEONGS.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 초성으로 쓸 수 있는 자모인지 확인
pub fn is_choseong(c: char) -> bool {
    choseong_index(c).is_some()
}

/// 중성으로 쓸 수 있는 자모인지 확인
pub fn is_jungseong(c: char) -> bool {
    jungseong_index(c).is_some()
}

/// 종성으로 쓸 수 있는 자모인지 확인
/// 많은 자음이 초성 테이블에도 있어 디코딩 모호성의 원인이 된다
pub fn is_jongseong(c: char) -> bool {
    jongseong_index(c).is_some()
}
