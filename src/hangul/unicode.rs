//! 한글 유니코드 범위 판별과 음절 인덱스 산술

/// 조합형(첫가끝) 자모 블록 시작 (U+1100, 옛한글 포함)
pub const PHONETIC_JAMO_BEGIN: u32 = 0x1100;
/// 조합형 자모 블록 끝
pub const PHONETIC_JAMO_END: u32 = 0x11FF;

/// 호환용 자모 시작 (ㄱ)
pub const COMPAT_JAMO_BEGIN: u32 = 0x3131;
/// 호환용 자모 끝 (ㅣ)
pub const COMPAT_JAMO_END: u32 = 0x3163;

/// 완성형 음절 시작 (가)
pub const SYLLABLE_BEGIN: u32 = 0xAC00;
/// 완성형 음절 끝 (힣)
pub const SYLLABLE_END: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 조합형(첫가끝) 자모인지 확인
pub fn is_phonetic_jamo(code: u32) -> bool {
    (PHONETIC_JAMO_BEGIN..=PHONETIC_JAMO_END).contains(&code)
}

/// 호환용 자모(ㄱ~ㅣ)인지 확인
pub fn is_compat_jamo(code: u32) -> bool {
    (COMPAT_JAMO_BEGIN..=COMPAT_JAMO_END).contains(&code)
}

/// 완성형 음절(가~힣)인지 확인
pub fn is_syllable(code: u32) -> bool {
    (SYLLABLE_BEGIN..=SYLLABLE_END).contains(&code)
}

/// 한글 문자인지 확인
/// - include_old: true면 조합형(옛한글) 자모 블록도 포함
pub fn is_hangul(code: u32, include_old: bool) -> bool {
    is_compat_jamo(code) || is_syllable(code) || (include_old && is_phonetic_jamo(code))
}

/// 초성/중성/종성 인덱스로 완성형 음절 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = SYLLABLE_BEGIN + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT + jongseong;
    char::from_u32(code)
}

/// 완성형 음절을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스), 완성형이 아니면 None
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !is_syllable(code) {
        return None;
    }
    let offset = code - SYLLABLE_BEGIN;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}
