//! 완성형 음절 -> 호환용 자모 분해

use crate::hangul::jamo::{CHOSEONGS, JONGSEONGS, JUNGSEONGS};
use crate::hangul::unicode::{decompose_syllable, is_compat_jamo};

/// 문자 하나를 호환용 자모 열로 분해
///
/// - 완성형 음절이면 2~3개의 호환용 자모로 분해
/// - 이미 호환용 자모이거나 한글이 아니면 그대로 1개짜리 열로 반환
pub fn decompose_to_jamo(c: char) -> Vec<char> {
    let code = c as u32;

    if is_compat_jamo(code) {
        return vec![c];
    }

    if let Some((cho, jung, jong)) = decompose_syllable(c) {
        let mut result = vec![CHOSEONGS[cho as usize], JUNGSEONGS[jung as usize]];
        if jong != 0 {
            result.push(JONGSEONGS[(jong - 1) as usize]);
        }
        return result;
    }

    vec![c]
}
