//! 호환용 자모 열 -> 완성형 한글 재조립
//!
//! `decompose_to_jamo`의 완전한 역변환은 불가능하다. 종성이 다음 글자의
//! 초성일 수도 있는 모호한 경우가 있기 때문이다.
//!
//! ex) "글ㅡㄹ" -> [ㄱ, ㅡ, ㄹ, ㅡ, ㄹ] -> "그를"
//!
//! 그래서 한 문자 선읽기로 모호성을 해소한다: 모호한 자음 뒤에 모음이
//! 오면 그 자음을 다음 음절의 초성으로 넘긴다. 한글이 아닌 문자는
//! 그대로 내보낸다.
//!
//! ex) [ㅅ, ㅏ, a] -> "사a"

use crate::hangul::jamo::{
    choseong_index, is_choseong, is_jongseong, is_jungseong, jongseong_index, jungseong_index,
};
use crate::hangul::unicode::compose_syllable;

/// 재조립 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 진행 중인 조각 없음
    Idle,
    /// 초성 수집됨
    Choseong,
    /// 초성+중성 수집됨
    Jungseong,
    /// 마지막 자음이 종성인지 다음 글자의 초성인지 불확실
    /// ex) [ㄱ, ㅐ, ㄱ]
    AmbiguousJongseong,
}

/// 자모 열을 왼쪽부터 처리하는 재조립기
/// 진행 중인 조각은 `chars[first..last]` 구간 (last는 exclusive)
struct Assembler<'a> {
    chars: &'a [char],
    first: usize,
    last: usize,
    state: State,
    output: String,
}

impl Assembler<'_> {
    /// 문자 하나 처리 후 다음 상태 반환
    fn step(&mut self, c: char) -> State {
        match self.state {
            State::Idle => {
                self.flush();
                self.first = self.last;
                if is_choseong(c) {
                    State::Choseong
                } else {
                    State::Idle
                }
            }
            State::Choseong => {
                if is_jungseong(c) {
                    return State::Jungseong;
                }
                // 단독 자모로 내보내고 새 조각 시작
                self.flush();
                self.first = self.last;
                if is_choseong(c) {
                    State::Choseong
                } else {
                    State::Idle
                }
            }
            State::Jungseong => {
                // ex) [ㅅ, ㅏ, ㄹ]
                if is_jongseong(c) {
                    // ex) [ㅅ, ㅏ, ㄳ] - 종성 전용이면 모호성 없이 3자 확정
                    if !is_choseong(c) {
                        self.assemble(3);
                        self.first = self.last + 1;
                        return State::Idle;
                    }
                    return State::AmbiguousJongseong;
                }
                // ex) [ㅎ, ㅐ, ㅉ] - 종성 불가 자음은 새 글자의 초성
                if is_choseong(c) {
                    self.assemble(2);
                    self.first = self.last;
                    return State::Choseong;
                }
                // ex) [ㅌ, ㅏ, ㅏ]
                self.assemble(2);
                self.first = self.last;
                State::Idle
            }
            State::AmbiguousJongseong => {
                // ex) [ㄱ, ㅐ, ㄱ, ㄱ] - 들고 있던 자음은 종성으로 확정
                if is_choseong(c) {
                    self.assemble(3);
                    self.first = self.last;
                    return State::Choseong;
                }
                // ex) [ㄱ, ㅐ, ㄱ, ㅡ] - 들고 있던 자음을 다음 음절의 초성으로
                if is_jungseong(c) {
                    self.assemble(2);
                    self.first += 2;
                    return State::Jungseong;
                }
                // ex) [ㄱ, ㅐ, ㄱ, ?]
                self.assemble(3);
                self.first = self.last;
                State::Idle
            }
        }
    }

    /// 진행 중인 조각을 가공 없이 출력
    fn flush(&mut self) {
        for &c in &self.chars[self.first..self.last] {
            self.output.push(c);
        }
    }

    /// 조각 앞 len개(2~3)를 음절 하나로 조합해 출력
    fn assemble(&mut self, len: usize) {
        let cho = self.chars[self.first];
        let jung = self.chars[self.first + 1];
        let jong = if len == 3 {
            Some(self.chars[self.first + 2])
        } else {
            None
        };
        match assemble_syllable(cho, jung, jong) {
            Some(s) => self.output.push(s),
            None => {
                // 상태 전이상 조합은 항상 성공하지만, 실패해도 원문은 유지
                self.output.push(cho);
                self.output.push(jung);
                if let Some(j) = jong {
                    self.output.push(j);
                }
            }
        }
    }

    /// 입력 끝에서 남은 조각 정리
    fn finish(mut self) -> String {
        match self.state {
            State::Jungseong => self.assemble(2),
            State::AmbiguousJongseong => self.assemble(3),
            State::Idle | State::Choseong => self.flush(),
        }
        self.output
    }
}

/// 호환용 자모 2~3개를 완성형 음절 하나로 조합
fn assemble_syllable(cho: char, jung: char, jong: Option<char>) -> Option<char> {
    let cho = choseong_index(cho)?;
    let jung = jungseong_index(jung)?;
    let jong = match jong {
        Some(c) => jongseong_index(c)? + 1,
        None => 0,
    };
    compose_syllable(cho, jung, jong)
}

/// 자모 열에서 남는 자모가 최소가 되도록 완성형 한글을 재조립
///
/// 모든 입력 문자는 조합된 음절 안에서든 그대로든 정확히 한 번,
/// 원래 순서대로 출력에 나타난다.
pub fn assemble_from_jamo(chars: &[char]) -> String {
    if chars.len() <= 1 {
        return chars.iter().collect();
    }

    let mut assembler = Assembler {
        chars,
        first: 0,
        last: 0,
        state: State::Idle,
        output: String::new(),
    };

    while assembler.last < chars.len() {
        let c = chars[assembler.last];
        assembler.state = assembler.step(c);
        assembler.last += 1;
    }

    assembler.finish()
}
