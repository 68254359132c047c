//! 영문 표기 -> 한글 읽기 후보 유한 상태 기계
//!
//! 영문자 하나하나를 상태 기계에 통과시키며, 각 단계에서 가능한 자모
//! 대안들을 분기 결합기로 후보 집합에 누적한다. 한 글자가 여러 소리로
//! 읽힐 수 있으면 (ex: c -> ㅋ/ㅅ/ㅆ) 후보가 그만큼 갈라진다.
//!
//! 입력이 이미 한글이면 자모로 분해해 같은 후보 흐름에 합류시키고,
//! 영문자도 한글도 아니면 그대로 통과시킨다. 마지막에 누적된 자모
//! 후보들을 각각 완성형 한글로 재조립해 돌려준다.

use crate::hangul::decode::assemble_from_jamo;
use crate::hangul::encode::decompose_to_jamo;
use crate::hangul::unicode::is_hangul;
use crate::reading::branch::{branch_readings, Candidate};
use crate::reading::config::ReadingConfig;

/// 한 분기에서 제시되는 대안들 (각각 자모 열 하나)
type Alternatives = Vec<Candidate>;

/// FSM 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 음절 시작
    Start,
    /// 음절이 모음으로 시작한 직후
    VowelOnset,
    /// 반모음(w/y) 뒤 - 다음 모음과 이중모음을 이룬다
    Glide,
    /// 자음으로 이어지는 중
    ConsonantOnset,
    /// q 뒤 - u가 따라오면 '쿠'
    AfterQ,
    /// x 뒤 - 후속 문자에 따라 출력이 다름
    AfterX,
    /// a 뒤 - 한 글자 선읽기로 장모음/이중모음 판별
    AfterA,
    /// e 뒤
    AfterE,
    /// o 뒤
    AfterO,
    /// u 뒤
    AfterU,
    /// 모음 없이 자음이 이어질 때 - ㅡ를 채워 넣는다
    Cluster,
    /// s 뒤 - h가 따라오면 '시/쉬'
    AfterS,
    /// sh 뒤
    AfterSh,
}

/// 전이 한 번의 결과: 순서대로 적용할 분기들과 다음 상태
struct Step {
    branches: Vec<Alternatives>,
    next: State,
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_semivowel(c: char) -> bool {
    matches!(c, 'w' | 'y')
}

/// 대안 목록 구성 헬퍼
fn alts(alternatives: &[&[char]]) -> Alternatives {
    alternatives.iter().map(|a| a.to_vec()).collect()
}

/// 자음 하나의 자모 대안과, 자음이 정하는 명시적 다음 상태
///
/// 대부분의 자음은 다음 상태를 정하지 않고 호출한 상태의 기본값을 따른다.
fn read_consonant(c: char) -> (Alternatives, Option<State>) {
    match c {
        'b' | 'v' => (alts(&[&['ㅂ']]), None),
        'c' => (alts(&[&['ㅋ'], &['ㅅ'], &['ㅆ']]), None),
        'd' => (alts(&[&['ㄷ']]), None),
        'f' | 'p' => (alts(&[&['ㅍ']]), None),
        'g' => (alts(&[&['ㄱ'], &['ㅈ']]), None),
        'h' => (alts(&[&['ㅎ']]), None),
        'j' | 'z' => (alts(&[&['ㅈ']]), None),
        'k' => (alts(&[&['ㅋ']]), None),
        'l' | 'r' => (alts(&[&['ㄹ']]), None),
        'm' => (alts(&[&['ㅁ']]), None),
        'n' => (alts(&[&['ㄴ']]), None),
        'q' => (alts(&[&['ㅋ'], &['ㅋ', 'ㅜ']]), Some(State::AfterQ)),
        's' => (alts(&[&['ㅅ']]), Some(State::AfterS)),
        't' => (alts(&[&['ㅌ']]), None),
        'w' => (alts(&[&['ㅜ']]), Some(State::Glide)),
        'x' => (alts(&[&['ㅋ', 'ㅅ']]), Some(State::AfterX)),
        'y' => (alts(&[&['ㅇ', 'ㅣ']]), Some(State::Glide)),
        _ => (Vec::new(), None),
    }
}

/// 모음 하나의 자모 대안과 다음 상태
fn read_vowel(c: char) -> (Alternatives, State) {
    match c {
        'a' => (alts(&[&['ㅏ'], &['ㅔ']]), State::AfterA),
        'e' => (alts(&[&['ㅣ'], &['ㅔ']]), State::AfterE),
        'i' => (alts(&[&['ㅣ'], &['ㅏ', 'ㅇ', 'ㅣ']]), State::Start),
        'o' => (alts(&[&['ㅗ'], &['ㅏ']]), State::AfterO),
        'u' => (alts(&[&['ㅜ'], &['ㅓ']]), State::AfterU),
        _ => (Vec::new(), State::Start),
    }
}

/// 상태 전이: (상태, 소문자 영문자) -> (분기들, 다음 상태)
///
/// 순수 함수이며 후보 집합은 건드리지 않는다. 분기들은 반환된 순서대로
/// 결합기에 적용된다.
fn transition(state: State, c: char) -> Step {
    match state {
        State::Start => {
            if is_vowel(c) {
                let (alternatives, next) = read_vowel(c);
                Step {
                    branches: vec![alts(&[&['ㅇ']]), alternatives],
                    next,
                }
            } else if is_semivowel(c) {
                Step {
                    branches: vec![alts(&[&['ㅇ']])],
                    next: State::Glide,
                }
            } else {
                let (alternatives, next) = read_consonant(c);
                Step {
                    branches: vec![alternatives],
                    next: next.unwrap_or(State::Cluster),
                }
            }
        }
        State::VowelOnset => {
            if is_vowel(c) {
                let (alternatives, next) = read_vowel(c);
                Step {
                    branches: vec![alternatives],
                    next,
                }
            } else {
                transition(State::Start, c)
            }
        }
        State::Glide => match c {
            'a' => Step {
                branches: vec![alts(&[&['ㅑ'], &['ㅘ']])],
                next: State::Start,
            },
            'e' => Step {
                branches: vec![alts(&[&['ㅖ'], &['ㅞ']])],
                next: State::Start,
            },
            'i' => Step {
                branches: vec![alts(&[&['ㅢ']])],
                next: State::Start,
            },
            'o' => Step {
                branches: vec![alts(&[&['ㅛ'], &['ㅝ']])],
                next: State::Start,
            },
            'u' => Step {
                branches: vec![alts(&[&['ㅠ']])],
                next: State::Start,
            },
            _ => {
                let (alternatives, next) = read_consonant(c);
                Step {
                    branches: vec![alts(&[&['ㅇ', 'ㅣ']]), alternatives],
                    next: next.unwrap_or(State::ConsonantOnset),
                }
            }
        },
        State::ConsonantOnset => {
            if is_vowel(c) {
                // 자음 뒤의 모음은 음절을 닫고 처음으로 돌아간다
                let (alternatives, _) = read_vowel(c);
                Step {
                    branches: vec![alternatives],
                    next: State::Start,
                }
            } else if is_semivowel(c) {
                transition(State::Glide, c)
            } else {
                let (alternatives, next) = read_consonant(c);
                Step {
                    branches: vec![alternatives],
                    next: next.unwrap_or(State::ConsonantOnset),
                }
            }
        }
        State::AfterQ => {
            if c == 'u' {
                Step {
                    branches: vec![alts(&[&['ㅋ', 'ㅜ']])],
                    next: State::AfterU,
                }
            } else {
                transition(State::ConsonantOnset, c)
            }
        }
        State::AfterX => {
            if is_vowel(c) {
                let mut step = transition(State::VowelOnset, c);
                step.branches.insert(0, alts(&[&['ㅈ']]));
                step
            } else if c == 'y' {
                Step {
                    branches: vec![alts(&[&['ㅈ', 'ㅏ', 'ㅇ', 'ㅣ']])],
                    next: State::Start,
                }
            } else if is_semivowel(c) {
                let mut step = transition(State::Glide, c);
                step.branches.insert(0, alts(&[&['ㅇ', 'ㅔ', 'ㄱ', 'ㅅ', 'ㅡ']]));
                step
            } else {
                let mut step = transition(State::VowelOnset, c);
                step.branches.insert(0, alts(&[&['ㅇ', 'ㅔ', 'ㄱ', 'ㅅ', 'ㅡ']]));
                step
            }
        }
        State::AfterA => match c {
            // 장모음: 이미 낸 모음에 흡수
            'a' | 'e' => Step {
                branches: Vec::new(),
                next: State::Start,
            },
            'i' => Step {
                branches: vec![alts(&[&['ㅇ', 'ㅣ']])],
                next: State::Start,
            },
            'o' => Step {
                branches: vec![alts(&[&['ㅇ', 'ㅗ']])],
                next: State::Start,
            },
            'u' | 'w' => Step {
                branches: vec![alts(&[&['ㅇ', 'ㅜ']])],
                next: State::Start,
            },
            'y' => transition(State::Glide, c),
            _ => {
                let (alternatives, _) = read_consonant(c);
                Step {
                    branches: vec![alternatives],
                    next: State::ConsonantOnset,
                }
            }
        },
        State::AfterE => match c {
            'e' | 'i' | 'y' => Step {
                branches: vec![alts(&[&['ㅇ', 'ㅣ']])],
                next: State::Start,
            },
            _ => transition(State::ConsonantOnset, c),
        },
        State::AfterO => match c {
            'o' => Step {
                branches: vec![alts(&[&['ㅇ', 'ㅜ']])],
                next: State::Start,
            },
            'i' | 'y' => Step {
                branches: vec![alts(&[&['ㅇ', 'ㅗ', 'ㅇ', 'ㅣ']])],
                next: State::Start,
            },
            _ => transition(State::ConsonantOnset, c),
        },
        State::AfterU => match c {
            // 모음: 이중모음 또는 음절 분리, 두 갈래 모두 후보로
            'a' => Step {
                branches: vec![alts(&[&['ㅘ'], &['ㅜ', 'ㅇ', 'ㅏ']])],
                next: State::Start,
            },
            'e' => Step {
                branches: vec![alts(&[&['ㅝ'], &['ㅜ', 'ㅇ', 'ㅔ']])],
                next: State::Start,
            },
            'i' => Step {
                branches: vec![alts(&[&['ㅟ'], &['ㅜ', 'ㅇ', 'ㅣ']])],
                next: State::Start,
            },
            'o' => Step {
                branches: vec![alts(&[&['ㅝ'], &['ㅜ', 'ㅇ', 'ㅗ']])],
                next: State::Start,
            },
            'u' => Step {
                branches: vec![alts(&[&['ㅜ']])],
                next: State::Start,
            },
            // 반모음
            'w' => Step {
                branches: vec![alts(&[&['ㅜ']])],
                next: State::Glide,
            },
            'y' => Step {
                branches: vec![alts(&[&['ㅜ', 'ㅇ', 'ㅣ']])],
                next: State::Start,
            },
            _ => {
                let (alternatives, next) = read_consonant(c);
                Step {
                    branches: vec![alts(&[&['ㅜ'], &['ㅠ']]), alternatives],
                    next: next.unwrap_or(State::ConsonantOnset),
                }
            }
        },
        State::Cluster => {
            if is_vowel(c) {
                let (alternatives, _) = read_vowel(c);
                Step {
                    branches: vec![alternatives],
                    next: State::Start,
                }
            } else if is_semivowel(c) {
                transition(State::Glide, c)
            } else {
                // 모음 없는 자음 연쇄: ㅡ를 채우고 자음 처리
                let (alternatives, next) = read_consonant(c);
                Step {
                    branches: vec![alts(&[&['ㅡ']]), alternatives],
                    next: next.unwrap_or(State::Start),
                }
            }
        }
        State::AfterS => {
            if c == 'h' {
                Step {
                    branches: vec![alts(&[&['ㅣ'], &['ㅟ']])],
                    next: State::AfterSh,
                }
            } else {
                transition(State::ConsonantOnset, c)
            }
        }
        State::AfterSh => {
            if is_vowel(c) {
                // 모음은 이미 낸 ㅣ/ㅟ에 흡수
                Step {
                    branches: Vec::new(),
                    next: State::Start,
                }
            } else {
                transition(State::Start, c)
            }
        }
    }
}

/// 읽기 엔진
///
/// 호출 간 공유 상태가 없어 여러 곳에서 동시에 사용해도 안전하다.
pub struct Reader {
    config: ReadingConfig,
}

impl Reader {
    /// 기본 설정(후보 수 무제한)으로 생성
    pub fn new() -> Self {
        Self {
            config: ReadingConfig::default(),
        }
    }

    /// 설정과 함께 생성
    pub fn with_config(config: ReadingConfig) -> Self {
        Self { config }
    }

    /// 입력 문자열의 가능한 한글 읽기를 모두 생성
    ///
    /// 반환 순서는 후보가 생성된 순서이며 가능성 순위가 아니다.
    pub fn read(&self, input: &str) -> Vec<String> {
        let mut candidates: Vec<Candidate> = Vec::new();
        let mut state = State::Start;

        for c in input.chars() {
            let code = c as u32;

            // 한글은 자모로 분해해 단일 대안으로 합류, 상태는 처음으로
            if is_hangul(code, false) {
                candidates = self.apply(candidates, vec![decompose_to_jamo(c)]);
                state = State::Start;
                continue;
            }

            // 영문자가 아니면 그대로 통과, 상태는 처음으로
            if !c.is_ascii_alphabetic() {
                candidates = self.apply(candidates, vec![vec![c]]);
                state = State::Start;
                continue;
            }

            let step = transition(state, c.to_ascii_lowercase());
            for alternatives in step.branches {
                if alternatives.is_empty() {
                    continue;
                }
                candidates = self.apply(candidates, alternatives);
            }
            state = step.next;
        }

        candidates
            .iter()
            .map(|candidate| assemble_from_jamo(candidate))
            .collect()
    }

    /// 분기 결합 후 설정된 상한으로 절단
    fn apply(&self, candidates: Vec<Candidate>, alternatives: Vec<Candidate>) -> Vec<Candidate> {
        let mut merged = branch_readings(candidates, alternatives);
        if let Some(max) = self.config.max_candidates {
            if merged.len() > max {
                log::debug!("읽기 후보 {}개를 {}개로 절단", merged.len(), max);
                merged.truncate(max);
            }
        }
        merged
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

/// 입력 문자열의 가능한 한글 읽기를 모두 생성 (기본 설정)
pub fn transliterate(input: &str) -> Vec<String> {
    Reader::new().read(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(transliterate("").is_empty());
    }

    #[test]
    fn test_single_vowel() {
        // 음절 시작 모음 앞에는 ㅇ이 붙는다
        assert_eq!(transliterate("a"), vec!["아", "에"]);
        assert_eq!(transliterate("u"), vec!["우", "어"]);
    }

    #[test]
    fn test_vowel_i_branches() {
        assert_eq!(transliterate("i"), vec!["이", "아이"]);
    }

    #[test]
    fn test_sh_digraph() {
        // s 뒤의 h -> 시/쉬
        assert_eq!(transliterate("sh"), vec!["시", "쉬"]);
    }

    #[test]
    fn test_s_without_h() {
        // h가 아니면 일반 자음 이어짐으로 처리
        assert_eq!(transliterate("sa"), vec!["사", "세"]);
    }

    #[test]
    fn test_cluster_filler() {
        // 모음 없는 자음 연쇄에는 ㅡ가 들어간다
        assert_eq!(transliterate("gs"), vec!["긋", "즛"]);
    }

    #[test]
    fn test_ambiguous_consonant() {
        // c -> ㅋ/ㅅ/ㅆ 세 갈래
        assert_eq!(transliterate("ca"), vec!["카", "사", "싸", "케", "세", "쎄"]);
    }

    #[test]
    fn test_vowel_lookahead() {
        // 장모음은 이미 낸 모음에 흡수
        assert_eq!(transliterate("aa"), vec!["아", "에"]);
        // 모음 연쇄는 다음 음절로 이어진다
        assert_eq!(transliterate("ao"), vec!["아오", "에오"]);
        assert_eq!(transliterate("oo"), vec!["오우", "아우"]);
    }

    #[test]
    fn test_glide() {
        assert_eq!(transliterate("wa"), vec!["야", "와"]);
        assert_eq!(transliterate("yu"), vec!["유"]);
    }

    #[test]
    fn test_q_digraph() {
        let readings = transliterate("qa");
        assert!(readings.contains(&"카".to_string()));
        assert_eq!(readings.len(), 4);
    }

    #[test]
    fn test_consonant_then_vowel() {
        assert_eq!(transliterate("hi"), vec!["히", "하이"]);
    }

    #[test]
    fn test_passthrough_position() {
        // 한글도 영문도 아닌 문자는 모든 후보의 같은 자리에 그대로
        assert_eq!(transliterate("a!b"), vec!["아!ㅂ", "에!ㅂ"]);
    }

    #[test]
    fn test_hangul_passthrough() {
        // 한글 입력은 자모로 분해됐다가 그대로 재조립된다
        assert_eq!(transliterate("글"), vec!["글"]);
        assert_eq!(transliterate("안녕!"), vec!["안녕!"]);
    }

    #[test]
    fn test_hangul_then_english() {
        assert_eq!(transliterate("한a"), vec!["한아", "한에"]);
    }

    #[test]
    fn test_uppercase_folding() {
        assert_eq!(transliterate("SH"), transliterate("sh"));
    }

    #[test]
    fn test_candidate_cap() {
        let reader = Reader::with_config(ReadingConfig::new().with_max_candidates(2));
        let readings = reader.read("cc");
        assert_eq!(readings.len(), 2);

        // 무제한이면 단계마다 곱으로 늘어난다
        assert_eq!(transliterate("cc").len(), 9);
    }

    #[test]
    fn test_cap_keeps_generation_order() {
        let capped = Reader::with_config(ReadingConfig::new().with_max_candidates(2)).read("ca");
        let unbounded = transliterate("ca");
        assert_eq!(capped, unbounded[..2].to_vec());
    }
}
