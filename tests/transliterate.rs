//! 통합 테스트 - 자모 코덱과 읽기 엔진의 공개 인터페이스

use hanread::{assemble_from_jamo, decompose_to_jamo, transliterate, Reader, ReadingConfig};

#[test]
fn test_codec_roundtrip() {
    // 분해 -> 재조립이 원문을 보존
    for word in ["한글", "그를", "삯", "읽다"] {
        let jamo: Vec<char> = word.chars().flat_map(decompose_to_jamo).collect();
        assert_eq!(assemble_from_jamo(&jamo), word);
    }
}

#[test]
fn test_codec_ambiguity_example() {
    // "글" + ㅡ + ㄹ 은 "그를"로 읽힌다
    let mut jamo = decompose_to_jamo('글');
    jamo.extend(['ㅡ', 'ㄹ']);
    assert_eq!(assemble_from_jamo(&jamo), "그를");
}

#[test]
fn test_transliterate_empty() {
    assert!(transliterate("").is_empty());
}

#[test]
fn test_transliterate_sh() {
    assert_eq!(transliterate("sh"), vec!["시", "쉬"]);
}

#[test]
fn test_transliterate_cluster() {
    // 자음 연쇄에는 ㅡ가 채워진다
    assert_eq!(transliterate("gs"), vec!["긋", "즛"]);
}

#[test]
fn test_transliterate_word() {
    let readings = transliterate("hello");
    assert_eq!(readings.len(), 4);
    assert!(readings.contains(&"히를오".to_string()));
}

#[test]
fn test_non_latin_passthrough() {
    // 특수문자는 모든 후보의 같은 자리에 유지
    for reading in transliterate("a!b") {
        assert_eq!(reading.chars().nth(1), Some('!'));
    }
}

#[test]
fn test_mixed_hangul_and_english() {
    // 한글은 그대로, 영문만 추측
    assert_eq!(transliterate("한글"), vec!["한글"]);
    assert_eq!(transliterate("한a"), vec!["한아", "한에"]);
}

#[test]
fn test_candidate_cap() {
    let reader = Reader::with_config(ReadingConfig::new().with_max_candidates(4));
    assert!(reader.read("cccccc").len() <= 4);
}
