//! 읽기 후보 분기 결합기
//!
//! 지금까지 누적된 후보 집합에 다음 입력 단위의 대안들을 데카르트 곱으로
//! 결합한다. 모호한 단계마다 후보 수가 곱셈으로 늘어난다.

/// 후보 하나: 자모(또는 통과 문자)의 순서열
pub type Candidate = Vec<char>;

/// 기존 후보 집합에 새 대안들을 결합
///
/// - 기존 집합이 비어 있으면 (입력 시작) 대안들을 그대로 반환
/// - 아니면 모든 (기존 후보, 대안) 쌍마다 기존 후보 + 대안을 이어붙인
///   새 후보를 만든다. 바깥 루프가 새 대안, 안쪽 루프가 기존 후보 순서
/// - 중복 제거는 하지 않는다
pub fn branch_readings(candidates: Vec<Candidate>, alternatives: Vec<Candidate>) -> Vec<Candidate> {
    if candidates.is_empty() {
        return alternatives;
    }

    let mut merged = Vec::with_capacity(candidates.len() * alternatives.len());
    for alternative in &alternatives {
        for candidate in &candidates {
            let mut extended = candidate.clone();
            extended.extend_from_slice(alternative);
            merged.push(extended);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_candidates() {
        // 빈 집합 + 대안 N개 = 그대로 N개
        let alternatives = vec![vec!['ㅏ'], vec!['ㅔ']];
        let merged = branch_readings(Vec::new(), alternatives.clone());
        assert_eq!(merged, alternatives);
    }

    #[test]
    fn test_cross_product_size() {
        // M개 × N개 = M×N개
        let candidates = vec![vec!['ㄱ'], vec!['ㅈ'], vec!['ㅋ']];
        let alternatives = vec![vec!['ㅏ'], vec!['ㅔ']];
        let merged = branch_readings(candidates, alternatives);
        assert_eq!(merged.len(), 6);
    }

    #[test]
    fn test_cross_product_order() {
        // 바깥 루프가 새 대안, 안쪽 루프가 기존 후보
        let candidates = vec![vec!['ㄱ'], vec!['ㅈ']];
        let alternatives = vec![vec!['ㅏ'], vec!['ㅔ']];
        let merged = branch_readings(candidates, alternatives);
        assert_eq!(
            merged,
            vec![
                vec!['ㄱ', 'ㅏ'],
                vec!['ㅈ', 'ㅏ'],
                vec!['ㄱ', 'ㅔ'],
                vec!['ㅈ', 'ㅔ'],
            ]
        );
    }

    #[test]
    fn test_multi_jamo_alternative() {
        let candidates = vec![vec!['ㅋ']];
        let alternatives = vec![vec!['ㅋ', 'ㅜ']];
        let merged = branch_readings(candidates, alternatives);
        assert_eq!(merged, vec![vec!['ㅋ', 'ㅋ', 'ㅜ']]);
    }

    #[test]
    fn test_no_dedup() {
        // 서로 다른 유도에서 같은 후보가 나와도 각각 유지
        let candidates = vec![vec!['ㄱ'], vec!['ㄱ']];
        let alternatives = vec![vec!['ㅏ']];
        let merged = branch_readings(candidates, alternatives);
        assert_eq!(merged, vec![vec!['ㄱ', 'ㅏ'], vec!['ㄱ', 'ㅏ']]);
    }
}
