//! 읽기 엔진 설정

use serde::{Deserialize, Serialize};

/// 읽기 엔진 설정
///
/// 후보 집합은 모호한 단계마다 곱셈으로 늘어나므로, 긴 모호한 입력에서는
/// `max_candidates`로 상한을 둘 수 있다.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ReadingConfig {
    /// 후보 수 상한 (None = 무제한)
    /// 상한을 넘으면 생성 순서상 앞의 후보만 남긴다
    #[serde(default)]
    pub max_candidates: Option<usize>,
}

impl ReadingConfig {
    /// 새 설정 생성 (무제한)
    pub fn new() -> Self {
        Self::default()
    }

    /// 후보 수 상한 설정
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReadingConfig::default();
        assert_eq!(config.max_candidates, None);
    }

    #[test]
    fn test_with_max_candidates() {
        let config = ReadingConfig::new().with_max_candidates(64);
        assert_eq!(config.max_candidates, Some(64));
    }

    #[test]
    fn test_serde_defaults() {
        // 빈 JSON에서도 기본값으로 역직렬화
        let config: ReadingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_candidates, None);

        let config: ReadingConfig = serde_json::from_str(r#"{"max_candidates": 8}"#).unwrap();
        assert_eq!(config.max_candidates, Some(8));
    }
}
