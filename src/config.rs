//! 설정 파일 로드/저장 (JSON)

use std::fs;
use std::path::PathBuf;

use crate::reading::ReadingConfig;

/// 설정 파일 경로: ~/.config/hanread/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("hanread").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> ReadingConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            ReadingConfig::default()
        }),
        Err(_) => ReadingConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &ReadingConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip_json() {
        let config = ReadingConfig::new().with_max_candidates(32);
        let json = serde_json::to_string(&config).unwrap();
        let loaded: ReadingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.max_candidates, Some(32));
    }
}
