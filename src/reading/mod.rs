//! 영문 표기 -> 한글 읽기 후보 엔진
//!
//! 영문자 하나가 여러 소리로 읽힐 수 있다는 모호성을 그대로 살려,
//! 가능한 읽기를 전부 생성한다.
//!
//! ```
//! use hanread::reading::transliterate;
//!
//! let readings = transliterate("sh");
//! assert_eq!(readings, vec!["시", "쉬"]);
//! ```
//!
//! 모호한 단계마다 후보 수가 곱으로 늘어나므로, 긴 입력에는
//! [`ReadingConfig`]로 상한을 둘 수 있다:
//!
//! ```
//! use hanread::reading::{Reader, ReadingConfig};
//!
//! let reader = Reader::with_config(ReadingConfig::new().with_max_candidates(16));
//! assert!(reader.read("cccccc").len() <= 16);
//! ```

pub mod branch;
pub mod config;
pub mod engine;

pub use branch::branch_readings;
pub use config::ReadingConfig;
pub use engine::{transliterate, Reader};
