//! 한글 음절 <-> 호환용 자모 코덱
//!
//! 완성형 음절을 자모로 분해하고, 자모 열을 한 문자 선읽기로 다시
//! 완성형으로 조립한다.
//!
//! ```
//! use hanread::hangul::{assemble_from_jamo, decompose_to_jamo};
//!
//! assert_eq!(decompose_to_jamo('한'), vec!['ㅎ', 'ㅏ', 'ㄴ']);
//! assert_eq!(assemble_from_jamo(&['ㅎ', 'ㅏ', 'ㄴ']), "한");
//! ```

pub mod decode;
pub mod encode;
pub mod jamo;
pub mod unicode;

pub use decode::assemble_from_jamo;
pub use encode::decompose_to_jamo;
pub use unicode::is_hangul;
