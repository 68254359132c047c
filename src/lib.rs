pub mod config;
pub mod hangul;
pub mod reading;

pub use hangul::{assemble_from_jamo, decompose_to_jamo};
pub use reading::{transliterate, Reader, ReadingConfig};
