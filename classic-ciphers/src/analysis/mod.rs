//! Cryptanalysis: letter frequencies and Caesar key recovery

pub mod crack;
pub mod frequency;

pub use crack::*;
pub use frequency::*;
