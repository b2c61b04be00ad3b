//! Cipher transforms

pub mod caesar;
pub mod fixed;
pub mod vigenere;

pub use caesar::*;
pub use fixed::*;
pub use vigenere::*;
