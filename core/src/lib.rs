//! FinnSyll Core Types
//!
//! This crate provides the foundational pieces every other FinnSyll crate
//! builds on:
//! - The immutable Finnish alphabet table (vowels, clusters, inventories)
//! - Diacritic normalization between `ä`/`ö` and the internal `A`/`O`
//! - Single-phoneme classification (vowel, coronal, sonorant, harmony depth)
//! - The `Word` value passed into every phonotactic rule

mod alphabet;
mod normalize;
mod phoneme;
mod word;

pub use alphabet::*;
pub use normalize::*;
pub use phoneme::*;
pub use word::*;
