//! Pseudo-random number generation.

pub mod xoshiro;

pub use xoshiro::Xoshiro256StarStar;
