#![no_std]

//! BMI Core - Body Mass Index computation and classification
//!
//! This crate provides the pure numeric evaluation: computing the index
//! from a weight and a height, rounding it for display and classifying it
//! into one of three fixed bands. It performs no I/O and holds no state.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod classification;
pub mod error;
pub mod evaluation;
pub mod rounding;

pub use classification::*;
pub use error::*;
pub use evaluation::*;
pub use rounding::round_half_away_from_zero;
