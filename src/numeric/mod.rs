// SPDX-License-Identifier: MIT

pub mod rational;
pub mod scalar;

pub use rational::Rational;
pub use scalar::{Real, Scalar};
