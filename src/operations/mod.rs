// SPDX-License-Identifier: MIT

pub mod abs;
pub mod pow;
pub mod round;
pub mod sqrt;
pub mod trig;
pub mod zero;

pub use abs::Abs;
pub use pow::Sqr;
pub use round::Round;
pub use sqrt::Sqrt;
pub use trig::Trig;
pub use zero::{One, Zero};
