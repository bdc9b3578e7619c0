// SPDX-License-Identifier: MIT

/// Real square root. Only floating scalars implement this; exact types
/// stay on the `Scalar`-only surface where no roots are taken.
pub trait Sqrt {
    fn sqrt(&self) -> Self;
}

impl Sqrt for f32 {
    fn sqrt(&self) -> Self {
        f32::sqrt(*self)
    }
}

impl Sqrt for f64 {
    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }
}
