// SPDX-License-Identifier: MIT

/// Squaring, without requiring a full power operation.
pub trait Sqr {
    fn sqr(&self) -> Self;
}

macro_rules! impl_sqr {
    ($($t:ty),*) => {
        $(
            impl Sqr for $t {
                fn sqr(&self) -> Self {
                    self * self
                }
            }
        )*
    };
}

impl_sqr!(f32, f64, i32, i64);
