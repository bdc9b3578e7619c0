// SPDX-License-Identifier: MIT

/// Absolute value and sign extraction.
pub trait Abs {
    fn abs(&self) -> Self;

    /// Returns -1, 0, or +1.
    fn sign(&self) -> i8;
}

macro_rules! impl_abs {
    ($($t:ty => $zero:expr;)*) => {
        $(
            impl Abs for $t {
                fn abs(&self) -> Self {
                    <$t>::abs(*self)
                }
                fn sign(&self) -> i8 {
                    if *self > $zero {
                        1
                    } else if *self < $zero {
                        -1
                    } else {
                        0
                    }
                }
            }
        )*
    };
}

impl_abs! {
    f32 => 0.0;
    f64 => 0.0;
    i32 => 0;
    i64 => 0;
}
