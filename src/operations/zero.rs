// SPDX-License-Identifier: MIT

/// Additive identity with an exact zero test.
///
/// `is_zero` compares exactly; tolerance-based comparison belongs to the
/// geometry layer, which takes an explicit epsilon.
pub trait Zero {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

/// Multiplicative identity.
pub trait One {
    fn one() -> Self;
}

macro_rules! impl_zero_one {
    ($($t:ty => $zero:expr, $one:expr;)*) => {
        $(
            impl Zero for $t {
                fn zero() -> Self {
                    $zero
                }
                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
            impl One for $t {
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_zero_one! {
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
    i32 => 0, 1;
    i64 => 0, 1;
}
