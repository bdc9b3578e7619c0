// SPDX-License-Identifier: MIT

/// Rounding toward negative and positive infinity.
pub trait Round {
    fn floor(&self) -> Self;
    fn ceil(&self) -> Self;
}

macro_rules! impl_round {
    ($($t:ty),*) => {
        $(
            impl Round for $t {
                fn floor(&self) -> Self {
                    <$t>::floor(*self)
                }
                fn ceil(&self) -> Self {
                    <$t>::ceil(*self)
                }
            }
        )*
    };
}

impl_round!(f32, f64);
