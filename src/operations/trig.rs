// SPDX-License-Identifier: MIT

/// Trigonometric operations with standard real-valued semantics.
pub trait Trig {
    fn sin(&self) -> Self;
    fn cos(&self) -> Self;
    fn atan2(&self, x: &Self) -> Self;
    fn asin(&self) -> Self;
    fn acos(&self) -> Self;
}

macro_rules! impl_trig {
    ($($t:ty),*) => {
        $(
            impl Trig for $t {
                fn sin(&self) -> Self {
                    <$t>::sin(*self)
                }
                fn cos(&self) -> Self {
                    <$t>::cos(*self)
                }
                fn atan2(&self, x: &Self) -> Self {
                    <$t>::atan2(*self, *x)
                }
                fn asin(&self) -> Self {
                    <$t>::asin(*self)
                }
                fn acos(&self) -> Self {
                    <$t>::acos(*self)
                }
            }
        )*
    };
}

impl_trig!(f32, f64);
