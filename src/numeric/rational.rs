// SPDX-License-Identifier: MIT

use num_traits::ToPrimitive;

use crate::numeric::scalar::Scalar;
use crate::operations::{Abs, One, Sqr, Zero};

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Exact rational scalar backed by `rug::Rational`.
///
/// Implements [`Scalar`] but not [`crate::numeric::Real`]: no square root
/// exists in general, so it is usable wherever the kernel stays in ring
/// arithmetic (determinants, inverses, dot and cross products, containment
/// and intersection predicates) with exact results.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(pub rug::Rational);

impl Rational {
    pub fn new(num: i32, den: i32) -> Self {
        Rational(rug::Rational::from((num, den)))
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, rhs: Rational) -> Rational {
        Rational(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, rhs: Rational) -> Rational {
        Rational(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, rhs: Rational) -> Rational {
        Rational(self.0 * rhs.0)
    }
}

impl Div for Rational {
    type Output = Rational;
    fn div(self, rhs: Rational) -> Rational {
        Rational(self.0 / rhs.0)
    }
}

impl<'a> AddAssign<&'a Rational> for Rational {
    fn add_assign(&mut self, rhs: &'a Rational) {
        self.0 += &rhs.0;
    }
}

impl<'a> SubAssign<&'a Rational> for Rational {
    fn sub_assign(&mut self, rhs: &'a Rational) {
        self.0 -= &rhs.0;
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational(rug::Rational::new())
    }
    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational(rug::Rational::from(1))
    }
}

impl Abs for Rational {
    fn abs(&self) -> Self {
        Rational(self.0.clone().abs())
    }
    fn sign(&self) -> i8 {
        match self.0.cmp0() {
            Ordering::Greater => 1,
            Ordering::Less => -1,
            Ordering::Equal => 0,
        }
    }
}

impl Sqr for Rational {
    fn sqr(&self) -> Self {
        Rational(self.0.clone() * &self.0)
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        Some(self.0.to_f64() as i64)
    }
    fn to_u64(&self) -> Option<u64> {
        Some(self.0.to_f64() as u64)
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Rational(rug::Rational::from(value))
    }
}

impl Scalar for Rational {
    fn from_num_den(num: i32, den: i32) -> Self {
        Rational::new(num, den)
    }
}
