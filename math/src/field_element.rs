use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;
use std::str::FromStr;

use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;

use rand::distr::Distribution;
use rand::distr::StandardUniform;
use rand::Rng;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use super::error::{FieldError, ParseFieldElementError};

/// Base field element ∈ ℤ_{2147483647}.
///
/// The value is kept canonical, i.e. in `[0, P)`. Products of two
/// canonical values fit in a `u64`, so every operation reduces through
/// 64-bit intermediates and never overflows.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq)]
pub struct FieldElement(u32);

/// Simplifies constructing [FieldElement]s.
///
/// The type [`FieldElement`] must be in scope for this macro to work.
/// See [`FieldElement::from`] for supported types.
///
/// # Examples
///
/// ```
/// use math::prelude::*;
/// let a = fe!(42);
/// let b = fe!(-12); // correctly translates to `FieldElement::P - 12`
/// let c = fe!(42 - 12);
/// assert_eq!(a + b, c);
///```
#[macro_export]
macro_rules! fe {
    ($value:expr) => {
        $crate::field_element::FieldElement::from($value)
    };
}

/// Simplifies constructing vectors of [FieldElement]s.
///
/// The type [`FieldElement`] must be in scope for this macro to work. See also [`fe!`].
///
/// # Examples
///
/// ```
/// use math::prelude::*;
/// let a = fe_vec![1, 2, 3];
/// let b = vec![fe!(1), fe!(2), fe!(3)];
/// assert_eq!(a, b);
/// ```
#[macro_export]
macro_rules! fe_vec {
    ($b:expr; $n:expr) => {
        vec![$crate::field_element::FieldElement::from($b); $n]
    };
    ($($b:expr),* $(,)?) => {
        vec![$($crate::field_element::FieldElement::from($b)),*]
    };
}

impl Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::new(u32::deserialize(deserializer)?))
    }
}

impl FieldElement {
    /// Mersenne prime modulus: 2^31 - 1
    pub const P: u32 = 2_147_483_647;
    pub const MAX: u32 = Self::P - 1;

    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value % Self::P)
    }

    /// Construct a new base field element iff the given value is
    /// [canonical][Self::is_canonical], an error otherwise.
    fn try_new(v: u64) -> Result<Self, ParseFieldElementError> {
        Self::is_canonical(v)
            .then(|| Self(v as u32))
            .ok_or(ParseFieldElementError::NotCanonical(v))
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Square-and-multiply exponentiation, O(log exp) multiplications.
    #[must_use]
    #[inline]
    pub const fn mod_pow(&self, exp: u32) -> Self {
        self.mod_pow_u64(exp as u64)
    }

    /// [`Self::mod_pow`] for exponents that do not fit in a `u32`.
    #[must_use]
    pub const fn mod_pow_u64(&self, mut exp: u64) -> Self {
        let p = Self::P as u64;
        let mut base = self.0 as u64;
        let mut acc: u64 = 1;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base % p;
            }
            base = base * base % p;
            exp >>= 1;
        }
        Self(acc as u32)
    }

    /// Multiplicative inverse via Fermat's little theorem:
    /// a^(p-1) = 1 mod p, so a^(-1) = a^(p-2) mod p.
    ///
    /// Zero has no inverse; asking for one is an error, never a silent 0.
    #[inline]
    pub fn inverse(&self) -> Result<Self, FieldError> {
        if self.0 == 0 {
            return Err(FieldError::ZeroInverse);
        }
        Ok(self.mod_pow(Self::P - 2))
    }

    #[inline]
    pub const fn is_canonical(x: u64) -> bool {
        x < Self::P as u64
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Plain decimal: this is the wire representation of share values.
        write!(f, "{}", self.0)
    }
}

impl FromStr for FieldElement {
    type Err = ParseFieldElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: u64 =
            s.parse().map_err(ParseFieldElementError::ParseU64Error)?;
        Self::try_new(parsed)
    }
}

impl From<usize> for FieldElement {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self((value % Self::P as u64) as u32)
    }
}

macro_rules! impl_from_small_unsigned_int_for_fe {
    ($($t:ident),+ $(,)?) => {$(
        impl From<$t> for FieldElement {
            fn from(value: $t) -> Self {
                Self::new(u32::from(value))
            }
        }
    )+};
}

impl_from_small_unsigned_int_for_fe!(u8, u16);

impl From<u32> for FieldElement {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<i64> for FieldElement {
    fn from(value: i64) -> Self {
        let remainder = value.rem_euclid(Self::P as i64);
        Self(remainder as u32)
    }
}

macro_rules! impl_from_small_signed_int_for_fe {
    ($($t:ident),+ $(,)?) => {$(
        impl From<$t> for FieldElement {
            fn from(value: $t) -> Self {
                i64::from(value).into()
            }
        }
    )+};
}

impl_from_small_signed_int_for_fe!(i8, i16, i32);

impl From<FieldElement> for u32 {
    fn from(elem: FieldElement) -> Self {
        elem.value()
    }
}

impl From<FieldElement> for u64 {
    fn from(elem: FieldElement) -> Self {
        elem.value() as u64
    }
}

impl Zero for FieldElement {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl ConstZero for FieldElement {
    const ZERO: Self = Self(0);
}

impl One for FieldElement {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl ConstOne for FieldElement {
    const ONE: Self = Self(1);
}

impl Add for FieldElement {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        let sum = self.0 as u64 + rhs.0 as u64;
        if sum >= Self::P as u64 {
            Self((sum - Self::P as u64) as u32)
        } else {
            Self(sum as u32)
        }
    }
}

impl AddAssign for FieldElement {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl SubAssign for FieldElement {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul for FieldElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(((self.0 as u64 * rhs.0 as u64) % Self::P as u64) as u32)
    }
}

impl Neg for FieldElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl Sub for FieldElement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self(self.0 + Self::P - rhs.0)
        }
    }
}

impl Distribution<FieldElement> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        FieldElement(rng.random_range(0..FieldElement::P))
    }
}
