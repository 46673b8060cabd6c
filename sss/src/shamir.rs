//! Shamir's (k,n) secret sharing over the prime field.
//!
//! A secret is encoded as the constant term of a random polynomial of
//! degree k-1; the n shares are evaluations at x = 1..=n. Any k shares
//! determine the polynomial, hence the constant term; k-1 shares leave
//! it information-theoretically undetermined.

use std::fmt;
use std::str::FromStr;

use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use math::prelude::{FieldElement, Polynomial};

use crate::codec;
use crate::error::{Result, ShamirError};
use crate::params::validate_threshold_config;

/// One evaluation point of the sharing polynomial.
///
/// Shares are independent and unordered; the index is the x-coordinate
/// and must be a nonzero canonical field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    index: u32,
    value: FieldElement,
}

impl Share {
    pub fn new(index: u32, value: FieldElement) -> Result<Self> {
        if index == 0 || !FieldElement::is_canonical(index as u64) {
            return Err(ShamirError::InvalidShareIndex(index));
        }

        Ok(Share { index, value })
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn value(&self) -> FieldElement {
        self.value
    }

    fn x(&self) -> FieldElement {
        FieldElement::new(self.index)
    }
}

/// Wire format: `"<index> <value>"`, both decimal.
impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.index, self.value)
    }
}

impl FromStr for Share {
    type Err = ShamirError;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();
        let (Some(index), Some(value), None) =
            (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(ShamirError::MalformedShare(s.to_string()));
        };

        let index: u32 = index
            .parse()
            .map_err(|_| ShamirError::MalformedShare(s.to_string()))?;
        let value: FieldElement =
            value.parse().map_err(math::error::MathError::from)?;

        Share::new(index, value)
    }
}

/// A fixed (threshold, share_count) configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShamirScheme {
    threshold: usize,
    share_count: usize,
}

impl ShamirScheme {
    /// Initialize the scheme, rejecting unusable configurations before
    /// any arithmetic happens.
    pub fn new(threshold: usize, share_count: usize) -> Result<Self> {
        if !validate_threshold_config(threshold, share_count) {
            return Err(ShamirError::InvalidThreshold {
                threshold,
                share_count,
            });
        }

        Ok(ShamirScheme {
            threshold,
            share_count,
        })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn share_count(&self) -> usize {
        self.share_count
    }

    /// Split `secret` into `share_count` shares using the process
    /// CSPRNG.
    pub fn split(&self, secret: &[u8]) -> Result<Vec<Share>> {
        self.split_with(secret, &mut rand::rng())
    }

    /// Split `secret` with a caller-supplied randomness source.
    ///
    /// The `CryptoRng` bound is load-bearing: a guessable generator
    /// lets an attacker recover the polynomial from a single share.
    /// The coefficient vector is local to this call and is dropped
    /// before it returns.
    pub fn split_with<R>(&self, secret: &[u8], rng: &mut R) -> Result<Vec<Share>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let poly = self.sharing_polynomial(codec::encode(secret)?, rng);

        (1..=self.share_count as u32)
            .map(|index| {
                Share::new(index, poly.evaluate(FieldElement::new(index)))
            })
            .collect()
    }

    /// Recover the secret from at least `threshold` shares.
    ///
    /// Only the first `threshold` shares participate; their indices
    /// must be pairwise distinct.
    pub fn reconstruct(&self, shares: &[Share]) -> Result<Vec<u8>> {
        if shares.len() < self.threshold {
            return Err(ShamirError::InsufficientShares {
                required: self.threshold,
                provided: shares.len(),
            });
        }

        let active = &shares[..self.threshold];
        for (i, share) in active.iter().enumerate() {
            if active[..i].iter().any(|seen| seen.index == share.index) {
                return Err(ShamirError::DuplicateShareIndex(share.index));
            }
        }

        let points: Vec<(FieldElement, FieldElement)> =
            active.iter().map(|share| (share.x(), share.value)).collect();
        let secret_value = Polynomial::interpolate_at_zero(&points)?;

        Ok(codec::decode(secret_value))
    }

    fn sharing_polynomial<R>(
        &self,
        constant: FieldElement,
        rng: &mut R,
    ) -> Polynomial
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let coefficients: Vec<FieldElement> = std::iter::once(constant)
            .chain((1..self.threshold).map(|_| rng.random()))
            .collect();
        Polynomial::new(coefficients)
    }
}
