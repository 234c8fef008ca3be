//! Single-qubit Pauli operators, modulo phase.
//!
//! Products are tracked only up to the overall ±1/±i factor, so the four
//! labels close under multiplication into the Klein four-group: every
//! non-identity element is its own inverse and the product of two distinct
//! non-identity elements is the third.

use std::{
    fmt,
    ops::{ Mul, MulAssign },
    str::FromStr,
};
use rand::Rng;
use crate::error::{ StabError, TracingSink, Warning, WarningSink };

/// A single-qubit Pauli operator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pauli {
    /// Identity
    #[default]
    I,
    /// σ<sub>*x*</sub>
    X,
    /// σ<sub>*y*</sub>
    Y,
    /// σ<sub>*z*</sub>
    Z,
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::I => write!(f, "{}", if f.alternate() { "." } else { "I" }),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl Pauli {
    /// Parse a canonical symbol, falling back to [`Pauli::I`] on anything else.
    ///
    /// Unrecognized symbols are reported to `sink` as
    /// [`Warning::UnknownPauli`].
    pub fn from_char_with<S>(c: char, mut sink: S) -> Self
    where S: WarningSink
    {
        Self::try_from(c)
            .unwrap_or_else(|_| {
                sink.warn(Warning::UnknownPauli(c));
                Self::I
            })
    }

    /// Like [`Self::from_char_with`], reporting through [`TracingSink`].
    pub fn from_char(c: char) -> Self { Self::from_char_with(c, TracingSink) }

    /// Canonical single-character label.
    pub fn symbol(self) -> char {
        match self {
            Self::I => 'I',
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }

    /// Return `true` if `self` is `I`.
    pub fn is_identity(self) -> bool { self == Self::I }

    /// Return `true` if `self` has an X component, i.e. is `X` or `Y`.
    pub fn has_x(self) -> bool { matches!(self, Self::X | Self::Y) }

    /// Return `true` if `self` has a Z component, i.e. is `Z` or `Y`.
    pub fn has_z(self) -> bool { matches!(self, Self::Z | Self::Y) }

    /// Return `true` if `self` and `other` commute.
    pub fn commutes_with(self, other: Self) -> bool {
        match (self, other) {
            (_, Self::I) => true,
            (Self::I, _) => true,
            (a, b) if a == b => true,
            _ => false,
        }
    }

    /// Convert from an index modulo 4, in the order `I`, `X`, `Y`, `Z`.
    pub fn from_int(u: usize) -> Self {
        match u % 4 {
            0 => Self::I,
            1 => Self::X,
            2 => Self::Y,
            3 => Self::Z,
            _ => unreachable!(),
        }
    }

    /// Sample uniformly from all four operators.
    pub fn random<R>(rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        Self::from_int(rng.gen_range(0..4))
    }
}

impl TryFrom<char> for Pauli {
    type Error = StabError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'I' => Ok(Self::I),
            'X' => Ok(Self::X),
            'Y' => Ok(Self::Y),
            'Z' => Ok(Self::Z),
            _ => Err(StabError::UnknownPauli(c)),
        }
    }
}

impl FromStr for Pauli {
    type Err = StabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            (Some(_), Some(c)) => Err(StabError::UnknownPauli(c)),
            (None, _) => Err(StabError::EmptySymbol),
        }
    }
}

impl Mul for Pauli {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        use Pauli::*;
        match (self, rhs) {
            (I, b) => b,
            (a, I) => a,
            (a, b) if a == b => I,
            (X, Y) | (Y, X) => Z,
            (Y, Z) | (Z, Y) => X,
            (Z, X) | (X, Z) => Y,
            _ => unreachable!(),
        }
    }
}

impl MulAssign for Pauli {
    fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
}
