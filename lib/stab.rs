//! *N*-qubit Pauli strings, propagated one generator at a time.
//!
//! A [`Stabilizer`] is a plain ordered tuple of [`Pauli`]s, one per wire, with
//! no phase. Its length is fixed when it is built; gates only ever rewrite
//! entries in place.
//!
//! # Example
//! ```
//! use stab_prop::stab::Stabilizer;
//!
//! let a: Stabilizer = "XYZI".parse().unwrap();
//! let b: Stabilizer = "ZZZ".parse().unwrap();
//!
//! // pointwise product over the common prefix only
//! assert_eq!((&a * &b).to_string(), "YXI");
//! ```

use std::{
    fmt,
    ops::Mul,
    str::FromStr,
};
use rand::Rng;
use crate::{
    error::{ StabError, StabResult, TracingSink, WarningSink },
    pauli::Pauli,
};

/// An ordered tuple of single-qubit Paulis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Stabilizer(Vec<Pauli>);

impl fmt::Display for Stabilizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|p| fmt::Display::fmt(p, f))
    }
}

impl From<Vec<Pauli>> for Stabilizer {
    fn from(ops: Vec<Pauli>) -> Self { Self(ops) }
}

impl FromIterator<Pauli> for Stabilizer {
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = Pauli>
    {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Stabilizer {
    type Item = &'a Pauli;
    type IntoIter = <&'a Vec<Pauli> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl IntoIterator for Stabilizer {
    type Item = Pauli;
    type IntoIter = <Vec<Pauli> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

/// Strict parsing: the first unrecognized symbol is an error.
impl FromStr for Stabilizer {
    type Err = StabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Pauli::try_from).collect()
    }
}

impl Stabilizer {
    pub fn new(ops: Vec<Pauli>) -> Self { Self(ops) }

    /// All-identity string over `n` wires.
    pub fn identity(n: usize) -> Self { Self(vec![Pauli::I; n]) }

    /// Build one [`Pauli`] per character of `s`.
    ///
    /// Unrecognized characters become `I` and are reported to `sink`; the
    /// result always has one entry per character.
    pub fn from_symbols_with<S>(s: &str, mut sink: S) -> Self
    where S: WarningSink
    {
        s.chars().map(|c| Pauli::from_char_with(c, &mut sink)).collect()
    }

    /// Like [`Self::from_symbols_with`], reporting through [`TracingSink`].
    pub fn from_symbols(s: &str) -> Self {
        Self::from_symbols_with(s, TracingSink)
    }

    /// Sample a uniformly random string over `n` wires.
    pub fn random<R>(n: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        (0..n).map(|_| Pauli::random(rng)).collect()
    }

    /// Number of wires.
    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn as_slice(&self) -> &[Pauli] { &self.0 }

    pub fn iter(&self) -> std::slice::Iter<'_, Pauli> { self.0.iter() }

    fn check(&self, wire: usize) -> StabResult<()> {
        if wire < self.0.len() {
            Ok(())
        } else {
            Err(StabError::WireOutOfRange { wire, len: self.0.len() })
        }
    }

    /// Get the operator on `wire`.
    pub fn get(&self, wire: usize) -> StabResult<Pauli> {
        self.check(wire)?;
        Ok(self.0[wire])
    }

    /// Overwrite the operator on `wire`.
    pub fn set(&mut self, wire: usize, p: Pauli) -> StabResult<&mut Self> {
        self.check(wire)?;
        self.0[wire] = p;
        Ok(self)
    }

    /// Right-multiply the operator on `wire` by `p`.
    pub fn mul_at(&mut self, wire: usize, p: Pauli) -> StabResult<&mut Self> {
        self.check(wire)?;
        self.0[wire] *= p;
        Ok(self)
    }

    /// Number of non-identity entries.
    pub fn weight(&self) -> usize {
        self.0.iter().filter(|p| !p.is_identity()).count()
    }

    /// Return `true` if `self` and `other` commute as operators.
    ///
    /// Only the common prefix is considered, consistent with [`Mul`].
    pub fn commutes_with(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0)
            .filter(|(a, b)| !a.commutes_with(**b))
            .count() % 2 == 0
    }
}

/// Pointwise product over the common prefix; entries past the shorter operand
/// are dropped.
impl Mul<&Stabilizer> for &Stabilizer {
    type Output = Stabilizer;

    fn mul(self, rhs: &Stabilizer) -> Self::Output {
        self.0.iter().zip(&rhs.0).map(|(a, b)| *a * *b).collect()
    }
}

impl Mul for Stabilizer {
    type Output = Stabilizer;

    fn mul(self, rhs: Stabilizer) -> Self::Output { &self * &rhs }
}
