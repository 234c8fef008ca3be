//! The closed family of gates a stabilizer can be propagated through.
//!
//! Each gate acts on a [`Stabilizer`] as a conjugation rule: it reads the
//! operators on the wires it owns, rewrites them, and leaves every other wire
//! alone. `H`, `S`, `CNOT` and `CZ` act as permutations of the Pauli strings
//! on their wires. `XZ` and `ZX` are "collection" gates that fold one wire's
//! operator into another and then reset it to the identity; they are not
//! reversible.

use std::{ fmt, str::FromStr };
use rand::Rng;
use crate::{
    error::{ StabError, StabResult },
    pauli::Pauli,
    stab::Stabilizer,
};

/// Gate names as accepted by [`Circuit::append`][crate::circuit::Circuit::append].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    CNOT,
    CZ,
    H,
    S,
    XZ,
    ZX,
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GateKind {
    type Err = StabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CNOT" => Ok(Self::CNOT),
            "CZ" => Ok(Self::CZ),
            "H" => Ok(Self::H),
            "S" => Ok(Self::S),
            "XZ" => Ok(Self::XZ),
            "ZX" => Ok(Self::ZX),
            _ => Err(StabError::UnknownGate(s.to_string())),
        }
    }
}

impl GateKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::CNOT => "CNOT",
            Self::CZ => "CZ",
            Self::H => "H",
            Self::S => "S",
            Self::XZ => "XZ",
            Self::ZX => "ZX",
        }
    }

    /// Return `true` if gates of this kind act on two wires.
    pub fn is_two_wire(self) -> bool { !matches!(self, Self::H | Self::S) }

    /// Make a gate of this kind. `control` is ignored for single-wire kinds.
    pub fn build(self, target: usize, control: usize) -> Gate {
        match self {
            Self::CNOT => Gate::CNOT(control, target),
            Self::CZ => Gate::CZ(control, target),
            Self::H => Gate::H(target),
            Self::S => Gate::S(target),
            Self::XZ => Gate::XZ(control, target),
            Self::ZX => Gate::ZX(control, target),
        }
    }
}

/// Description of a single gate.
///
/// For two-wire gates the first index is the control and the second the
/// target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Controlled X.
    ///
    /// X/Y on the control spreads an X to the target; Z/Y on the target
    /// spreads a Z back to the control.
    CNOT(usize, usize),
    /// Controlled Z, in this engine's convention.
    ///
    /// Z/Y on the control spreads a Z to the target; X/Y on the target spreads
    /// an X back to the control.
    CZ(usize, usize),
    /// Hadamard: exchanges X and Z.
    H(usize),
    /// Phase: exchanges Z and Y.
    S(usize),
    /// Z/Y on the control spreads a Z to the target, then the control is reset
    /// to I.
    XZ(usize, usize),
    /// X/Y on the control spreads an X to the target, then the control is reset
    /// to I.
    ZX(usize, usize),
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind().name();
        match self.control() {
            Some(c) => write!(f, "{}({}, {})", name, c, self.target()),
            None => write!(f, "{}({})", name, self.target()),
        }
    }
}

impl Gate {
    pub fn kind(&self) -> GateKind {
        match self {
            Self::CNOT(..) => GateKind::CNOT,
            Self::CZ(..) => GateKind::CZ,
            Self::H(..) => GateKind::H,
            Self::S(..) => GateKind::S,
            Self::XZ(..) => GateKind::XZ,
            Self::ZX(..) => GateKind::ZX,
        }
    }

    /// Control wire of a two-wire gate, `None` for single-wire gates.
    pub fn control(&self) -> Option<usize> {
        match *self {
            Self::CNOT(c, _)
            | Self::CZ(c, _)
            | Self::XZ(c, _)
            | Self::ZX(c, _)
            => Some(c),
            Self::H(_) | Self::S(_) => None,
        }
    }

    /// Target wire (the only wire, for single-wire gates).
    pub fn target(&self) -> usize {
        match *self {
            Self::CNOT(_, t)
            | Self::CZ(_, t)
            | Self::XZ(_, t)
            | Self::ZX(_, t)
            | Self::H(t)
            | Self::S(t)
            => t,
        }
    }

    /// All wires the gate touches, control first.
    pub fn wires(&self) -> impl Iterator<Item = usize> {
        self.control().into_iter().chain(std::iter::once(self.target()))
    }

    /// Largest wire index the gate touches.
    pub fn max_wire(&self) -> usize {
        self.control().map_or(self.target(), |c| c.max(self.target()))
    }

    /// Return `true` if `self` acts on two wires.
    pub fn is_two_wire(&self) -> bool { self.kind().is_two_wire() }

    /// Return `true` if `self` is `XZ` or `ZX`.
    pub fn is_collection(&self) -> bool { matches!(self, Self::XZ(..) | Self::ZX(..)) }

    /// Return `true` if `self` is `CNOT`.
    pub fn is_cnot(&self) -> bool { matches!(self, Self::CNOT(..)) }

    /// Return `true` if `self` is `CZ`.
    pub fn is_cz(&self) -> bool { matches!(self, Self::CZ(..)) }

    /// Return `true` if `self` is `H`.
    pub fn is_h(&self) -> bool { matches!(self, Self::H(..)) }

    /// Return `true` if `self` is `S`.
    pub fn is_s(&self) -> bool { matches!(self, Self::S(..)) }

    /// Sample a random gate on wires `0..nbits`, with distinct wires for
    /// two-wire gates.
    ///
    /// *Panics if `nbits < 2`.*
    pub fn sample<R>(nbits: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        assert!(nbits >= 2, "Gate::sample: need at least two wires");
        let a = rng.gen_range(0..nbits);
        let b = (a + rng.gen_range(1..nbits)) % nbits;
        match rng.gen_range(0..6_usize) {
            0 => Self::CNOT(a, b),
            1 => Self::CZ(a, b),
            2 => Self::H(a),
            3 => Self::S(a),
            4 => Self::XZ(a, b),
            5 => Self::ZX(a, b),
            _ => unreachable!(),
        }
    }

    /// Propagate `stab` through the gate.
    ///
    /// Two-wire rules decide which updates to make from the values on entry,
    /// then multiply into the target before the control. Fails without
    /// modifying anything if a wire is out of range.
    pub fn apply(&self, mut stab: Stabilizer) -> StabResult<Stabilizer> {
        match *self {
            Self::CNOT(c, t) => {
                let (pc, pt) = (stab.get(c)?, stab.get(t)?);
                if pc.has_x() { stab.mul_at(t, Pauli::X)?; }
                if pt.has_z() { stab.mul_at(c, Pauli::Z)?; }
            },
            Self::CZ(c, t) => {
                let (pc, pt) = (stab.get(c)?, stab.get(t)?);
                if pc.has_z() { stab.mul_at(t, Pauli::Z)?; }
                if pt.has_x() { stab.mul_at(c, Pauli::X)?; }
            },
            Self::H(t) => {
                match stab.get(t)? {
                    Pauli::X => { stab.set(t, Pauli::Z)?; },
                    Pauli::Z => { stab.set(t, Pauli::X)?; },
                    Pauli::I | Pauli::Y => { },
                }
            },
            Self::S(t) => {
                match stab.get(t)? {
                    Pauli::Z => { stab.set(t, Pauli::Y)?; },
                    Pauli::Y => { stab.set(t, Pauli::Z)?; },
                    Pauli::I | Pauli::X => { },
                }
            },
            Self::XZ(c, t) => {
                let (pc, _) = (stab.get(c)?, stab.get(t)?);
                if pc.has_z() { stab.mul_at(t, Pauli::Z)?; }
                stab.set(c, Pauli::I)?;
            },
            Self::ZX(c, t) => {
                let (pc, _) = (stab.get(c)?, stab.get(t)?);
                if pc.has_x() { stab.mul_at(t, Pauli::X)?; }
                stab.set(c, Pauli::I)?;
            },
        }
        Ok(stab)
    }
}
