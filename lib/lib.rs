//! Propagation of a single Pauli string through a circuit of Clifford-style
//! gates.
//!
//! Instead of evolving a state, this tracks one stabilizer generator: a tensor
//! product of single-qubit Paulis with its phase discarded. Each gate maps the
//! Pauli string on its wires to another Pauli string (see [`gate`]), and a
//! [`circuit::Circuit`] folds those maps over its gates in order.
//!
//! Malformed input is handled in two tiers. Bad wire indices and strict
//! parsing fail with [`error::StabError`]. The lossy constructors
//! ([`pauli::Pauli::from_char`], [`stab::Stabilizer::from_symbols`],
//! [`circuit::Circuit::append`]) substitute a default and report an
//! [`error::Warning`] to a [`error::WarningSink`] instead.

pub mod error;
pub mod pauli;
pub mod stab;
pub mod gate;
pub mod circuit;

pub use error::{ StabError, StabResult, Warning, WarningSink };
pub use pauli::Pauli;
pub use stab::Stabilizer;
pub use gate::{ Gate, GateKind };
pub use circuit::Circuit;
