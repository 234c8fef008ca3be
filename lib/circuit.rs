//! Append-only gate sequences and the fold that drives a stabilizer through
//! them.
//!
//! # Example
//! ```
//! use stab_prop::{ circuit::Circuit, stab::Stabilizer };
//!
//! let mut circuit = Circuit::new();
//! circuit.append("H", 0, 0).append("CNOT", 1, 0);
//! assert_eq!(circuit.to_string(), "H(0) CNOT(0, 1)");
//!
//! let out = circuit.simulate(Stabilizer::from_symbols("ZI")).unwrap();
//! assert_eq!(out.to_string(), "XX");
//! ```

use std::fmt;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::{ debug, trace };
use crate::{
    error::{ StabResult, TracingSink, Warning, WarningSink },
    gate::{ Gate, GateKind },
    stab::Stabilizer,
};

/// An ordered list of [`Gate`]s plus the largest wire index seen so far.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Circuit {
    gates: Vec<Gate>,
    max_wire: usize,
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gates.iter().join(" "))
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Gate;
    type IntoIter = <&'a Vec<Gate> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter { self.gates.iter() }
}

impl FromIterator<Gate> for Circuit {
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = Gate>
    {
        let mut circuit = Self::new();
        circuit.extend(iter);
        circuit
    }
}

impl Extend<Gate> for Circuit {
    fn extend<I>(&mut self, iter: I)
    where I: IntoIterator<Item = Gate>
    {
        iter.into_iter().for_each(|gate| { self.push(gate); });
    }
}

impl Circuit {
    /// Create a new, empty circuit.
    pub fn new() -> Self { Self::default() }

    /// Append a gate by name.
    ///
    /// `control` is ignored by single-wire gates, but is still counted
    /// towards [`Self::num_bits`]; pass 0 for those. An unrecognized `kind`
    /// is reported to `sink` as [`Warning::UnknownGate`] and nothing is
    /// appended, though the wire count is updated all the same.
    pub fn append_with<S>(
        &mut self,
        kind: &str,
        target: usize,
        control: usize,
        mut sink: S,
    ) -> &mut Self
    where S: WarningSink
    {
        self.max_wire = self.max_wire.max(target).max(control);
        match kind.parse::<GateKind>() {
            Ok(kind) => { self.gates.push(kind.build(target, control)); },
            Err(_) => { sink.warn(Warning::UnknownGate(kind.to_string())); },
        }
        self
    }

    /// Like [`Self::append_with`], reporting through [`TracingSink`].
    pub fn append(&mut self, kind: &str, target: usize, control: usize)
        -> &mut Self
    {
        self.append_with(kind, target, control, TracingSink)
    }

    /// Append an already-built gate. Only the wires the gate actually uses
    /// count towards [`Self::num_bits`].
    pub fn push(&mut self, gate: Gate) -> &mut Self {
        self.max_wire = self.max_wire.max(gate.max_wire());
        self.gates.push(gate);
        self
    }

    /// Number of wires, i.e. one more than the largest wire index seen.
    pub fn num_bits(&self) -> usize { self.max_wire + 1 }

    pub fn num_gates(&self) -> usize { self.gates.len() }

    pub fn is_empty(&self) -> bool { self.gates.is_empty() }

    pub fn gates(&self) -> &[Gate] { &self.gates }

    pub fn iter(&self) -> std::slice::Iter<'_, Gate> { self.gates.iter() }

    /// Propagate `stab` through every gate in order.
    ///
    /// `stab` should span at least [`Self::num_bits`] wires; the first gate
    /// that reaches past its end fails with
    /// [`StabError::WireOutOfRange`][crate::error::StabError::WireOutOfRange].
    pub fn simulate(&self, stab: Stabilizer) -> StabResult<Stabilizer> {
        debug!(
            gates = self.gates.len(),
            wires = stab.len(),
            input = %stab,
            "simulate"
        );
        self.gates.iter()
            .try_fold(stab, |acc, gate| {
                let out = gate.apply(acc)?;
                trace!(%gate, output = %out);
                Ok(out)
            })
    }

    /// Run [`Self::simulate`] on each of `stabs` independently, in parallel.
    ///
    /// Results are returned in input order.
    pub fn simulate_batch<I>(&self, stabs: I) -> Vec<StabResult<Stabilizer>>
    where I: IntoParallelIterator<Item = Stabilizer>
    {
        stabs.into_par_iter()
            .map(|stab| self.simulate(stab))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{ rngs::StdRng, SeedableRng };
    use crate::error::{ IgnoreWarnings, StabError };

    fn stab(s: &str) -> Stabilizer { s.parse().unwrap() }

    fn single_cnot() -> Circuit {
        let mut circuit = Circuit::new();
        circuit.append("CNOT", 1, 0);
        circuit
    }

    #[test]
    fn cnot_scenarios() {
        let circuit = single_cnot();
        assert_eq!(circuit.gates(), &[Gate::CNOT(0, 1)]);
        for (input, expected) in
            [("IX", "IX"), ("XI", "XX"), ("IZ", "ZZ"), ("ZI", "ZI")]
        {
            assert_eq!(circuit.simulate(stab(input)), Ok(stab(expected)));
        }
    }

    #[test]
    fn empty_circuit_is_identity() {
        let circuit = Circuit::new();
        assert!(circuit.is_empty());
        assert_eq!(circuit.num_bits(), 1);
        assert_eq!(circuit.num_gates(), 0);
        assert_eq!(circuit.simulate(stab("XYZ")), Ok(stab("XYZ")));
        assert_eq!(circuit.to_string(), "");
    }

    #[test]
    fn gates_apply_in_order() {
        let mut circuit = Circuit::new();
        circuit
            .append("H", 0, 0)
            .append("CNOT", 1, 0)
            .append("S", 1, 0)
            .append("ZX", 2, 1);
        assert_eq!(circuit.num_gates(), 4);
        assert_eq!(circuit.num_bits(), 3);
        // ZII -H-> XII -CNOT-> XXI -S-> XXI -ZX-> XIX
        assert_eq!(circuit.simulate(stab("ZII")), Ok(stab("XIX")));
        assert_eq!(circuit.to_string(), "H(0) CNOT(0, 1) S(1) ZX(1, 2)");
    }

    #[test]
    fn unknown_gate_is_skipped_with_warning() {
        let mut warnings: Vec<Warning> = Vec::new();
        let mut circuit = Circuit::new();
        circuit
            .append_with("T", 4, 0, &mut warnings)
            .append_with("H", 1, 0, &mut warnings);
        assert_eq!(circuit.gates(), &[Gate::H(1)]);
        assert_eq!(circuit.num_bits(), 5);
        assert_eq!(warnings, vec![Warning::UnknownGate("T".into())]);
    }

    #[test]
    fn control_argument_counts_for_single_wire_gates() {
        let mut circuit = Circuit::new();
        circuit.append_with("H", 0, 3, IgnoreWarnings);
        assert_eq!(circuit.gates(), &[Gate::H(0)]);
        assert_eq!(circuit.num_bits(), 4);

        let mut typed = Circuit::new();
        typed.push(Gate::H(0));
        assert_eq!(typed.num_bits(), 1);
        typed.push(Gate::CZ(5, 2));
        assert_eq!(typed.num_bits(), 6);
    }

    #[test]
    fn short_stabilizer_fails() {
        let circuit = single_cnot();
        assert_eq!(
            circuit.simulate(stab("X")),
            Err(StabError::WireOutOfRange { wire: 1, len: 1 }),
        );
    }

    #[test]
    fn collect_and_extend() {
        let mut circuit: Circuit = [Gate::H(0), Gate::CNOT(0, 2)].into_iter().collect();
        circuit.extend([Gate::S(1)]);
        assert_eq!(circuit.num_gates(), 3);
        assert_eq!(circuit.num_bits(), 3);
        assert_eq!((&circuit).into_iter().count(), 3);
        assert_eq!(circuit.iter().filter(|g| g.is_two_wire()).count(), 1);
    }

    #[test]
    fn batch_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(10546);
        let circuit: Circuit = (0..50).map(|_| Gate::sample(4, &mut rng)).collect();
        let inputs: Vec<Stabilizer>
            = (0..32).map(|_| Stabilizer::random(4, &mut rng)).collect();
        let expected: Vec<StabResult<Stabilizer>>
            = inputs.iter().cloned().map(|s| circuit.simulate(s)).collect();
        assert_eq!(circuit.simulate_batch(inputs), expected);
    }
}
