//! Errors and non-fatal validation warnings.
//!
//! Only bad wire indices and strict parsing can fail; the algebra itself is
//! total. Lossy constructors instead report what they had to paper over
//! through a [`WarningSink`], which by default forwards to [`tracing`].

use thiserror::Error;

/// Fatal errors, reported at the point of the bad input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StabError {
    /// A gate or accessor addressed a wire past the end of a stabilizer.
    #[error("wire index {wire} out of range for stabilizer of length {len}")]
    WireOutOfRange { wire: usize, len: usize },

    /// Strict parsing met a character outside `I`, `X`, `Y`, `Z`.
    #[error("unknown Pauli operator '{0}'")]
    UnknownPauli(char),

    /// Strict parsing of a single Pauli was given no symbol at all.
    #[error("empty Pauli symbol")]
    EmptySymbol,

    /// Strict parsing met an unrecognized gate name.
    #[error("unknown gate type '{0}'")]
    UnknownGate(String),
}

pub type StabResult<T> = Result<T, StabError>;

/// Non-fatal problems with caller input.
///
/// Emitting one of these never aborts the operation that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Warning {
    /// Unrecognized Pauli symbol; identity was used in its place.
    #[error("unknown Pauli operator '{0}', using I")]
    UnknownPauli(char),

    /// Unrecognized gate name; nothing was appended.
    #[error("unknown gate type '{0}', skipped")]
    UnknownGate(String),
}

/// Receiver for [`Warning`]s.
pub trait WarningSink {
    fn warn(&mut self, warning: Warning);
}

/// Forwards warnings to `tracing` at `WARN` level.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&mut self, warning: Warning) {
        match &warning {
            Warning::UnknownPauli(c)
                => tracing::warn!(symbol = %c, "{}", warning),
            Warning::UnknownGate(name)
                => tracing::warn!(gate = %name, "{}", warning),
        }
    }
}

/// Drops every warning.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IgnoreWarnings;

impl WarningSink for IgnoreWarnings {
    fn warn(&mut self, _warning: Warning) { }
}

/// Collects warnings in order of emission.
impl WarningSink for Vec<Warning> {
    fn warn(&mut self, warning: Warning) { self.push(warning); }
}

impl<S> WarningSink for &mut S
where S: WarningSink + ?Sized
{
    fn warn(&mut self, warning: Warning) { (**self).warn(warning); }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            StabError::WireOutOfRange { wire: 3, len: 2 }.to_string(),
            "wire index 3 out of range for stabilizer of length 2",
        );
        assert_eq!(StabError::EmptySymbol.to_string(), "empty Pauli symbol");
        assert_eq!(
            Warning::UnknownPauli('q').to_string(),
            "unknown Pauli operator 'q', using I",
        );
        assert_eq!(
            Warning::UnknownGate("T".into()).to_string(),
            "unknown gate type 'T', skipped",
        );
    }

    #[test]
    fn vec_sink_collects_in_order() {
        fn emit<S: WarningSink>(mut sink: S) {
            sink.warn(Warning::UnknownPauli('a'));
            sink.warn(Warning::UnknownGate("CCX".into()));
        }

        let mut sink: Vec<Warning> = Vec::new();
        emit(&mut sink);
        assert_eq!(
            sink,
            vec![Warning::UnknownPauli('a'), Warning::UnknownGate("CCX".into())],
        );
    }

    #[test]
    fn ignore_and_tracing_sinks_accept() {
        IgnoreWarnings.warn(Warning::UnknownPauli('a'));
        TracingSink.warn(Warning::UnknownGate("T".into()));
    }
}
