//! Error type definitions for signature operations

/// Primary error type for signature operations
///
/// Every failure mode of verification is a distinct variant so callers can
/// tell a malformed input from an off-curve encoding or a forged signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A signature or key does not have its fixed encoded size
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A 32-byte point encoding does not decode to a curve point
    PointNotOnCurve { context: &'static str },

    /// Decoding succeeded but the verification equation does not hold
    VerificationFailed { context: &'static str },
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::PointNotOnCurve { .. } => Self::PointNotOnCurve { context },
            Self::VerificationFailed { .. } => Self::VerificationFailed { context },
        }
    }

    /// Returns true for errors raised by the verification equation or by
    /// point decoding, as opposed to malformed input sizes
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            Self::PointNotOnCurve { .. } | Self::VerificationFailed { .. }
        )
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::PointNotOnCurve { context } => {
                write!(f, "{}: decoding point that is not on curve", context)
            }
            Self::VerificationFailed { context } => {
                write!(f, "{}: signature does not pass verification", context)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = Error::InvalidLength {
            context: "Ed25519 signature",
            expected: 64,
            actual: 63,
        };
        assert_eq!(
            err.to_string(),
            "Ed25519 signature: invalid length (expected 64, got 63)"
        );

        let err = Error::PointNotOnCurve {
            context: "Ed25519 public key",
        };
        assert!(err.to_string().contains("not on curve"));
    }

    #[test]
    fn test_with_context_keeps_variant() {
        let err = Error::VerificationFailed { context: "inner" }.with_context("outer");
        assert_eq!(err, Error::VerificationFailed { context: "outer" });

        let err = Error::InvalidLength {
            context: "inner",
            expected: 32,
            actual: 3,
        }
        .with_context("outer");
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "outer",
                expected: 32,
                actual: 3
            }
        );
    }

    #[test]
    fn test_authentication_failure_classification() {
        assert!(Error::PointNotOnCurve { context: "R" }.is_authentication_failure());
        assert!(Error::VerificationFailed { context: "sig" }.is_authentication_failure());
        assert!(!Error::InvalidLength {
            context: "sig",
            expected: 64,
            actual: 0
        }
        .is_authentication_failure());
    }
}
