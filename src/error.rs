//! Decode errors.

use core::fmt;

use crate::kind::FieldKind;

/// A Channel field carried a frequency with no 2.4 GHz channel number.
/// Holds the raw MHz value as read from the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownFrequency(pub u16);

impl fmt::Display for UnknownFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown frequency {} MHz", self.0)
    }
}

impl core::error::Error for UnknownFrequency {}

/// Why a single field failed to decode.
///
/// The three kinds never overlap. A Channel field reports an unknown
/// frequency as soon as its frequency half is readable, even if the flags
/// half is cut off; any other short field is `TruncatedField`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes remain than the field's fixed width.
    TruncatedField {
        kind: FieldKind,
        needed: usize,
        available: usize,
    },
    /// Channel frequency outside the 2.4 GHz table.
    UnknownFrequency(UnknownFrequency),
    /// Presence bit with no decoder in this crate.
    UnsupportedFieldKind(u32),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::TruncatedField {
                kind,
                needed,
                available,
            } => write!(
                f,
                "truncated {kind} field: needed {needed} bytes, {available} available"
            ),
            DecodeError::UnknownFrequency(err) => write!(f, "{err}"),
            DecodeError::UnsupportedFieldKind(bit) => {
                write!(f, "unsupported field at presence bit {bit}")
            }
        }
    }
}

impl core::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            DecodeError::UnknownFrequency(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UnknownFrequency> for DecodeError {
    fn from(err: UnknownFrequency) -> Self {
        DecodeError::UnknownFrequency(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::error::Error;

    #[test]
    fn display_truncated() {
        let err = DecodeError::TruncatedField {
            kind: FieldKind::Tsft,
            needed: 8,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "truncated tsft field: needed 8 bytes, 3 available"
        );
    }

    #[test]
    fn display_unknown_frequency_keeps_value() {
        let err = DecodeError::from(UnknownFrequency(5180));
        assert_eq!(err.to_string(), "unknown frequency 5180 MHz");
        assert!(err.source().is_some());
    }

    #[test]
    fn display_unsupported() {
        let err = DecodeError::UnsupportedFieldKind(19);
        assert_eq!(err.to_string(), "unsupported field at presence bit 19");
        assert!(err.source().is_none());
    }
}
