/// Decoded field union and bit-index dispatch.
///
/// The header reader walks the presence bitmask and, for each set bit in
/// ascending order, aligns the cursor and calls [`decode_field`]. Decoding N
/// present fields is N forward reads with no overlap and no backtracking.
use core::fmt;

use crate::cursor::ByteCursor;
use crate::error::DecodeError;
use crate::fields::{
    Antenna, Channel, DbAntennaNoise, DbAntennaSignal, DbTxAttenuation, DbmAntennaNoise,
    DbmAntennaSignal, DbmTxPower, Fcs, Fhss, FieldBytes, FrameFlags, LockQuality, RadioTapField,
    Rate, RenderString, Tsft, TxAttenuation,
};
use crate::kind::FieldKind;

/// One decoded RadioTap field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecodedField {
    Tsft(Tsft),
    Flags(FrameFlags),
    Rate(Rate),
    Channel(Channel),
    Fhss(Fhss),
    DbmAntennaSignal(DbmAntennaSignal),
    DbmAntennaNoise(DbmAntennaNoise),
    LockQuality(LockQuality),
    TxAttenuation(TxAttenuation),
    DbTxAttenuation(DbTxAttenuation),
    DbmTxPower(DbmTxPower),
    Antenna(Antenna),
    DbAntennaSignal(DbAntennaSignal),
    DbAntennaNoise(DbAntennaNoise),
    Fcs(Fcs),
}

/// Decode the field identified by presence bit `bit_index` at the cursor.
///
/// The cursor must already sit on the field's first byte, padding applied.
/// On success it has moved forward by exactly the field's width.
pub fn decode_field(
    bit_index: u32,
    cursor: &mut ByteCursor<'_>,
) -> Result<DecodedField, DecodeError> {
    let kind =
        FieldKind::from_bit_index(bit_index).ok_or(DecodeError::UnsupportedFieldKind(bit_index))?;
    log::trace!(
        "decoding {} field (bit {}) at offset {}",
        kind,
        bit_index,
        cursor.position()
    );
    DecodedField::decode(kind, cursor)
}

impl DecodedField {
    /// Decode a field of a known kind.
    pub fn decode(kind: FieldKind, cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let field = match kind {
            FieldKind::Tsft => Self::Tsft(Tsft::decode(cursor)?),
            FieldKind::Flags => Self::Flags(FrameFlags::decode(cursor)?),
            FieldKind::Rate => Self::Rate(Rate::decode(cursor)?),
            FieldKind::Channel => Self::Channel(Channel::decode(cursor)?),
            FieldKind::Fhss => Self::Fhss(Fhss::decode(cursor)?),
            FieldKind::DbmAntennaSignal => Self::DbmAntennaSignal(DbmAntennaSignal::decode(cursor)?),
            FieldKind::DbmAntennaNoise => Self::DbmAntennaNoise(DbmAntennaNoise::decode(cursor)?),
            FieldKind::LockQuality => Self::LockQuality(LockQuality::decode(cursor)?),
            FieldKind::TxAttenuation => Self::TxAttenuation(TxAttenuation::decode(cursor)?),
            FieldKind::DbTxAttenuation => Self::DbTxAttenuation(DbTxAttenuation::decode(cursor)?),
            FieldKind::DbmTxPower => Self::DbmTxPower(DbmTxPower::decode(cursor)?),
            FieldKind::Antenna => Self::Antenna(Antenna::decode(cursor)?),
            FieldKind::DbAntennaSignal => Self::DbAntennaSignal(DbAntennaSignal::decode(cursor)?),
            FieldKind::DbAntennaNoise => Self::DbAntennaNoise(DbAntennaNoise::decode(cursor)?),
            FieldKind::Fcs => Self::Fcs(Fcs::decode(cursor)?),
        };
        Ok(field)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Tsft(f) => f.kind(),
            Self::Flags(f) => f.kind(),
            Self::Rate(f) => f.kind(),
            Self::Channel(f) => f.kind(),
            Self::Fhss(f) => f.kind(),
            Self::DbmAntennaSignal(f) => f.kind(),
            Self::DbmAntennaNoise(f) => f.kind(),
            Self::LockQuality(f) => f.kind(),
            Self::TxAttenuation(f) => f.kind(),
            Self::DbTxAttenuation(f) => f.kind(),
            Self::DbmTxPower(f) => f.kind(),
            Self::Antenna(f) => f.kind(),
            Self::DbAntennaSignal(f) => f.kind(),
            Self::DbAntennaNoise(f) => f.kind(),
            Self::Fcs(f) => f.kind(),
        }
    }

    /// Wire bytes of the field, `kind().width()` long.
    pub fn encode(&self) -> FieldBytes {
        match self {
            Self::Tsft(f) => f.encode(),
            Self::Flags(f) => f.encode(),
            Self::Rate(f) => f.encode(),
            Self::Channel(f) => f.encode(),
            Self::Fhss(f) => f.encode(),
            Self::DbmAntennaSignal(f) => f.encode(),
            Self::DbmAntennaNoise(f) => f.encode(),
            Self::LockQuality(f) => f.encode(),
            Self::TxAttenuation(f) => f.encode(),
            Self::DbTxAttenuation(f) => f.encode(),
            Self::DbmTxPower(f) => f.encode(),
            Self::Antenna(f) => f.encode(),
            Self::DbAntennaSignal(f) => f.encode(),
            Self::DbAntennaNoise(f) => f.encode(),
            Self::Fcs(f) => f.encode(),
        }
    }

    pub fn render(&self) -> RenderString {
        crate::fields::render(self)
    }
}

impl fmt::Display for DecodedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tsft(v) => fmt::Display::fmt(v, f),
            Self::Flags(v) => fmt::Display::fmt(v, f),
            Self::Rate(v) => fmt::Display::fmt(v, f),
            Self::Channel(v) => fmt::Display::fmt(v, f),
            Self::Fhss(v) => fmt::Display::fmt(v, f),
            Self::DbmAntennaSignal(v) => fmt::Display::fmt(v, f),
            Self::DbmAntennaNoise(v) => fmt::Display::fmt(v, f),
            Self::LockQuality(v) => fmt::Display::fmt(v, f),
            Self::TxAttenuation(v) => fmt::Display::fmt(v, f),
            Self::DbTxAttenuation(v) => fmt::Display::fmt(v, f),
            Self::DbmTxPower(v) => fmt::Display::fmt(v, f),
            Self::Antenna(v) => fmt::Display::fmt(v, f),
            Self::DbAntennaSignal(v) => fmt::Display::fmt(v, f),
            Self::DbAntennaNoise(v) => fmt::Display::fmt(v, f),
            Self::Fcs(v) => fmt::Display::fmt(v, f),
        }
    }
}
