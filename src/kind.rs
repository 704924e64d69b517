//! RadioTap field kinds and their fixed wire metadata.
//!
//! The discriminant of each kind is its bit index in the presence bitmask.
//! Bit indices and widths follow the radiotap.org defined-fields table,
//! except FCS which sits at bit 14 as in the BSD drivers that emit it.

/// Widest field this crate decodes (TSFT).
pub const MAX_FIELD_WIDTH: usize = 8;

/// A defined RadioTap field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldKind {
    Tsft = 0,
    Flags = 1,
    Rate = 2,
    Channel = 3,
    Fhss = 4,
    DbmAntennaSignal = 5,
    DbmAntennaNoise = 6,
    LockQuality = 7,
    TxAttenuation = 8,
    DbTxAttenuation = 9,
    DbmTxPower = 10,
    Antenna = 11,
    DbAntennaSignal = 12,
    DbAntennaNoise = 13,
    Fcs = 14,
}

impl FieldKind {
    /// Every kind, in ascending bit order.
    pub const ALL: [FieldKind; 15] = [
        FieldKind::Tsft,
        FieldKind::Flags,
        FieldKind::Rate,
        FieldKind::Channel,
        FieldKind::Fhss,
        FieldKind::DbmAntennaSignal,
        FieldKind::DbmAntennaNoise,
        FieldKind::LockQuality,
        FieldKind::TxAttenuation,
        FieldKind::DbTxAttenuation,
        FieldKind::DbmTxPower,
        FieldKind::Antenna,
        FieldKind::DbAntennaSignal,
        FieldKind::DbAntennaNoise,
        FieldKind::Fcs,
    ];

    /// Map a presence bit index to its kind. `None` for reserved,
    /// vendor, extension, and not-yet-implemented bits.
    pub const fn from_bit_index(bit_index: u32) -> Option<FieldKind> {
        if bit_index < Self::ALL.len() as u32 {
            Some(Self::ALL[bit_index as usize])
        } else {
            None
        }
    }

    /// Position of this kind's bit in the presence bitmask.
    pub const fn bit_index(self) -> u32 {
        self as u32
    }

    /// Number of bytes the field occupies on the wire, excluding padding.
    pub const fn width(self) -> usize {
        match self {
            FieldKind::Tsft => 8,
            FieldKind::Channel | FieldKind::Fcs => 4,
            FieldKind::Fhss | FieldKind::LockQuality | FieldKind::TxAttenuation => 2,
            FieldKind::Flags
            | FieldKind::Rate
            | FieldKind::DbmAntennaSignal
            | FieldKind::DbmAntennaNoise
            | FieldKind::DbTxAttenuation
            | FieldKind::DbmTxPower
            | FieldKind::Antenna
            | FieldKind::DbAntennaSignal
            | FieldKind::DbAntennaNoise => 1,
        }
    }

    /// Stable lower-case name, used as the report `type` tag.
    pub const fn name(self) -> &'static str {
        match self {
            FieldKind::Tsft => "tsft",
            FieldKind::Flags => "flags",
            FieldKind::Rate => "rate",
            FieldKind::Channel => "channel",
            FieldKind::Fhss => "fhss",
            FieldKind::DbmAntennaSignal => "dbm_antsignal",
            FieldKind::DbmAntennaNoise => "dbm_antnoise",
            FieldKind::LockQuality => "lock_quality",
            FieldKind::TxAttenuation => "tx_attenuation",
            FieldKind::DbTxAttenuation => "db_tx_attenuation",
            FieldKind::DbmTxPower => "dbm_tx_power",
            FieldKind::Antenna => "antenna",
            FieldKind::DbAntennaSignal => "db_antsignal",
            FieldKind::DbAntennaNoise => "db_antnoise",
            FieldKind::Fcs => "fcs",
        }
    }
}

impl core::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_index_round_trips_through_lookup() {
        for kind in FieldKind::ALL {
            assert_eq!(FieldKind::from_bit_index(kind.bit_index()), Some(kind));
        }
    }

    #[test]
    fn all_is_in_ascending_bit_order() {
        for (i, kind) in FieldKind::ALL.iter().enumerate() {
            assert_eq!(kind.bit_index(), i as u32);
        }
    }

    #[test]
    fn attenuation_kinds_have_distinct_bits() {
        assert_eq!(FieldKind::TxAttenuation.bit_index(), 8);
        assert_eq!(FieldKind::DbTxAttenuation.bit_index(), 9);
    }

    #[test]
    fn unknown_bits_have_no_kind() {
        for bit in [15, 19, 21, 29, 30, 31, 32, 1000, u32::MAX] {
            assert_eq!(FieldKind::from_bit_index(bit), None, "bit {bit}");
        }
    }

    #[test]
    fn widths_match_wire_table() {
        assert_eq!(FieldKind::Tsft.width(), 8);
        assert_eq!(FieldKind::Channel.width(), 4);
        assert_eq!(FieldKind::Fcs.width(), 4);
        assert_eq!(FieldKind::Fhss.width(), 2);
        assert_eq!(FieldKind::LockQuality.width(), 2);
        assert_eq!(FieldKind::TxAttenuation.width(), 2);
        assert_eq!(FieldKind::Rate.width(), 1);
        assert_eq!(FieldKind::DbTxAttenuation.width(), 1);
    }

    #[test]
    fn no_width_exceeds_max() {
        assert!(FieldKind::ALL.iter().all(|k| k.width() <= MAX_FIELD_WIDTH));
        assert!(FieldKind::ALL.iter().any(|k| k.width() == MAX_FIELD_WIDTH));
    }

    #[test]
    fn names_are_unique() {
        for a in FieldKind::ALL {
            for b in FieldKind::ALL {
                if a != b {
                    assert_ne!(a.name(), b.name());
                }
            }
        }
    }
}
