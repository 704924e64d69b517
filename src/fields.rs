/// RadioTap field variants.
///
/// One type per field kind. Each owns its wire layout: a fixed byte width,
/// byte order, signedness, and any unit conversion. All multi-byte values
/// are little-endian except FCS, which drivers copy verbatim from the end
/// of the frame and is therefore big-endian.
///
/// Decoded values copy everything they need out of the cursor and are
/// plain `Copy` data afterwards.
use core::fmt::{self, Write};

use crate::channels::{channel_for_frequency, ChannelNumber};
use crate::cursor::ByteCursor;
use crate::error::DecodeError;
use crate::flags::{ChannelFlags, Flags};
use crate::kind::{FieldKind, MAX_FIELD_WIDTH};

/// Capacity of a rendered field description.
pub const RENDER_LEN: usize = 128;

/// Rendered, human-readable field description.
pub type RenderString = heapless::String<RENDER_LEN>;

/// Wire bytes of one encoded field.
pub type FieldBytes = heapless::Vec<u8, MAX_FIELD_WIDTH>;

/// Contract shared by every field variant.
pub trait RadioTapField: Sized + fmt::Display {
    /// Kind tag, fixed per type.
    const KIND: FieldKind;

    /// Read exactly `KIND.width()` bytes and interpret them.
    ///
    /// A short buffer fails with [`DecodeError::TruncatedField`] before
    /// anything is consumed. `Channel` checks its frequency first, so a
    /// short Channel field may fail with `UnknownFrequency` instead.
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError>;

    /// Wire bytes for this value, `KIND.width()` long.
    fn encode(&self) -> FieldBytes;

    fn kind(&self) -> FieldKind {
        Self::KIND
    }

    /// Same text as `Display`, without needing an allocator.
    fn render(&self) -> RenderString {
        render(self)
    }
}

pub(crate) fn render(value: &impl fmt::Display) -> RenderString {
    let mut out = RenderString::new();
    let _ = write!(out, "{value}");
    out
}

fn field_bytes(bytes: &[u8]) -> FieldBytes {
    let mut out = FieldBytes::new();
    // Every field fits in MAX_FIELD_WIDTH.
    let _ = out.extend_from_slice(bytes);
    out
}

// ── TSFT (bit 0) ───────────────────────────────────────────────────────

/// MAC timestamp: value of the Timing Synchronization Function timer when
/// the first bit of the MPDU arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tsft {
    pub timestamp_usec: u64,
}

impl RadioTapField for Tsft {
    const KIND: FieldKind = FieldKind::Tsft;

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let bytes = cursor.take::<8>(Self::KIND)?;
        Ok(Self {
            timestamp_usec: u64::from_le_bytes(bytes),
        })
    }

    fn encode(&self) -> FieldBytes {
        field_bytes(&self.timestamp_usec.to_le_bytes())
    }
}

impl fmt::Display for Tsft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimestampUsec {}", self.timestamp_usec)
    }
}

// ── Flags (bit 1) ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameFlags {
    pub flags: Flags,
}

impl RadioTapField for FrameFlags {
    const KIND: FieldKind = FieldKind::Flags;

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let [raw] = cursor.take::<1>(Self::KIND)?;
        Ok(Self {
            flags: Flags::from_bits_retain(raw),
        })
    }

    fn encode(&self) -> FieldBytes {
        field_bytes(&[self.flags.bits()])
    }
}

impl fmt::Display for FrameFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flags {}", self.flags)
    }
}

// ── Rate (bit 2) ───────────────────────────────────────────────────────

/// Legacy TX/RX data rate.
///
/// The wire carries 0 to 63.5 Mbps in 0.5 steps; `encode` expects a value
/// in that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate {
    pub rate_mbps: f64,
}

impl RadioTapField for Rate {
    const KIND: FieldKind = FieldKind::Rate;

    /// Wire unit is 500 kbps; bit 7 is reserved and ignored.
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let [raw] = cursor.take::<1>(Self::KIND)?;
        Ok(Self {
            rate_mbps: 0.5 * f64::from(raw & 0x7F),
        })
    }

    fn encode(&self) -> FieldBytes {
        debug_assert!(
            (0.0..=63.5).contains(&self.rate_mbps),
            "rate {} Mbps out of range",
            self.rate_mbps
        );
        field_bytes(&[(self.rate_mbps * 2.0) as u8 & 0x7F])
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RateMbps {}", self.rate_mbps)
    }
}

// ── Channel (bit 3) ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub frequency_mhz: u16,
    /// Derived from `frequency_mhz`.
    pub channel: ChannelNumber,
    pub flags: ChannelFlags,
}

impl RadioTapField for Channel {
    const KIND: FieldKind = FieldKind::Channel;

    /// Frequency first, resolved to a channel before the flags half is
    /// read, so an unknown frequency fails even when the flags are cut off.
    /// After an `UnknownFrequency` the cursor has stepped over the whole
    /// field if the buffer holds it, otherwise it has not moved.
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let truncated = DecodeError::TruncatedField {
            kind: Self::KIND,
            needed: Self::KIND.width(),
            available: cursor.remaining(),
        };
        let mut ahead = cursor.clone();
        let frequency = ahead.take::<2>(Self::KIND).map_err(|_| truncated)?;
        let frequency_mhz = u16::from_le_bytes(frequency);
        let channel = match channel_for_frequency(frequency_mhz) {
            Ok(channel) => channel,
            Err(err) => {
                cursor.skip(Self::KIND.width());
                return Err(err.into());
            }
        };
        let flags = ChannelFlags::from_bits_retain(u16::from_le_bytes(
            ahead.take::<2>(Self::KIND).map_err(|_| truncated)?,
        ));
        *cursor = ahead;
        Ok(Self {
            frequency_mhz,
            channel,
            flags,
        })
    }

    fn encode(&self) -> FieldBytes {
        let [f0, f1] = self.frequency_mhz.to_le_bytes();
        let [g0, g1] = self.flags.bits().to_le_bytes();
        field_bytes(&[f0, f1, g0, g1])
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FrequencyMHz {}, Channel {}, Flags {}",
            self.frequency_mhz, self.channel, self.flags
        )
    }
}

// ── FHSS (bit 4) ───────────────────────────────────────────────────────

/// Hop set and pattern of a frequency-hopping radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fhss {
    pub hop_set: u8,
    pub pattern: u8,
}

impl RadioTapField for Fhss {
    const KIND: FieldKind = FieldKind::Fhss;

    /// One little-endian word: low byte is the hop set, high byte the pattern.
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let word = u16::from_le_bytes(cursor.take::<2>(Self::KIND)?);
        Ok(Self {
            hop_set: (word & 0xFF) as u8,
            pattern: ((word >> 8) & 0xFF) as u8,
        })
    }

    fn encode(&self) -> FieldBytes {
        let word = u16::from(self.hop_set) | (u16::from(self.pattern) << 8);
        field_bytes(&word.to_le_bytes())
    }
}

impl fmt::Display for Fhss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChannelHoppingSet {}, Pattern {}",
            self.hop_set, self.pattern
        )
    }
}

// ── dBm antenna signal / noise (bits 5, 6) ─────────────────────────────

/// RF signal power at the antenna, dB from one milliwatt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbmAntennaSignal {
    pub signal_dbm: i8,
}

impl RadioTapField for DbmAntennaSignal {
    const KIND: FieldKind = FieldKind::DbmAntennaSignal;

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            signal_dbm: i8::from_le_bytes(cursor.take::<1>(Self::KIND)?),
        })
    }

    fn encode(&self) -> FieldBytes {
        field_bytes(&self.signal_dbm.to_le_bytes())
    }
}

impl fmt::Display for DbmAntennaSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AntennaSignalDbm {}", self.signal_dbm)
    }
}

/// RF noise power at the antenna, dB from one milliwatt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbmAntennaNoise {
    pub noise_dbm: i8,
}

impl RadioTapField for DbmAntennaNoise {
    const KIND: FieldKind = FieldKind::DbmAntennaNoise;

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            noise_dbm: i8::from_le_bytes(cursor.take::<1>(Self::KIND)?),
        })
    }

    fn encode(&self) -> FieldBytes {
        field_bytes(&self.noise_dbm.to_le_bytes())
    }
}

impl fmt::Display for DbmAntennaNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AntennaNoisedBm {}", self.noise_dbm)
    }
}

// ── Lock quality (bit 7) ───────────────────────────────────────────────

/// Barker code lock quality. Higher is better; scale is driver specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockQuality {
    pub signal_quality: u16,
}

impl RadioTapField for LockQuality {
    const KIND: FieldKind = FieldKind::LockQuality;

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            signal_quality: u16::from_le_bytes(cursor.take::<2>(Self::KIND)?),
        })
    }

    fn encode(&self) -> FieldBytes {
        field_bytes(&self.signal_quality.to_le_bytes())
    }
}

impl fmt::Display for LockQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignalQuality {}", self.signal_quality)
    }
}

// ── TX attenuation (bits 8, 9) ─────────────────────────────────────────
//
// Drivers report attenuation as a positive distance below maximum power.
// Both variants hold it negated, as power relative to maximum, so valid
// values are zero or negative and `encode` expects one that `decode` can
// produce.

/// Transmit power relative to maximum, unitless driver steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxAttenuation {
    pub tx_power: i32,
}

impl RadioTapField for TxAttenuation {
    const KIND: FieldKind = FieldKind::TxAttenuation;

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let raw = u16::from_le_bytes(cursor.take::<2>(Self::KIND)?);
        Ok(Self {
            tx_power: -i32::from(raw),
        })
    }

    fn encode(&self) -> FieldBytes {
        debug_assert!(
            (-i32::from(u16::MAX)..=0).contains(&self.tx_power),
            "tx attenuation {} out of range",
            self.tx_power
        );
        field_bytes(&(self.tx_power.unsigned_abs() as u16).to_le_bytes())
    }
}

impl fmt::Display for TxAttenuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxPower {}", self.tx_power)
    }
}

/// Transmit power relative to maximum, in dB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbTxAttenuation {
    pub tx_power_db: i32,
}

impl RadioTapField for DbTxAttenuation {
    const KIND: FieldKind = FieldKind::DbTxAttenuation;

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let [raw] = cursor.take::<1>(Self::KIND)?;
        Ok(Self {
            tx_power_db: -i32::from(raw),
        })
    }

    fn encode(&self) -> FieldBytes {
        debug_assert!(
            (-i32::from(u8::MAX)..=0).contains(&self.tx_power_db),
            "tx attenuation {} dB out of range",
            self.tx_power_db
        );
        field_bytes(&[self.tx_power_db.unsigned_abs() as u8])
    }
}

impl fmt::Display for DbTxAttenuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxPowerdB {}", self.tx_power_db)
    }
}

// ── dBm TX power (bit 10) ──────────────────────────────────────────────

/// Absolute transmit power in dBm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbmTxPower {
    pub tx_power_dbm: i8,
}

impl RadioTapField for DbmTxPower {
    const KIND: FieldKind = FieldKind::DbmTxPower;

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            tx_power_dbm: i8::from_le_bytes(cursor.take::<1>(Self::KIND)?),
        })
    }

    fn encode(&self) -> FieldBytes {
        field_bytes(&self.tx_power_dbm.to_le_bytes())
    }
}

impl fmt::Display for DbmTxPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxPowerdBm {}", self.tx_power_dbm)
    }
}

// ── Antenna (bit 11) ───────────────────────────────────────────────────

/// Index of the antenna used to transmit or receive the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Antenna {
    pub antenna: u8,
}

impl RadioTapField for Antenna {
    const KIND: FieldKind = FieldKind::Antenna;

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let [antenna] = cursor.take::<1>(Self::KIND)?;
        Ok(Self { antenna })
    }

    fn encode(&self) -> FieldBytes {
        field_bytes(&[self.antenna])
    }
}

impl fmt::Display for Antenna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Antenna {}", self.antenna)
    }
}

// ── dB antenna signal / noise (bits 12, 13) ────────────────────────────

/// RF signal power at the antenna, dB from an arbitrary fixed reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbAntennaSignal {
    pub signal_db: u8,
}

impl RadioTapField for DbAntennaSignal {
    const KIND: FieldKind = FieldKind::DbAntennaSignal;

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let [signal_db] = cursor.take::<1>(Self::KIND)?;
        Ok(Self { signal_db })
    }

    fn encode(&self) -> FieldBytes {
        field_bytes(&[self.signal_db])
    }
}

impl fmt::Display for DbAntennaSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignalStrengthdB {}", self.signal_db)
    }
}

/// RF noise power at the antenna, dB from an arbitrary fixed reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbAntennaNoise {
    pub noise_db: u8,
}

impl RadioTapField for DbAntennaNoise {
    const KIND: FieldKind = FieldKind::DbAntennaNoise;

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let [noise_db] = cursor.take::<1>(Self::KIND)?;
        Ok(Self { noise_db })
    }

    fn encode(&self) -> FieldBytes {
        field_bytes(&[self.noise_db])
    }
}

impl fmt::Display for DbAntennaNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AntennaNoisedB {}", self.noise_db)
    }
}

// ── FCS (bit 14) ───────────────────────────────────────────────────────

/// Frame check sequence, in the numeric form a CRC-32 routine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fcs {
    pub frame_check_sequence: u32,
}

impl RadioTapField for Fcs {
    const KIND: FieldKind = FieldKind::Fcs;

    /// Big-endian on the wire regardless of host order.
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            frame_check_sequence: u32::from_be_bytes(cursor.take::<4>(Self::KIND)?),
        })
    }

    fn encode(&self) -> FieldBytes {
        field_bytes(&self.frame_check_sequence.to_be_bytes())
    }
}

impl fmt::Display for Fcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameCheckSequence {}", self.frame_check_sequence)
    }
}
