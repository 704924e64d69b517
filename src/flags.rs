/// Bit-flag sets carried by the Flags and Channel fields.
///
/// Bits the radiotap definitions leave reserved are kept as-is so a field
/// re-encodes to the bytes it was decoded from.
use core::fmt;

bitflags::bitflags! {
    /// Per-frame properties (presence bit 1).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// Sent/received during the contention-free period
        const CFP = 0x01;
        const SHORT_PREAMBLE = 0x02;
        /// Sent/received with WEP encryption
        const WEP = 0x04;
        const FRAGMENTATION = 0x08;
        /// Frame includes a trailing FCS
        const FCS_AT_END = 0x10;
        /// Padding between the 802.11 header and payload
        const DATA_PAD = 0x20;
        /// Frame failed its FCS check
        const BAD_FCS = 0x40;
        const SHORT_GI = 0x80;
    }
}

bitflags::bitflags! {
    /// Channel properties, second half of the Channel field (presence bit 3).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChannelFlags: u16 {
        const TURBO = 0x0010;
        const CCK = 0x0020;
        const OFDM = 0x0040;
        /// 2 GHz spectrum
        const GHZ_2 = 0x0080;
        /// 5 GHz spectrum
        const GHZ_5 = 0x0100;
        /// Passive scan only
        const PASSIVE = 0x0200;
        const DYNAMIC_CCK_OFDM = 0x0400;
        /// Gaussian frequency shift keying
        const GFSK = 0x0800;
    }
}

/// Write a flag set as `NAME | NAME | 0xN`, or `0` when no bit is set.
pub(crate) fn write_flags<F>(flags: &F, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    F: bitflags::Flags,
    F::Bits: bitflags::parser::WriteHex,
{
    if flags.is_empty() {
        return f.write_str("0");
    }
    bitflags::parser::to_writer(flags, f)
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_flags(self, f)
    }
}

impl fmt::Display for ChannelFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_flags(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_display_names() {
        let flags = Flags::SHORT_PREAMBLE | Flags::FCS_AT_END;
        assert_eq!(flags.to_string(), "SHORT_PREAMBLE | FCS_AT_END");
    }

    #[test]
    fn empty_flags_display_zero() {
        assert_eq!(Flags::empty().to_string(), "0");
        assert_eq!(ChannelFlags::empty().to_string(), "0");
    }

    #[test]
    fn channel_flags_display_names() {
        let flags = ChannelFlags::from_bits_retain(0x00A0);
        assert_eq!(flags.to_string(), "CCK | GHZ_2");
    }

    #[test]
    fn reserved_channel_bits_are_retained() {
        let flags = ChannelFlags::from_bits_retain(0x1040);
        assert_eq!(flags.bits(), 0x1040);
        assert!(flags.contains(ChannelFlags::OFDM));
        assert_eq!(flags.to_string(), "OFDM | 0x1000");
    }

    #[test]
    fn every_flags_bit_is_named() {
        assert_eq!(Flags::all().bits(), 0xFF);
    }
}
