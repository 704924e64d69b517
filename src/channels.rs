/// 2.4 GHz channel-frequency table.
///
/// RadioTap records only the center frequency of the channel a frame was
/// seen on; the channel number is derived here. Only the 14 DSSS/OFDM
/// channels of the 2.4 GHz band are defined. Anything else (5 GHz, 6 GHz,
/// off-grid values) is an error rather than a guessed channel.
use crate::error::UnknownFrequency;

/// An 802.11 channel number (1-14 for the frequencies this table knows).
pub type ChannelNumber = u8;

/// Center frequency (MHz) and channel number for each 2.4 GHz channel.
///
/// Channels 1-13 are 5 MHz apart; channel 14 (Japan, DSSS only) sits
/// 12 MHz above channel 13.
pub static CHANNEL_FREQUENCIES: &[(u16, ChannelNumber)] = &[
    (2412, 1),
    (2417, 2),
    (2422, 3),
    (2427, 4),
    (2432, 5),
    (2437, 6),
    (2442, 7),
    (2447, 8),
    (2452, 9),
    (2457, 10),
    (2462, 11),
    (2467, 12),
    (2472, 13),
    (2484, 14),
];

/// Look up the channel number for an exact center frequency.
pub fn channel_for_frequency(frequency_mhz: u16) -> Result<ChannelNumber, UnknownFrequency> {
    CHANNEL_FREQUENCIES
        .iter()
        .find(|&&(mhz, _)| mhz == frequency_mhz)
        .map(|&(_, channel)| channel)
        .ok_or(UnknownFrequency(frequency_mhz))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_defined_frequency_maps() {
        let expected = [
            (2412, 1),
            (2417, 2),
            (2422, 3),
            (2427, 4),
            (2432, 5),
            (2437, 6),
            (2442, 7),
            (2447, 8),
            (2452, 9),
            (2457, 10),
            (2462, 11),
            (2467, 12),
            (2472, 13),
            (2484, 14),
        ];
        for (mhz, ch) in expected {
            assert_eq!(channel_for_frequency(mhz), Ok(ch), "{mhz} MHz");
        }
    }

    #[test]
    fn channel_14_is_off_grid() {
        // 2477 would be channel 14 on the 5 MHz grid; it is not a channel.
        assert_eq!(channel_for_frequency(2477), Err(UnknownFrequency(2477)));
        assert_eq!(channel_for_frequency(2484), Ok(14));
    }

    #[test]
    fn five_ghz_is_unknown() {
        for mhz in [5180, 5200, 5745, 5825] {
            assert_eq!(channel_for_frequency(mhz), Err(UnknownFrequency(mhz)));
        }
    }

    #[test]
    fn every_other_value_is_unknown_with_exact_value() {
        for mhz in 0..=u16::MAX {
            if CHANNEL_FREQUENCIES.iter().any(|&(f, _)| f == mhz) {
                continue;
            }
            assert_eq!(channel_for_frequency(mhz), Err(UnknownFrequency(mhz)));
        }
    }

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in CHANNEL_FREQUENCIES.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert_eq!(pair[0].1 + 1, pair[1].1);
        }
        assert_eq!(CHANNEL_FREQUENCIES.len(), 14);
    }
}
