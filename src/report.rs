/// JSON reports of decoded fields for companion tooling.
///
/// One newline-delimited JSON (NDJSON) object per field, tagged by the
/// field kind's name. Flag sets are emitted as their raw bit values so
/// reserved bits survive. Serialized with `serde-json-core`, no allocation.
use serde::Serialize;

use crate::field::DecodedField;

/// Maximum size of one serialized report line, newline included.
pub const MAX_REPORT_LEN: usize = 96;

/// Buffer type for one serialized report line.
pub type ReportBuffer = heapless::Vec<u8, MAX_REPORT_LEN>;

/// Wire view of a [`DecodedField`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum FieldReport {
    #[serde(rename = "tsft")]
    Tsft { usec: u64 },
    #[serde(rename = "flags")]
    Flags { flags: u8 },
    #[serde(rename = "rate")]
    Rate { mbps: f64 },
    #[serde(rename = "channel")]
    Channel {
        freq: u16,
        ch: u8,
        flags: u16,
    },
    #[serde(rename = "fhss")]
    Fhss { hop_set: u8, pattern: u8 },
    #[serde(rename = "dbm_antsignal")]
    DbmAntennaSignal { dbm: i8 },
    #[serde(rename = "dbm_antnoise")]
    DbmAntennaNoise { dbm: i8 },
    #[serde(rename = "lock_quality")]
    LockQuality { quality: u16 },
    #[serde(rename = "tx_attenuation")]
    TxAttenuation { power: i32 },
    #[serde(rename = "db_tx_attenuation")]
    DbTxAttenuation { db: i32 },
    #[serde(rename = "dbm_tx_power")]
    DbmTxPower { dbm: i8 },
    #[serde(rename = "antenna")]
    Antenna { index: u8 },
    #[serde(rename = "db_antsignal")]
    DbAntennaSignal { db: u8 },
    #[serde(rename = "db_antnoise")]
    DbAntennaNoise { db: u8 },
    #[serde(rename = "fcs")]
    Fcs { fcs: u32 },
}

impl From<&DecodedField> for FieldReport {
    fn from(field: &DecodedField) -> Self {
        match field {
            DecodedField::Tsft(f) => FieldReport::Tsft {
                usec: f.timestamp_usec,
            },
            DecodedField::Flags(f) => FieldReport::Flags {
                flags: f.flags.bits(),
            },
            DecodedField::Rate(f) => FieldReport::Rate { mbps: f.rate_mbps },
            DecodedField::Channel(f) => FieldReport::Channel {
                freq: f.frequency_mhz,
                ch: f.channel,
                flags: f.flags.bits(),
            },
            DecodedField::Fhss(f) => FieldReport::Fhss {
                hop_set: f.hop_set,
                pattern: f.pattern,
            },
            DecodedField::DbmAntennaSignal(f) => FieldReport::DbmAntennaSignal { dbm: f.signal_dbm },
            DecodedField::DbmAntennaNoise(f) => FieldReport::DbmAntennaNoise { dbm: f.noise_dbm },
            DecodedField::LockQuality(f) => FieldReport::LockQuality {
                quality: f.signal_quality,
            },
            DecodedField::TxAttenuation(f) => FieldReport::TxAttenuation { power: f.tx_power },
            DecodedField::DbTxAttenuation(f) => FieldReport::DbTxAttenuation { db: f.tx_power_db },
            DecodedField::DbmTxPower(f) => FieldReport::DbmTxPower {
                dbm: f.tx_power_dbm,
            },
            DecodedField::Antenna(f) => FieldReport::Antenna { index: f.antenna },
            DecodedField::DbAntennaSignal(f) => FieldReport::DbAntennaSignal { db: f.signal_db },
            DecodedField::DbAntennaNoise(f) => FieldReport::DbAntennaNoise { db: f.noise_db },
            DecodedField::Fcs(f) => FieldReport::Fcs {
                fcs: f.frame_check_sequence,
            },
        }
    }
}

/// Serialize a field report as one NDJSON line into `buf`.
///
/// Returns the number of bytes written including the trailing newline, or
/// `None` if `buf` cannot hold the whole line.
pub fn serialize_report(field: &DecodedField, buf: &mut [u8]) -> Option<usize> {
    let report = FieldReport::from(field);
    let len = serde_json_core::to_slice(&report, buf).ok()?;
    // Append newline for NDJSON
    let newline = buf.get_mut(len)?;
    *newline = b'\n';
    Some(len + 1)
}

/// Serialize a field report into an owned, fixed-capacity line buffer.
pub fn report_line(field: &DecodedField) -> Option<ReportBuffer> {
    let mut buf = [0u8; MAX_REPORT_LEN];
    let len = serialize_report(field, &mut buf)?;
    ReportBuffer::from_slice(&buf[..len]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::ByteCursor;
    use crate::field::decode_field;

    fn json_for(bit: u32, bytes: &[u8]) -> heapless::String<MAX_REPORT_LEN> {
        let field = decode_field(bit, &mut ByteCursor::new(bytes)).unwrap();
        let line = report_line(&field).unwrap();
        assert_eq!(line.last(), Some(&b'\n'));
        let text = core::str::from_utf8(&line[..line.len() - 1]).unwrap();
        heapless::String::try_from(text).unwrap()
    }

    // ── Per-kind reports ────────────────────────────────────────────

    #[test]
    fn channel_report() {
        let json = json_for(3, &[0x6C, 0x09, 0xA0, 0x00]);
        assert_eq!(
            json.as_str(),
            r#"{"type":"channel","freq":2412,"ch":1,"flags":160}"#
        );
    }

    #[test]
    fn rate_report() {
        let json = json_for(2, &[0x0B]);
        assert!(json.contains(r#""type":"rate""#));
        assert!(json.contains(r#""mbps":5.5"#));
    }

    #[test]
    fn signed_values_report_negative() {
        assert_eq!(
            json_for(5, &[0xC4]).as_str(),
            r#"{"type":"dbm_antsignal","dbm":-60}"#
        );
        assert_eq!(
            json_for(8, &[10, 0]).as_str(),
            r#"{"type":"tx_attenuation","power":-10}"#
        );
    }

    #[test]
    fn tsft_report_holds_full_u64() {
        let json = json_for(0, &[0xFF; 8]);
        assert_eq!(
            json.as_str(),
            r#"{"type":"tsft","usec":18446744073709551615}"#
        );
    }

    #[test]
    fn fcs_report() {
        assert_eq!(
            json_for(14, &[0x00, 0x00, 0xDF, 0x8D]).as_str(),
            r#"{"type":"fcs","fcs":57229}"#
        );
    }

    #[test]
    fn type_tag_matches_kind_name() {
        let bytes = [0x6C, 0x09, 0, 0, 0, 0, 0, 0];
        for kind in crate::kind::FieldKind::ALL {
            let json = json_for(kind.bit_index(), &bytes);
            let tag = format!(r#""type":"{}""#, kind.name());
            assert!(json.contains(tag.as_str()), "{json}");
        }
    }

    // ── Buffer handling ─────────────────────────────────────────────

    #[test]
    fn serialize_appends_newline() {
        let field = decode_field(11, &mut ByteCursor::new(&[2])).unwrap();
        let mut buf = [0u8; 64];
        let len = serialize_report(&field, &mut buf).unwrap();
        assert_eq!(&buf[..len], b"{\"type\":\"antenna\",\"index\":2}\n");
    }

    #[test]
    fn serialize_into_small_buffer_fails() {
        let field = decode_field(0, &mut ByteCursor::new(&[0xFF; 8])).unwrap();
        let mut buf = [0u8; 16];
        assert_eq!(serialize_report(&field, &mut buf), None);
    }

    #[test]
    fn serialize_without_room_for_newline_fails() {
        let field = decode_field(11, &mut ByteCursor::new(&[2])).unwrap();
        let json = br#"{"type":"antenna","index":2}"#;
        let mut buf = [0u8; 28];
        assert_eq!(json.len(), buf.len());
        assert_eq!(serialize_report(&field, &mut buf), None);
    }
}
