//! radiotap-fields: per-field decoding of IEEE 802.11 RadioTap metadata.
//!
//! A RadioTap header is a presence bitmask followed by a packed run of
//! fixed-width fields, one per set bit, in ascending bit order. Walking the
//! bitmask and applying alignment padding is the caller's job; this crate
//! decodes (and re-encodes) one field at a time from a [`ByteCursor`]
//! already positioned at the field's first byte:
//!
//! ```
//! use radiotap_fields::{decode_field, ByteCursor, DecodedField};
//!
//! // Rate (bit 2), one pad byte, then Channel (bit 3).
//! let bytes = [0x0B, 0x00, 0x6C, 0x09, 0xA0, 0x00];
//! let mut cursor = ByteCursor::new(&bytes);
//! let rate = decode_field(2, &mut cursor).unwrap();
//! assert!(cursor.skip(1)); // padding to 2-byte alignment
//! let channel = decode_field(3, &mut cursor).unwrap();
//! assert!(matches!(rate, DecodedField::Rate(r) if r.rate_mbps == 5.5));
//! assert_eq!(channel.render().as_str(), "FrequencyMHz 2412, Channel 1, Flags CCK | GHZ_2");
//! ```
//!
//! Layout:
//! - [`channels`]: 2.4 GHz frequency to channel table.
//! - [`fields`]: one type per field kind, sharing the [`RadioTapField`] contract.
//! - [`field`]: the [`DecodedField`] union and the [`decode_field`] dispatcher.
//! - [`report`]: NDJSON reports of decoded fields for companion tooling.
//!
//! `no_std`, no allocator. Testable on any host with `cargo test`.

#![cfg_attr(not(test), no_std)]

pub mod channels;
pub mod cursor;
pub mod error;
pub mod field;
pub mod fields;
pub mod flags;
pub mod kind;
pub mod report;

pub use channels::{channel_for_frequency, ChannelNumber};
pub use cursor::ByteCursor;
pub use error::{DecodeError, UnknownFrequency};
pub use field::{decode_field, DecodedField};
pub use fields::{FieldBytes, RadioTapField, RenderString};
pub use flags::{ChannelFlags, Flags};
pub use kind::{FieldKind, MAX_FIELD_WIDTH};
pub use report::{serialize_report, FieldReport};
