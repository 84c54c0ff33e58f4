//! Custom-decodable value types bundled with the crate.
//!
//! Four scaled durations (a base-10 count multiplied by a fixed unit) and a
//! base64 value that retains both the transport text and the decoded bytes.
//! All of them implement [`DecodeText`] plus [`Bind`], so they can be
//! registered directly with [`Field::custom`](crate::Field::custom) or sit
//! behind an `Option`.

use std::time::Duration;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;

use crate::error::BoxError;
use crate::field::{Bind, DecodeText, FieldValue};

/// Standard-alphabet base64: canonical form is unpadded, but padded input is
/// accepted on decode.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const HOUR: Duration = Duration::from_secs(60 * 60);
const MINUTE: Duration = Duration::from_secs(60);
const SECOND: Duration = Duration::from_secs(1);
const MILLISECOND: Duration = Duration::from_millis(1);

/// Parse a base-10 count and scale it by `unit`.
///
/// The count must be non-negative (`Duration` cannot represent negative
/// spans) and the product must not overflow.
fn scaled_duration(text: &str, unit: Duration) -> Result<Duration, BoxError> {
    let count: u32 = text.parse()?;
    unit.checked_mul(count)
        .ok_or_else(|| BoxError::from(format!("duration of {text} units overflows")))
}

macro_rules! scaled_duration_type {
    ($(#[$doc:meta])* $name:ident, $unit:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(pub Duration);

        impl DecodeText for $name {
            fn decode_text(&mut self, text: &str) -> Result<(), BoxError> {
                self.0 = scaled_duration(text, $unit)?;
                Ok(())
            }
        }

        impl Bind for $name {
            fn bind(&mut self) -> FieldValue<'_> {
                FieldValue::Custom(self)
            }
        }

        impl From<$name> for Duration {
            fn from(value: $name) -> Duration {
                value.0
            }
        }
    };
}

scaled_duration_type!(
    /// A duration decoded from an integer count of hours.
    HourDuration,
    HOUR
);
scaled_duration_type!(
    /// A duration decoded from an integer count of minutes.
    MinuteDuration,
    MINUTE
);
scaled_duration_type!(
    /// A duration decoded from an integer count of seconds.
    SecondDuration,
    SECOND
);
scaled_duration_type!(
    /// A duration decoded from an integer count of milliseconds.
    MillisecondDuration,
    MILLISECOND
);

/// A base64 value that keeps both forms: the transport text as received and
/// the bytes it decodes to.
///
/// Typical use is key material (e.g. a JWT signing key) where downstream code
/// needs the decoded bytes while the original text is retained for logging
/// or re-serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBase64 {
    /// The transport-encoded text, byte for byte as it appeared.
    pub raw: Vec<u8>,
    /// The decoded byte sequence.
    pub decoded: Vec<u8>,
}

impl DecodeText for RawBase64 {
    fn decode_text(&mut self, text: &str) -> Result<(), BoxError> {
        // Decode before touching self so a failure leaves the value intact.
        let decoded = BASE64.decode(text)?;
        self.raw = text.as_bytes().to_vec();
        self.decoded = decoded;
        Ok(())
    }
}

impl Bind for RawBase64 {
    fn bind(&mut self) -> FieldValue<'_> {
        FieldValue::Custom(self)
    }
}
