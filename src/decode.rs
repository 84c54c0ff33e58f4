//! The recursive structural decoder.
//!
//! One decode pass is a single depth-first walk over a record's registered
//! fields. For each field the strategy in its descriptor decides what
//! happens; any failure at any depth aborts the whole pass, tagged with the
//! offending key, and the destination must then be treated as unspecified.
//!
//! Dispatch per field:
//!
//! 1. **Custom** — resolve the text through the [`Source`]; if the key is
//!    absent everywhere, skip the decoder and leave the zero value. Otherwise
//!    delegate and propagate failures verbatim.
//! 2. **Nested** — recurse into the record's own fields against the same
//!    source. Nested records never bind a key themselves.
//! 3. **Optional** — decode a fresh inner value with the same key/default and
//!    set the slot only if the key was present in some form.
//! 4. **Scalars** — absent keys leave the zero value; present text is parsed
//!    per kind, with booleans restricted to `"1"`/`"true"`/`"0"`/`"false"`.
//!
//! The returned presence bit is what makes `Option` slots work: it is true
//! whenever the key resolved through the environment, a file, or a non-empty
//! default.

use crate::error::EnvfigError;
use crate::field::{EnvRecord, FieldValue};
use crate::source::Source;

/// Decode every registered field of `record` against `source`.
pub(crate) fn decode_record(
    source: &Source,
    record: &mut dyn EnvRecord,
) -> Result<(), EnvfigError> {
    for field in record.fields() {
        decode_value(source, field.value, field.key, field.default)?;
    }
    Ok(())
}

/// Decode a single value and report whether its key was present.
pub(crate) fn decode_value(
    source: &Source,
    value: FieldValue<'_>,
    key: &str,
    default: &str,
) -> Result<bool, EnvfigError> {
    match value {
        FieldValue::Nested(record) => {
            if !key.is_empty() {
                return Err(EnvfigError::KeyedRecord { key: key.into() });
            }
            decode_record(source, record)?;
            Ok(false)
        }

        FieldValue::Optional(slot) => slot.decode_some(source, key, default),

        FieldValue::Custom(custom) => {
            let (text, present) = source.get(key, default);
            if !present {
                return Ok(false);
            }
            custom
                .decode_text(&text)
                .map_err(|source| EnvfigError::CustomDecode {
                    key: key.into(),
                    source,
                })?;
            Ok(true)
        }

        FieldValue::Str(slot) => {
            let (text, present) = source.get(key, default);
            *slot = text;
            Ok(present)
        }

        FieldValue::Int(slot) => {
            let (text, present) = source.get(key, default);
            if !text.is_empty() {
                *slot = text.parse().map_err(|source| EnvfigError::InvalidInt {
                    key: key.into(),
                    source,
                })?;
            }
            Ok(present)
        }

        FieldValue::Uint(slot) => {
            let (text, present) = source.get(key, default);
            if !text.is_empty() {
                *slot = text.parse().map_err(|source| EnvfigError::InvalidInt {
                    key: key.into(),
                    source,
                })?;
            }
            Ok(present)
        }

        FieldValue::Float(slot) => {
            let (text, present) = source.get(key, default);
            if !text.is_empty() {
                *slot = text.parse().map_err(|source| EnvfigError::InvalidFloat {
                    key: key.into(),
                    source,
                })?;
            }
            Ok(present)
        }

        FieldValue::Bool(slot) => {
            let (text, present) = source.get(key, default);
            if !text.is_empty() {
                *slot = match text.as_str() {
                    "1" | "true" => true,
                    "0" | "false" => false,
                    _ => {
                        return Err(EnvfigError::InvalidBool {
                            key: key.into(),
                            value: text,
                        });
                    }
                };
            }
            Ok(present)
        }
    }
}
