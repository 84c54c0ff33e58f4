//! Field descriptors: how a record declares its bindings.
//!
//! Instead of discovering structure at runtime, every decodable record
//! implements [`EnvRecord`] and hands the decoder an ordered list of
//! [`Field`] descriptors. Each descriptor names the lookup key, an optional
//! default, and the decode strategy for that field via [`FieldValue`]:
//!
//! - **`Nested`** — the field is itself a record; it carries no key of its
//!   own and is decoded by recursing into its children against the same
//!   source (keys form one flat namespace, never prefixed by ancestry).
//! - **`Optional`** — an `Option<T>` slot. A fresh zero-valued `T` is decoded
//!   with the field's key; the slot is set only if the key was present in
//!   some source (env, file, or non-empty default).
//! - **`Custom`** — the type decodes itself from the raw text via
//!   [`DecodeText`]. See [`values`](crate::values) for the bundled types.
//! - **Scalar variants** — string, integer, float, and boolean leaves parsed
//!   by the decoder itself.
//!
//! The strategy set is closed: a field kind either appears here or it cannot
//! be registered, so there is no "unsupported type" failure at decode time.

use crate::decode::decode_value;
use crate::error::{BoxError, EnvfigError};
use crate::source::Source;

/// A record whose fields can be populated from a [`Source`].
///
/// Implementations return descriptors in declaration order. Nested records
/// register themselves with [`Field::nested`]; every other field binds a key.
pub trait EnvRecord {
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// A leaf type that decodes itself from the raw resolved text instead of
/// going through the generic scalar rules.
///
/// The decoder only calls this when the key resolved to a value (env, file,
/// or non-empty default); an absent key leaves the value at its zero state.
/// On failure the error is surfaced verbatim, tagged with the offending key.
pub trait DecodeText {
    fn decode_text(&mut self, text: &str) -> Result<(), BoxError>;
}

/// Maps a value to the [`FieldValue`] strategy that decodes it.
///
/// Implemented for the primitive scalars and for the bundled custom types;
/// record types implement it by hand (returning [`FieldValue::Nested`]) when
/// they need to appear behind an `Option`.
pub trait Bind {
    fn bind(&mut self) -> FieldValue<'_>;
}

/// An optional slot that materializes its inner value only when the bound
/// key is present.
///
/// Blanket-implemented for `Option<T>` where `T` is bindable and has a zero
/// value; there is no need to implement this directly.
pub trait OptionalSlot {
    fn decode_some(&mut self, source: &Source, key: &str, default: &str)
    -> Result<bool, EnvfigError>;
}

impl<T: Bind + Default> OptionalSlot for Option<T> {
    fn decode_some(
        &mut self,
        source: &Source,
        key: &str,
        default: &str,
    ) -> Result<bool, EnvfigError> {
        let mut inner = T::default();
        let present = decode_value(source, inner.bind(), key, default)?;
        if present {
            *self = Some(inner);
        }
        Ok(present)
    }
}

/// The closed set of decode strategies a field can use.
pub enum FieldValue<'a> {
    /// Recurse into a nested record; the field must not bind a key.
    Nested(&'a mut dyn EnvRecord),
    /// Allocate-on-presence `Option` slot.
    Optional(&'a mut dyn OptionalSlot),
    /// Delegate to the type's own [`DecodeText`] implementation.
    Custom(&'a mut dyn DecodeText),
    /// Assign the resolved text verbatim.
    Str(&'a mut String),
    /// Parse as base-10 signed integer.
    Int(&'a mut i64),
    /// Parse as base-10 unsigned integer.
    Uint(&'a mut u64),
    /// Parse as decimal float.
    Float(&'a mut f64),
    /// Accept exactly `"1"`/`"true"`/`"0"`/`"false"`.
    Bool(&'a mut bool),
}

/// One field registration: lookup key, default value, decode strategy.
///
/// An empty key means the field has no direct binding (nested records only).
/// An empty default means "no default".
pub struct Field<'a> {
    pub key: &'static str,
    pub default: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn new(key: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            key,
            default: "",
            value,
        }
    }

    /// Set the default used when neither the environment nor a file defines
    /// the key.
    pub fn default(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }

    /// A nested record field. Carries no key; purely a namespace for the
    /// record's own fields.
    pub fn nested(record: &'a mut dyn EnvRecord) -> Self {
        Self::new("", FieldValue::Nested(record))
    }

    /// An `Option<T>` field, set only when `key` resolves to a value.
    pub fn optional<T: Bind + Default>(key: &'static str, slot: &'a mut Option<T>) -> Self {
        Self::new(key, FieldValue::Optional(slot))
    }

    /// A field whose type decodes itself via [`DecodeText`].
    pub fn custom(key: &'static str, value: &'a mut dyn DecodeText) -> Self {
        Self::new(key, FieldValue::Custom(value))
    }

    pub fn str(key: &'static str, slot: &'a mut String) -> Self {
        Self::new(key, FieldValue::Str(slot))
    }

    pub fn int(key: &'static str, slot: &'a mut i64) -> Self {
        Self::new(key, FieldValue::Int(slot))
    }

    pub fn uint(key: &'static str, slot: &'a mut u64) -> Self {
        Self::new(key, FieldValue::Uint(slot))
    }

    pub fn float(key: &'static str, slot: &'a mut f64) -> Self {
        Self::new(key, FieldValue::Float(slot))
    }

    pub fn bool(key: &'static str, slot: &'a mut bool) -> Self {
        Self::new(key, FieldValue::Bool(slot))
    }
}

impl Bind for String {
    fn bind(&mut self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl Bind for i64 {
    fn bind(&mut self) -> FieldValue<'_> {
        FieldValue::Int(self)
    }
}

impl Bind for u64 {
    fn bind(&mut self) -> FieldValue<'_> {
        FieldValue::Uint(self)
    }
}

impl Bind for f64 {
    fn bind(&mut self) -> FieldValue<'_> {
        FieldValue::Float(self)
    }
}

impl Bind for bool {
    fn bind(&mut self) -> FieldValue<'_> {
        FieldValue::Bool(self)
    }
}
