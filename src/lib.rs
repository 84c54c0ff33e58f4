//! Typed configuration from environment variables and `.env` files. Define a
//! record, register its fields, and go.
//!
//! Envfig populates an arbitrarily nested, strongly-typed record from a flat
//! mapping of string keys to string values: the process environment,
//! optionally overlaid on one or more `.env`-style default files.
//!
//! ```ignore
//! let mut config = AppConfig::default();
//! envfig::load_env(&mut config)?;
//! ```
//!
//! That single call reads `.env` if it exists, snapshots the process
//! environment, and fills every registered field of the record tree, honoring
//! per-field defaults and custom decoders.
//!
//! # Design: explicit field registration
//!
//! There is no derive macro and no runtime reflection. A record implements
//! [`EnvRecord`] and returns an ordered list of [`Field`] descriptors, each
//! naming its lookup key, its default, and its decode strategy:
//!
//! ```
//! use envfig::{EnvRecord, Field, Source};
//! use envfig::values::{MinuteDuration, RawBase64};
//!
//! #[derive(Default)]
//! struct Jwt {
//!     access_token_duration: MinuteDuration,
//!     signing_key: RawBase64,
//! }
//!
//! impl EnvRecord for Jwt {
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::custom("JWT_ACCESS_TOKEN_DURATION", &mut self.access_token_duration)
//!                 .default("15"),
//!             Field::custom("JWT_SIGNING_KEY", &mut self.signing_key),
//!         ]
//!     }
//! }
//!
//! #[derive(Default)]
//! struct AppConfig {
//!     jwt: Jwt,
//!     http_port: String,
//! }
//!
//! impl EnvRecord for AppConfig {
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::nested(&mut self.jwt),
//!             Field::str("HTTP_SERVER_PORT", &mut self.http_port).default("8080"),
//!         ]
//!     }
//! }
//!
//! // Decode against a synthetic source; `load_env` does the same against
//! // the real environment and `.env`.
//! let source = Source::from_parts(
//!     [("JWT_SIGNING_KEY".to_string(), "SGVsbG8".to_string())],
//!     Vec::new(),
//! );
//! let mut config = AppConfig::default();
//! envfig::decode(&source, &mut config)?;
//!
//! assert_eq!(config.http_port, "8080");
//! assert_eq!(config.jwt.signing_key.decoded, b"Hello");
//! # Ok::<(), envfig::EnvfigError>(())
//! ```
//!
//! Nested records carry no key of their own: they are namespaces for their
//! children, and every key lives in one flat global namespace. A field bound
//! to `DB_HOST` resolves identically whether it sits at the top level or
//! three records deep.
//!
//! # Source precedence
//!
//! ```text
//! Field defaults        .default("5432")
//!        ↑ overridden by
//! .env files            later files win key-by-key
//!        ↑ overridden by
//! Environment vars      defined = present, even when empty
//! ```
//!
//! Every layer is sparse: a `.env` file only needs the keys it wants to set,
//! and unset keys fall through. An environment variable that is *defined*
//! (including one explicitly set to the empty string) always wins over file
//! values and defaults. Both mappings are captured once per pass; nothing is
//! re-read mid-decode.
//!
//! # Decode strategies
//!
//! Each field registers one of a closed set of strategies
//! ([`FieldValue`]):
//!
//! - **Scalars** (`str`, `int`, `uint`, `float`, `bool`) are parsed by the
//!   engine. An absent key leaves the zero value; malformed present text is
//!   an error. Booleans accept exactly `"1"`, `"true"`, `"0"`, `"false"`.
//! - **Custom** types implement [`DecodeText`] and take over their own
//!   decoding from the raw resolved text. The [`values`] module bundles four
//!   scaled durations and a raw-plus-decoded base64 type.
//! - **Optional** `Option<T>` slots are materialized only when their key is
//!   present in some source; otherwise they stay `None`.
//! - **Nested** records recurse.
//!
//! # One pass, fail fast
//!
//! A decode pass is a single synchronous depth-first traversal. The first
//! failure anywhere in the tree aborts the pass with an [`EnvfigError`]
//! naming the offending key; the record is then in an unspecified,
//! partially-mutated state and should be discarded. Passes share no state:
//! concurrent decodes into distinct records are safe by construction, and
//! `&mut` makes concurrent decodes into the same record unrepresentable.

pub mod error;
pub mod values;

mod decode;
mod field;
mod load;
mod source;

#[cfg(test)]
mod fixtures;

pub use error::{BoxError, EnvfigError};
pub use field::{Bind, DecodeText, EnvRecord, Field, FieldValue, OptionalSlot};
pub use load::{DEFAULT_ENV_FILE, decode, load_env, load_env_from};
pub use source::Source;
