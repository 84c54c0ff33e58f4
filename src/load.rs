//! Top-level entry points for a decode pass.
//!
//! [`load_env`] and [`load_env_from`] build a [`Source`] (environment
//! snapshot plus `.env` files) and run one depth-first decode pass over the
//! destination record. [`decode`] runs the same pass against an explicitly
//! constructed source, which is the deterministic path for tests and for
//! callers embedding the engine behind their own source of key/value pairs.

use std::path::Path;

use crate::decode::decode_record;
use crate::error::EnvfigError;
use crate::field::EnvRecord;
use crate::source::Source;

/// The conventional default-source file name.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Populate `record` from the process environment, overlaid on `.env` in the
/// working directory if that file exists.
///
/// On error the record is in an unspecified, partially-mutated state and
/// should be discarded.
pub fn load_env(record: &mut dyn EnvRecord) -> Result<(), EnvfigError> {
    load_env_from(record, &[DEFAULT_ENV_FILE])
}

/// Populate `record` from the process environment, overlaid on the given
/// `.env`-style files.
///
/// Files are applied in order, later files overriding earlier ones; the
/// process environment overrides them all. It is not an error for every
/// candidate file to be missing; the pass then runs against the environment
/// alone. Any other read or parse failure aborts before any field is
/// touched.
pub fn load_env_from<P: AsRef<Path>>(
    record: &mut dyn EnvRecord,
    files: &[P],
) -> Result<(), EnvfigError> {
    let source = Source::from_files(files)?;
    decode_record(&source, record)
}

/// Run one decode pass against an already-built [`Source`].
pub fn decode(source: &Source, record: &mut dyn EnvRecord) -> Result<(), EnvfigError> {
    decode_record(source, record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::values::RawBase64;
    use std::fs;
    use tempfile::TempDir;

    // Each test uses its own uniquely-prefixed variable names so that
    // mutating the real process environment stays race-free under the
    // parallel test runner.

    #[derive(Debug, Default)]
    struct EndToEnd {
        host: String,
        port: String,
        signing_key: RawBase64,
    }

    impl EnvRecord for EndToEnd {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::str("ENVFIG_LOAD_TEST_HOST", &mut self.host),
                Field::str("ENVFIG_LOAD_TEST_PORT", &mut self.port).default("5432"),
                Field::custom("ENVFIG_LOAD_TEST_SIGNING_KEY", &mut self.signing_key),
            ]
        }
    }

    #[test]
    fn file_plus_defaults_end_to_end() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("service.env");
        fs::write(
            &path,
            "ENVFIG_LOAD_TEST_HOST=localhost\nENVFIG_LOAD_TEST_SIGNING_KEY=SGVsbG8=\n",
        )
        .unwrap();

        let mut cfg = EndToEnd::default();
        load_env_from(&mut cfg, &[path]).unwrap();
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, "5432"); // default, absent from file and env
        assert_eq!(cfg.signing_key.decoded, b"Hello");
        assert_eq!(cfg.signing_key.raw, b"SGVsbG8=");
    }

    #[test]
    fn env_overrides_file_end_to_end() {
        #[derive(Debug, Default)]
        struct Overridden {
            host: String,
        }
        impl EnvRecord for Overridden {
            fn fields(&mut self) -> Vec<Field<'_>> {
                vec![Field::str("ENVFIG_LOAD_TEST_OVERRIDE_HOST", &mut self.host)]
            }
        }

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("service.env");
        fs::write(&path, "ENVFIG_LOAD_TEST_OVERRIDE_HOST=from-file\n").unwrap();

        unsafe {
            std::env::set_var("ENVFIG_LOAD_TEST_OVERRIDE_HOST", "from-env");
        }
        let mut cfg = Overridden::default();
        let result = load_env_from(&mut cfg, &[path]);
        unsafe {
            std::env::remove_var("ENVFIG_LOAD_TEST_OVERRIDE_HOST");
        }

        result.unwrap();
        assert_eq!(cfg.host, "from-env");
    }

    #[test]
    fn all_files_missing_is_fine() {
        let dir = TempDir::new().unwrap();
        let mut cfg = EndToEnd::default();
        load_env_from(
            &mut cfg,
            &[dir.path().join("a.env"), dir.path().join("b.env")],
        )
        .unwrap();
        assert_eq!(cfg.port, "5432");
    }

    #[test]
    fn decode_runs_against_an_explicit_source() {
        let source = Source::from_parts(
            [("ENVFIG_LOAD_TEST_HOST".to_string(), "synthetic".to_string())],
            Vec::new(),
        );
        let mut cfg = EndToEnd::default();
        decode(&source, &mut cfg).unwrap();
        assert_eq!(cfg.host, "synthetic");
    }

    #[test]
    fn failed_pass_reports_the_offending_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("service.env");
        fs::write(&path, "ENVFIG_LOAD_TEST_SIGNING_KEY=!!not-base64!!\n").unwrap();

        let mut cfg = EndToEnd::default();
        let err = load_env_from(&mut cfg, &[path]).unwrap_err();
        assert!(err.to_string().contains("ENVFIG_LOAD_TEST_SIGNING_KEY"));
    }
}
