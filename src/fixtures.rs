#[cfg(test)]
pub mod test {
    use crate::field::{EnvRecord, Field};
    use crate::values::{MinuteDuration, RawBase64};

    /// Database connection settings, as a typical service would declare them.
    #[derive(Debug, Default, PartialEq)]
    pub struct DatabaseConfig {
        pub host: String,
        pub port: String,
        pub username: String,
        pub password: String,
        pub migration_dir: String,
    }

    impl EnvRecord for DatabaseConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::str("DB_HOST", &mut self.host),
                Field::str("DB_PORT", &mut self.port).default("5432"),
                Field::str("DB_USERNAME", &mut self.username),
                Field::str("DB_PASSWORD", &mut self.password),
                Field::str("DB_MIGRATION_DIR", &mut self.migration_dir),
            ]
        }
    }

    /// Token-issuance settings: scaled durations plus base64 key material.
    #[derive(Debug, Default, PartialEq)]
    pub struct JwtConfig {
        pub access_token_duration: MinuteDuration,
        pub refresh_token_duration: MinuteDuration,
        pub signing_key: RawBase64,
    }

    impl EnvRecord for JwtConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::custom("JWT_ACCESS_TOKEN_DURATION", &mut self.access_token_duration),
                Field::custom("JWT_REFRESH_TOKEN_DURATION", &mut self.refresh_token_duration)
                    .default("60"),
                Field::custom("JWT_SIGNING_KEY", &mut self.signing_key),
            ]
        }
    }

    /// Top-level record composing nested sub-records with direct scalars.
    #[derive(Debug, Default)]
    pub struct ServiceConfig {
        pub database: DatabaseConfig,
        pub jwt: JwtConfig,
        pub http_port: String,
        pub debug: bool,
    }

    impl EnvRecord for ServiceConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::nested(&mut self.database),
                Field::nested(&mut self.jwt),
                Field::str("HTTP_SERVER_PORT", &mut self.http_port),
                Field::bool("HTTP_SERVER_DEBUG", &mut self.debug),
            ]
        }
    }
}
