//! Protocol-aware Postgres readiness probe.
//!
//! Opens a real authenticated session and runs a trivial query, proving the
//! database is accepting work rather than merely listening on its port.

use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};

use crate::probe::ProbeError;

pub struct PostgresProbe {
    options: PgConnectOptions,
    host: String,
    port: u16,
}

impl PostgresProbe {
    pub fn new(host: &str, port: u16, user: &str, password: Option<&str>, database: &str) -> Self {
        let mut options = PgConnectOptions::new()
            .host(host)
            .port(port)
            .username(user)
            .database(database);
        if let Some(password) = password {
            options = options.password(password);
        }

        Self {
            options,
            host: host.to_string(),
            port,
        }
    }

    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub async fn check(&self) -> Result<(), ProbeError> {
        let mut conn = PgConnection::connect_with(&self.options)
            .await
            .map_err(|e| ProbeError::Connect(e.to_string()))?;

        let result = sqlx::query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| ProbeError::Connect(e.to_string()));

        // Close regardless of query outcome; the connection must not outlive
        // the attempt.
        let _ = conn.close().await;

        result
    }
}
