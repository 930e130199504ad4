//! Shared test fixtures
//!
//! In-memory database with the demo seed data, plus a fixed JWT config so
//! tokens are reproducible across the test binary.

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use tempfile::TempDir;

use hr_server::auth::{JwtConfig, JwtService};
use hr_server::db::seed;
use hr_server::{Config, ServerState};

pub const TEST_JWT_SECRET: &str = "integration-test-secret-key-0123456789";

/// Fresh in-memory database with namespace selected
pub async fn mem_db() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.expect("in-memory db");
    db.use_ns("hr").use_db("hr").await.expect("namespace");
    db
}

/// Full server state over an in-memory database with demo seed data
pub async fn seeded_state(work_dir: &TempDir) -> ServerState {
    let db = mem_db().await;
    seed::seed_if_empty(&db).await.expect("seed data");

    let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
    let jwt_service = JwtService::with_config(JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiration_minutes: 60,
        issuer: "hr-server".to_string(),
        audience: "hr-clients".to_string(),
    });

    ServerState::new(config, db, Arc::new(jwt_service))
}
