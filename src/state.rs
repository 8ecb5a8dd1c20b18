use std::sync::Arc;

use academia_config::{DatabaseConfig, JwtConfig, PolicyConfig};
use academia_db::{PgStore, RelationshipStore, init_db_pool};
use academia_rbac::{PolicyEvaluator, RolePermissionMap};
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RelationshipStore>,
    pub role_table: Arc<RolePermissionMap>,
    pub jwt_config: JwtConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn RelationshipStore>,
        role_table: RolePermissionMap,
        jwt_config: JwtConfig,
    ) -> Self {
        Self {
            store,
            role_table: Arc::new(role_table),
            jwt_config,
        }
    }

    pub fn evaluator(&self) -> PolicyEvaluator<'_> {
        PolicyEvaluator::new(&self.role_table)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store.backend_name())
            .field("role_table", &self.role_table)
            .finish_non_exhaustive()
    }
}

/// Builds state from the environment: role table, JWT settings and a
/// PostgreSQL-backed store.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let policy_config = PolicyConfig::from_env();
    let role_table = RolePermissionMap::load_or_builtin(policy_config.role_table_path.as_deref())?;

    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_default_secret() {
        warn!("JWT_SECRET is not set, using the development default");
    }

    let pool = init_db_pool(&DatabaseConfig::from_env()).await?;

    Ok(AppState::new(
        Arc::new(PgStore::new(pool)),
        role_table,
        jwt_config,
    ))
}
