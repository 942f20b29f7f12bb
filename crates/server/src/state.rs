use crate::di::DependenciesInject;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{hashing::DynHashing, jwt::DynJwtService},
    config::{ConnectionPool, Hashing, JwtConfig, JwtSettings},
    repository::Repositories,
    utils::Metrics,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(db_pool: ConnectionPool, jwt: &JwtSettings) -> Self {
        Self::with_repositories(
            Repositories::postgres(db_pool),
            jwt,
            Arc::new(Hashing::new()) as DynHashing,
        )
    }

    pub fn with_repositories(repos: Repositories, jwt: &JwtSettings, hashing: DynHashing) -> Self {
        let jwt_config = Arc::new(JwtConfig::new(jwt)) as DynJwtService;

        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry);

        let di_container = DependenciesInject::new(repos, jwt_config, hashing, metrics);

        Self {
            di_container,
            registry: Arc::new(registry),
        }
    }
}
