use crate::{
    abstract_trait::DynJwtService,
    config::{ConnectionPool, JwtConfig},
    di::DependenciesInject,
};
use anyhow::Result;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt: DynJwtService,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("jwt", &self.jwt)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, jwt_secret: &str) -> Result<Self> {
        let jwt: DynJwtService = Arc::new(JwtConfig::new(jwt_secret));
        let di_container = DependenciesInject::new(pool, jwt.clone());

        Ok(Self { di_container, jwt })
    }
}
