//! Shared handler state

use std::fmt;
use std::sync::Arc;

use forum_common::AppConfig;
use forum_service::ServiceContext;

/// Cheap to clone; every handler gets its own copy
#[derive(Clone)]
pub struct AppState {
    services: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            services: Arc::new(services),
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Reported by the readiness check
    pub fn backend_name(&self) -> &'static str {
        match self.services.pool() {
            Some(_) => "postgres",
            None => "memory",
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("backend", &self.backend_name())
            .field("app", &self.config.app.name)
            .finish_non_exhaustive()
    }
}
