//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use blog_core::PostService;
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Wrap an already-built repository.
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(repo),
        }
    }

    /// Build the application state with appropriate implementations.
    ///
    /// Fails when `DB_AUTO_MIGRATE` is set and the migrations cannot be
    /// applied; serving against a missing schema is never attempted.
    pub async fn new(config: &AppConfig) -> io::Result<Self> {
        let repo = Self::build_repository(config).await?;
        tracing::info!("Application state initialized");
        Ok(Self::with_repository(repo))
    }

    #[cfg(feature = "postgres")]
    async fn build_repository(config: &AppConfig) -> io::Result<Arc<dyn PostRepository>> {
        use blog_infra::{DatabaseConnections, PostgresPostRepository};

        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Arc::new(InMemoryPostRepository::new()));
        };

        let connections = match DatabaseConnections::init(db_config).await {
            Ok(connections) => connections,
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                return Ok(Arc::new(InMemoryPostRepository::new()));
            }
        };

        if config.auto_migrate {
            apply_migrations(&connections.main).await?;
        }

        Ok(Arc::new(PostgresPostRepository::new(connections.main)))
    }

    #[cfg(not(feature = "postgres"))]
    async fn build_repository(_config: &AppConfig) -> io::Result<Arc<dyn PostRepository>> {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Ok(Arc::new(InMemoryPostRepository::new()))
    }
}

/// Bring the schema up to date, turning a migration failure into a startup error.
#[cfg(feature = "postgres")]
async fn apply_migrations(db: &sea_orm::DbConn) -> io::Result<()> {
    use migration::{Migrator, MigratorTrait};

    match Migrator::up(db, None).await {
        Ok(()) => {
            tracing::info!("Database migrations applied");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to apply migrations: {}", e);
            Err(io::Error::other(format!("database migration failed: {e}")))
        }
    }
}
