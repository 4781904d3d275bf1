use crate::library::logger::interface::Logger;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default)]
pub struct LoggerTracing {
    namespace: Option<String>,
}

impl LoggerTracing {
    pub fn new() -> Self {
        Self { namespace: None }
    }

    /// Installs the global subscriber. `RUST_LOG` overrides the `info` default.
    pub fn install() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
    }

    fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or("-")
    }
}

impl Logger for LoggerTracing {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!(namespace = self.namespace(), "{}", message);
        Ok(())
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::error!(namespace = self.namespace(), "{}", message);
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerTracing {
            namespace: Some(new_namespace),
        })
    }
}
