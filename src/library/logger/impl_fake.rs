use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub level: Level,
    pub namespace: Option<String>,
    pub message: String,
}

/// Records entries in memory. Namespaced children share the parent's buffer.
#[derive(Debug, Clone, Default)]
pub struct LoggerFake {
    namespace: Option<String>,
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.level == Level::Error)
            .map(|entry| entry.message)
            .collect()
    }

    fn push(
        &self,
        level: Level,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| format!("logger buffer poisoned: {}", e))?;
        entries.push(Entry {
            level,
            namespace: self.namespace.clone(),
            message: message.to_string(),
        });
        Ok(())
    }
}

impl Logger for LoggerFake {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.push(Level::Info, message)
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.push(Level::Error, message)
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerFake {
            namespace: Some(new_namespace),
            entries: self.entries.clone(),
        })
    }
}

#[cfg(test)]
mod impl_fake_test {
    use super::*;

    #[test]
    fn test_namespaces_share_buffer() {
        let logger = LoggerFake::new();
        let child = logger.with_namespace("page").with_namespace("effect");

        logger.info("root").unwrap();
        child.error("boom").unwrap();

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].namespace, None);
        assert_eq!(entries[1].namespace.as_deref(), Some("page:effect"));
        assert_eq!(logger.errors(), vec!["boom".to_string()]);
    }
}
