//! Shared debug context: cross-cutting overlay elements and a bounded log
//! buffer.
//!
//! This is an explicit, cloneable handle rather than a process-wide
//! singleton, so render passes stay pure and tests can run in isolation.
//! Both collections are append-only behind locks: entries keep their append
//! order, and the oldest are evicted once the configured cap is reached.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::element::Element;

/// Severity of a log entry, for the on-canvas log overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DBG"),
            LogLevel::Info => write!(f, "INF"),
            LogLevel::Warn => write!(f, "WRN"),
        }
    }
}

/// One captured log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Capacity limits for the context collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextConfig {
    /// Maximum retained log entries; older entries are dropped first.
    pub max_log_entries: usize,
    /// Maximum retained overlay elements; older elements are dropped first.
    pub max_overlays: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_log_entries: 100,
            max_overlays: 256,
        }
    }
}

#[derive(Debug)]
struct Inner {
    overlays: RwLock<VecDeque<Element>>,
    log: RwLock<VecDeque<LogEntry>>,
    config: ContextConfig,
}

/// Cloneable handle to shared overlay and log state.
#[derive(Debug, Clone)]
pub struct DebugContext {
    inner: Arc<Inner>,
}

impl DebugContext {
    pub fn new() -> Self {
        Self::with_config(ContextConfig::default())
    }

    pub fn with_config(config: ContextConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                overlays: RwLock::new(VecDeque::new()),
                log: RwLock::new(VecDeque::new()),
                config,
            }),
        }
    }

    /// Appends an overlay element drawn on every scene that carries this
    /// context.
    pub fn push_overlay(&self, element: impl Into<Element>) {
        let mut overlays = self.inner.overlays.write();
        overlays.push_back(element.into());
        while overlays.len() > self.inner.config.max_overlays {
            overlays.pop_front();
        }
    }

    /// Snapshot of the overlay elements in append order.
    pub fn overlays(&self) -> Vec<Element> {
        self.inner.overlays.read().iter().cloned().collect()
    }

    pub fn overlay_count(&self) -> usize {
        self.inner.overlays.read().len()
    }

    pub fn clear_overlays(&self) {
        self.inner.overlays.write().clear();
    }

    /// Appends a log line, evicting the oldest past the cap.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        let mut log = self.inner.log.write();
        log.push_back(LogEntry {
            level,
            message: message.into(),
        });
        while log.len() > self.inner.config.max_log_entries {
            log.pop_front();
        }
    }

    /// Snapshot of the log entries in append order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.inner.log.read().iter().cloned().collect()
    }

    pub fn entry_count(&self) -> usize {
        self.inner.log.read().len()
    }

    pub fn clear_log(&self) {
        self.inner.log.write().clear();
    }
}

impl Default for DebugContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_preserves_append_order() {
        let ctx = DebugContext::new();
        ctx.log(LogLevel::Info, "first");
        ctx.log(LogLevel::Warn, "second");
        let entries = ctx.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].message, "second");
    }

    #[test]
    fn log_evicts_oldest_beyond_cap() {
        let ctx = DebugContext::with_config(ContextConfig {
            max_log_entries: 3,
            max_overlays: 8,
        });
        for i in 0..10 {
            ctx.log(LogLevel::Debug, format!("entry {i}"));
        }
        let entries = ctx.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "entry 7");
        assert_eq!(entries[2].message, "entry 9");
    }

    #[test]
    fn clones_share_state() {
        let ctx = DebugContext::new();
        let other = ctx.clone();
        ctx.log(LogLevel::Info, "shared");
        assert_eq!(other.entry_count(), 1);
    }

    #[test]
    fn concurrent_appends_all_land() {
        let ctx = DebugContext::with_config(ContextConfig {
            max_log_entries: 10_000,
            max_overlays: 8,
        });
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let ctx = ctx.clone();
                std::thread::spawn(move || {
                    for i in 0..100 {
                        ctx.log(LogLevel::Debug, format!("{t}:{i}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(ctx.entry_count(), 400);
        // Per-thread order survives interleaving.
        let entries = ctx.entries();
        let thread0: Vec<&str> = entries
            .iter()
            .filter(|e| e.message.starts_with("0:"))
            .map(|e| e.message.as_str())
            .collect();
        let expected: Vec<String> = (0..100).map(|i| format!("0:{i}")).collect();
        assert_eq!(thread0, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
