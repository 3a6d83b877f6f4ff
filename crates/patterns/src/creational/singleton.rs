//! Singleton: one process-wide instance, constructed once and passed explicitly
//!
//! The single-instance guarantee comes from [`OnceLock`] owned by a static,
//! not from a runtime check on a mutable class attribute. Callers receive the
//! instance as a plain reference and hand it on to whatever needs it.

use crate::error::PatternError;
use chrono::{DateTime, Utc};
use std::sync::OnceLock;
use tracing::info;

/// Write-once cell enforcing a single constructed value
#[derive(Debug)]
pub struct SingletonCell<T> {
    cell: OnceLock<T>,
}

impl<T> SingletonCell<T> {
    pub const fn new() -> Self {
        Self { cell: OnceLock::new() }
    }

    /// Return the instance, running `init` only if none exists yet
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(init)
    }

    /// Install `value` as the instance. Fails if one already exists.
    pub fn init(&self, value: T) -> Result<&T, PatternError> {
        let mut installed = false;
        let instance = self.cell.get_or_init(|| {
            installed = true;
            value
        });

        if installed {
            Ok(instance)
        } else {
            Err(PatternError::SingletonAlreadyInitialised)
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }
}

impl<T> Default for SingletonCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide application context
#[derive(Debug)]
pub struct AppContext {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl AppContext {
    fn new(name: &str) -> Self {
        info!("Constructing application context {name}");
        Self {
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }
}

static CONTEXT: SingletonCell<AppContext> = SingletonCell::new();

/// The process-wide context, constructed on first use
pub fn context() -> &'static AppContext {
    CONTEXT.get_or_init(|| AppContext::new("pattern-catalogue"))
}

/// Consumer that receives the instance instead of reaching for a global
fn describe(context: &AppContext) -> String {
    format!("{} (created {})", context.name, context.created_at.format("%H:%M:%S"))
}

pub fn demo() -> Result<Vec<String>, PatternError> {
    let first = context();
    let second = context();

    Ok(vec![
        describe(first),
        format!("same instance: {}", std::ptr::eq(first, second)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_constructed_once() {
        let cell = SingletonCell::new();
        let constructions = Cell::new(0);
        let build = || {
            constructions.set(constructions.get() + 1);
            42
        };

        let a = cell.get_or_init(build);
        let b = cell.get_or_init(build);

        assert_eq!(constructions.get(), 1);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_second_init_fails() {
        let cell = SingletonCell::new();

        assert_eq!(cell.init("first"), Ok(&"first"));
        assert_eq!(cell.init("second"), Err(PatternError::SingletonAlreadyInitialised));
        assert_eq!(cell.get(), Some(&"first"));
    }

    #[test]
    fn test_global_context_is_shared() {
        assert!(std::ptr::eq(context(), context()));
        assert_eq!(context().name, "pattern-catalogue");
    }
}
