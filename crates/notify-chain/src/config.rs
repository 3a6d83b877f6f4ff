//! Chain Configuration and Assembly

use crate::error::ChainError;
use crate::handler::Handler;
use crate::severity::{Severity, SeverityFilter};
use crate::sink::{Sink, SinkKind, TextSink};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::rc::Rc;
use tracing::info;

/// One link of a configured chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Sink this handler emits through
    pub sink: SinkKind,
    /// Severities this handler acts on (empty accepts nothing)
    #[serde(default)]
    pub severities: Vec<Severity>,
    /// Name used in logs and reports (defaults to the sink kind)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl HandlerConfig {
    /// Create a handler config named after its sink
    pub fn new(sink: SinkKind, severities: impl IntoIterator<Item = Severity>) -> Self {
        Self {
            sink,
            severities: severities.into_iter().collect(),
            name: None,
        }
    }

    /// Effective handler name
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.sink.to_string())
    }

    /// Severity filter described by this config
    pub fn filter(&self) -> SeverityFilter {
        self.severities.iter().copied().collect()
    }
}

/// Ordered chain of handlers, head first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub handlers: Vec<HandlerConfig>,
}

impl Default for ChainConfig {
    /// Console takes everything, email the functional traffic, file and
    /// database the warnings and errors.
    fn default() -> Self {
        Self {
            handlers: vec![
                HandlerConfig::new(SinkKind::Console, [Severity::All]),
                HandlerConfig::new(SinkKind::Email, [Severity::FunctionalMessage, Severity::FunctionalError]),
                HandlerConfig::new(SinkKind::File, [Severity::Warning, Severity::Error]),
                HandlerConfig::new(SinkKind::Database, [Severity::Warning, Severity::Error]),
            ],
        }
    }
}

impl ChainConfig {
    /// Load a chain from a TOML, YAML or JSON file, picked by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChainError> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?;

        let chain: ChainConfig = settings.try_deserialize()?;
        chain.validate()?;

        info!("Loaded chain of {} handlers from {}", chain.handlers.len(), path.display());
        Ok(chain)
    }

    /// Parse a chain from TOML text
    pub fn from_toml(text: &str) -> Result<Self, ChainError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?;

        let chain: ChainConfig = settings.try_deserialize()?;
        chain.validate()?;
        Ok(chain)
    }

    /// Check the config describes at least one handler
    pub fn validate(&self) -> Result<(), ChainError> {
        if self.handlers.is_empty() {
            return Err(ChainError::EmptyChain);
        }
        Ok(())
    }

    /// Build the chain with every sink writing to standard output
    pub fn build(&self) -> Result<Rc<Handler>, ChainError> {
        self.build_with(|kind| Box::new(TextSink::stdout(kind)))
    }

    /// Build the chain, asking `make_sink` for each handler's sink
    pub fn build_with<F>(&self, mut make_sink: F) -> Result<Rc<Handler>, ChainError>
    where
        F: FnMut(SinkKind) -> Box<dyn Sink>,
    {
        self.validate()?;
        assemble(
            self.handlers
                .iter()
                .map(|handler| Handler::from_boxed(handler.display_name(), handler.filter(), make_sink(handler.sink))),
        )
    }
}

/// Link `handlers` in the given order and return the head
pub fn assemble(handlers: impl IntoIterator<Item = Rc<Handler>>) -> Result<Rc<Handler>, ChainError> {
    let mut handlers = handlers.into_iter();
    let head = handlers.next().ok_or(ChainError::EmptyChain)?;

    let mut tail = Rc::clone(&head);
    let mut count = 1;
    for handler in handlers {
        tail = tail.link(handler);
        count += 1;
    }

    info!("Assembled chain of {} handlers starting at `{}`", count, head.name());
    Ok(head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SharedBuffer;
    use std::io::Write;

    fn build_into(config: &ChainConfig, buffer: &SharedBuffer) -> Rc<Handler> {
        config
            .build_with(|kind| Box::new(TextSink::with_writer(kind, buffer.clone())))
            .unwrap()
    }

    #[test]
    fn test_default_chain_order() {
        let buffer = SharedBuffer::default();
        let chain = build_into(&ChainConfig::default(), &buffer);

        let names: Vec<String> = std::iter::once(Rc::clone(&chain))
            .chain(chain.successors())
            .map(|handler| handler.name().to_string())
            .collect();
        assert_eq!(names, vec!["console", "email", "file", "database"]);
    }

    #[test]
    fn test_default_chain_error_fans_out() {
        let buffer = SharedBuffer::default();
        let chain = build_into(&ChainConfig::default(), &buffer);

        chain.notify("Customer Address details missing in Organization DataBase.", Severity::Error);

        assert_eq!(
            buffer.lines(),
            vec![
                "Writing to console: Customer Address details missing in Organization DataBase.",
                "Writing to log file: Customer Address details missing in Organization DataBase.",
                "Writing to database: Customer Address details missing in Organization DataBase.",
            ]
        );
    }

    #[test]
    fn test_from_toml() {
        let config = ChainConfig::from_toml(
            r#"
            [[handlers]]
            sink = "console"
            severities = ["all"]

            [[handlers]]
            sink = "email"
            name = "on-call"
            severities = ["FUNCTIONAL_ERROR"]
            "#,
        )
        .unwrap();

        assert_eq!(config.handlers.len(), 2);
        assert_eq!(config.handlers[0].severities, vec![Severity::All]);
        assert_eq!(config.handlers[1].display_name(), "on-call");

        let buffer = SharedBuffer::default();
        let report = build_into(&config, &buffer).notify("Unable to process order.", Severity::FunctionalError);
        assert_eq!(report.emitted, vec!["console", "on-call"]);
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let result = ChainConfig::from_toml(
            r#"
            [[handlers]]
            sink = "file"
            severities = ["LOUD"]
            "#,
        );
        assert!(matches!(result, Err(ChainError::Config(message)) if message.contains("LOUD")));
    }

    #[test]
    fn test_sink_kind_any_case() {
        let config = ChainConfig::from_toml(
            r#"
            [[handlers]]
            sink = "Console"
            severities = ["ALL"]
            "#,
        )
        .unwrap();
        assert_eq!(config.handlers[0].sink, SinkKind::Console);
    }

    #[test]
    fn test_unknown_sink_rejected() {
        let result = ChainConfig::from_toml(
            r#"
            [[handlers]]
            sink = "pager"
            severities = ["ERROR"]
            "#,
        );
        assert!(matches!(result, Err(ChainError::Config(message)) if message.contains("Unknown sink kind: pager")));
    }

    #[test]
    fn test_empty_chain_rejected() {
        let config = ChainConfig { handlers: Vec::new() };
        assert!(matches!(config.build(), Err(ChainError::EmptyChain)));
        assert!(matches!(assemble(Vec::new()), Err(ChainError::EmptyChain)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
            [[handlers]]
            sink = "database"
            severities = ["warning", "error"]
            "#
        )
        .unwrap();

        let config = ChainConfig::load(file.path()).unwrap();
        assert_eq!(
            config.handlers,
            vec![HandlerConfig::new(SinkKind::Database, [Severity::Warning, Severity::Error])]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = ChainConfig::load("/nonexistent/chain.toml");
        assert!(matches!(result, Err(ChainError::Config(_))));
    }
}
