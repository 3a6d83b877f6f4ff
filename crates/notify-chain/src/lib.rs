//! Severity-Filtered Notification Chain
//!
//! An ordered chain of handlers, each with its own severity filter and sink.
//! Every notification is offered to every handler in link order; a handler
//! emits when its filter matches, and the notification keeps travelling
//! regardless of what earlier handlers did.

mod config;
mod error;
mod handler;
mod severity;
mod sink;

pub use config::{assemble, ChainConfig, HandlerConfig};
pub use error::ChainError;
pub use handler::{DispatchReport, Handler};
pub use severity::{Notification, Severity, SeverityFilter};
pub use sink::{Sink, SinkKind, TextSink};

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    /// In-memory writer whose clones share one buffer
    #[derive(Debug, Clone, Default)]
    pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        pub fn lines(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.borrow())
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
