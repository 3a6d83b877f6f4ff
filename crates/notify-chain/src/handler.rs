//! Chain Links

use crate::severity::{Notification, Severity, SeverityFilter};
use crate::sink::Sink;
use std::cell::RefCell;
use std::fmt;
use std::ptr;
use std::rc::Rc;
use tracing::debug;

/// Outcome of offering one notification to a chain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Number of handlers that evaluated the notification
    pub visited: usize,
    /// Names of handlers that emitted, in chain order
    pub emitted: Vec<String>,
}

/// One filtering-and-emitting stage of a notification chain
///
/// Handlers are shared through `Rc` so a chain can be assembled fluently
/// while callers keep their own references to individual links.
pub struct Handler {
    name: String,
    filter: SeverityFilter,
    /// `None` marks a link with no concrete emit behaviour
    sink: Option<Box<dyn Sink>>,
    next: RefCell<Option<Rc<Handler>>>,
}

impl Handler {
    /// Create a handler emitting through `sink`
    pub fn new(name: impl Into<String>, filter: SeverityFilter, sink: impl Sink + 'static) -> Rc<Self> {
        Self::from_boxed(name, filter, Box::new(sink))
    }

    /// Create a handler from an already boxed sink
    pub fn from_boxed(name: impl Into<String>, filter: SeverityFilter, sink: Box<dyn Sink>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            filter,
            sink: Some(sink),
            next: RefCell::new(None),
        })
    }

    /// Create a handler with no sink.
    ///
    /// It forwards like any other link, but a matching notification panics:
    /// emitting through it is a programming error.
    pub fn unbound(name: impl Into<String>, filter: SeverityFilter) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            filter,
            sink: None,
            next: RefCell::new(None),
        })
    }

    /// Handler name used in logs and reports
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Severities this handler acts on
    pub fn filter(&self) -> &SeverityFilter {
        &self.filter
    }

    /// Current successor, if any
    pub fn next(&self) -> Option<Rc<Handler>> {
        self.next.borrow().clone()
    }

    /// Attach `next` as this handler's successor and return it.
    ///
    /// A later call replaces the previous successor.
    ///
    /// # Panics
    ///
    /// Panics if `next` can already reach this handler, since the link would
    /// close a cycle.
    pub fn link(&self, next: Rc<Handler>) -> Rc<Handler> {
        assert!(
            !next.reaches(self),
            "linking `{}` after `{}` would form a cycle",
            next.name,
            self.name
        );

        if let Some(previous) = self.next.borrow().as_ref() {
            debug!(handler = %self.name, previous = %previous.name, next = %next.name, "Relinking successor");
        }
        *self.next.borrow_mut() = Some(Rc::clone(&next));
        next
    }

    /// Links after this one, in traversal order
    pub fn successors(&self) -> impl Iterator<Item = Rc<Handler>> {
        std::iter::successors(self.next(), |handler| handler.next())
    }

    /// Offer `message` with `severity` to this handler and every successor
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> DispatchReport {
        self.dispatch(&Notification::new(message, severity))
    }

    /// Offer an existing notification to this handler and every successor
    pub fn dispatch(&self, notification: &Notification) -> DispatchReport {
        let mut report = DispatchReport::default();

        self.handle(notification, &mut report);
        for handler in self.successors() {
            handler.handle(notification, &mut report);
        }

        report
    }

    fn handle(&self, notification: &Notification, report: &mut DispatchReport) {
        report.visited += 1;

        if !self.filter.accepts(notification.severity()) {
            debug!(handler = %self.name, severity = %notification.severity(), "Notification filtered out");
            return;
        }

        let Some(sink) = self.sink.as_ref() else {
            panic!("handler `{}` has no sink to emit through", self.name);
        };

        debug!(handler = %self.name, severity = %notification.severity(), "Emitting notification");
        sink.emit(notification.message());
        report.emitted.push(self.name.clone());
    }

    fn reaches(&self, target: &Handler) -> bool {
        ptr::eq(self, target) || self.successors().any(|handler| ptr::eq(&*handler, target))
    }
}

impl Drop for Handler {
    // Detach sole-owned successors iteratively so a long chain cannot overflow the stack
    fn drop(&mut self) {
        let mut next = self.next.get_mut().take();
        while let Some(handler) = next {
            match Rc::try_unwrap(handler) {
                Ok(mut handler) => next = handler.next.get_mut().take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("name", &self.name)
            .field("filter", &self.filter)
            .field("bound", &self.sink.is_some())
            .field("next", &self.next().map(|next| next.name.clone()))
            .finish()
    }
}
