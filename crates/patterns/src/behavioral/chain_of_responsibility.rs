//! Chain of responsibility: order processing traffic through a notification chain

use crate::error::PatternError;
use notify_chain::{ChainConfig, Severity, Sink};
use std::cell::RefCell;
use std::rc::Rc;

/// Messages raised while processing one order, in the order they occur
pub const ORDER_MESSAGES: [(&str, Severity); 6] = [
    ("Entering function ProcessOrder().", Severity::Debug),
    ("Order record retrieved.", Severity::Info),
    ("Customer Address details missing in Branch DataBase.", Severity::Warning),
    ("Customer Address details missing in Organization DataBase.", Severity::Error),
    ("Unable to Process Order ORD1 Dated D1 for customer C1.", Severity::FunctionalError),
    ("OrderDispatched.", Severity::FunctionalMessage),
];

/// Run the order messages through the default chain, capturing sink output
pub fn demo() -> Result<Vec<String>, PatternError> {
    let lines = Rc::new(RefCell::new(Vec::new()));

    let chain = ChainConfig::default()
        .build_with(|kind| {
            let lines = Rc::clone(&lines);
            Box::new(move |message: &str| {
                lines.borrow_mut().push(format!("{} {}", kind.prefix(), message));
            }) as Box<dyn Sink>
        })?;

    for (message, severity) in ORDER_MESSAGES {
        chain.notify(message, severity);
    }

    Ok(lines.take())
}
