//! Strategy: swap the algorithm a context delegates to at run time

use crate::error::PatternError;

/// Interchangeable algorithm
pub trait Strategy {
    fn algorithm(&self) -> String;
}

/// First algorithm
#[derive(Debug, Default)]
pub struct ConcreteStrategyA;

impl Strategy for ConcreteStrategyA {
    fn algorithm(&self) -> String {
        "concrete strategyA".to_string()
    }
}

/// Second algorithm
#[derive(Debug, Default)]
pub struct ConcreteStrategyB;

impl Strategy for ConcreteStrategyB {
    fn algorithm(&self) -> String {
        "concrete strategyB".to_string()
    }
}

/// Holds one strategy and forwards to it
pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    /// Create a context using `strategy`
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    /// Replace the current strategy
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    /// Run the current strategy
    pub fn context_interface(&self) -> String {
        self.strategy.algorithm()
    }
}

/// Run strategy A, swap in B, run again
pub fn demo() -> Result<Vec<String>, PatternError> {
    let mut context = Context::new(Box::new(ConcreteStrategyA));
    let mut lines = vec![context.context_interface()];

    context.set_strategy(Box::new(ConcreteStrategyB));
    lines.push(context.context_interface());

    Ok(lines)
}
