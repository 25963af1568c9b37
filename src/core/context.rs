use crate::domain::ports::Strategy;
use std::io::{self, Write};

pub struct ConcreteStrategyA;

impl Strategy for ConcreteStrategyA {
    fn name(&self) -> &str {
        "A"
    }

    fn execute_strategy(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Executing strategy A")
    }
}

pub struct ConcreteStrategyB;

impl Strategy for ConcreteStrategyB {
    fn name(&self) -> &str {
        "B"
    }

    fn execute_strategy(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Executing strategy B")
    }
}

/// Holds exactly one strategy and delegates to it.
pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        tracing::debug!(
            "Switching strategy {} -> {}",
            self.strategy.name(),
            strategy.name()
        );
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn execute_strategy(&self, out: &mut dyn Write) -> io::Result<()> {
        tracing::debug!("Executing strategy {}", self.strategy.name());
        self.strategy.execute_strategy(out)
    }
}
