use std::io::{self, Write};

/// Interchangeable behaviour run by [`crate::core::context::Context`].
pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;
    fn execute_strategy(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Payment method used by [`crate::core::checkout::ShoppingCart`] at checkout.
pub trait PaymentStrategy: Send + Sync {
    fn method(&self) -> &str;
    fn pay(&self, amount: u64, out: &mut dyn Write) -> io::Result<()>;
}
