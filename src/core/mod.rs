pub mod checkout;
pub mod context;
pub mod singleton;
