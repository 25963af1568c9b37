pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::database::DatabaseConnection;
pub use app::student_demo::run_student_demo;
pub use config::{cli::CliArgs, DatabaseConfig};
pub use core::{
    checkout::{CreditCardStrategy, PaypalStrategy, ShoppingCart},
    context::{ConcreteStrategyA, ConcreteStrategyB, Context},
    singleton::Singleton,
};
pub use domain::model::{Item, QueryResult};
pub use domain::ports::{PaymentStrategy, Strategy};
pub use utils::error::{DemoError, Result};
