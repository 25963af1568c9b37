use crate::domain::model::Item;
use crate::domain::ports::PaymentStrategy;
use crate::utils::error::{DemoError, Result};
use std::fmt;
use std::io::{self, Write};

pub struct PaypalStrategy {
    email: String,
    password: String,
}

impl PaypalStrategy {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for PaypalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaypalStrategy")
            .field("email", &self.email)
            .field(
                "password",
                &if self.password.is_empty() { "" } else { "[REDACTED]" },
            )
            .finish()
    }
}

impl PaymentStrategy for PaypalStrategy {
    fn method(&self) -> &str {
        "PayPal"
    }

    fn pay(&self, amount: u64, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Client: {} paid {}$ using PayPal.", self.email, amount)
    }
}

pub struct CreditCardStrategy {
    name: String,
    card_number: String,
}

impl CreditCardStrategy {
    pub fn new(name: impl Into<String>, card_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            card_number: card_number.into(),
        }
    }

    /// 只保留末四碼
    pub fn masked_card_number(&self) -> String {
        let visible = self.card_number.len().saturating_sub(4);
        self.card_number
            .chars()
            .enumerate()
            .map(|(i, c)| if i < visible { '*' } else { c })
            .collect()
    }
}

impl fmt::Debug for CreditCardStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCardStrategy")
            .field("name", &self.name)
            .field("card_number", &self.masked_card_number())
            .finish()
    }
}

impl PaymentStrategy for CreditCardStrategy {
    fn method(&self) -> &str {
        "Credit Card"
    }

    fn pay(&self, amount: u64, out: &mut dyn Write) -> io::Result<()> {
        tracing::debug!("Charging card {}", self.masked_card_number());
        writeln!(
            out,
            "Client: {} paid {}$ using Credit Card.",
            self.name, amount
        )
    }
}

/// Ordered list of items plus at most one active payment strategy.
#[derive(Default)]
pub struct ShoppingCart {
    items: Vec<Item>,
    payment_strategy: Option<Box<dyn PaymentStrategy>>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first item equal to `item`. Returns whether anything was removed.
    pub fn remove_item(&mut self, item: &Item) -> bool {
        match self.items.iter().position(|existing| existing == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn calculate_total(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.price())).sum()
    }

    pub fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        tracing::debug!("Payment strategy set to {}", strategy.method());
        self.payment_strategy = Some(strategy);
    }

    /// Prints every item, then pays the total with the active strategy.
    pub fn checkout(&self, out: &mut dyn Write) -> Result<u64> {
        let strategy = self
            .payment_strategy
            .as_ref()
            .ok_or(DemoError::MissingPaymentStrategy)?;

        let amount = self.calculate_total();
        for item in &self.items {
            writeln!(out, "Item: {}, Price: {}", item.name(), item.price())?;
        }

        tracing::info!(
            "Checking out {} item(s) for {}$ via {}",
            self.items.len(),
            amount,
            strategy.method()
        );
        strategy.pay(amount, out)?;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_prices() {
        let mut cart = ShoppingCart::new();
        assert_eq!(cart.calculate_total(), 0);

        cart.add_item(Item::new("T-shirt", 10));
        cart.add_item(Item::new("Jeans", 20));
        assert_eq!(cart.calculate_total(), 30);
    }

    #[test]
    fn test_remove_item_removes_first_match_only() {
        let mut cart = ShoppingCart::new();
        cart.add_item(Item::new("Socks", 5));
        cart.add_item(Item::new("Jeans", 20));
        cart.add_item(Item::new("Socks", 5));

        assert!(cart.remove_item(&Item::new("Socks", 5)));
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].name(), "Jeans");
        assert_eq!(cart.calculate_total(), 25);

        assert!(!cart.remove_item(&Item::new("Hat", 15)));
        assert_eq!(cart.calculate_total(), 25);
    }

    #[test]
    fn test_checkout_without_strategy_fails_and_prints_nothing() {
        let mut cart = ShoppingCart::new();
        cart.add_item(Item::new("T-shirt", 10));

        let mut out = Vec::new();
        let result = cart.checkout(&mut out);
        assert!(matches!(result, Err(DemoError::MissingPaymentStrategy)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_paypal_output() {
        let mut out = Vec::new();
        PaypalStrategy::new("henry@gmail.com", "henry123")
            .pay(30, &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Client: henry@gmail.com paid 30$ using PayPal.\n"
        );
    }

    #[test]
    fn test_credit_card_masking() {
        let card = CreditCardStrategy::new("Henry Tran", "47136985569");
        assert_eq!(card.masked_card_number(), "*******5569");
        assert!(!format!("{:?}", card).contains("47136985569"));

        let paypal = PaypalStrategy::new("henry@gmail.com", "henry123");
        assert!(!format!("{:?}", paypal).contains("henry123"));
    }
}
