use clap::Parser;
use pattern_demos::utils::logger;
use pattern_demos::{CreditCardStrategy, Item, PaypalStrategy, ShoppingCart};

#[derive(Parser)]
#[command(name = "checkout-demo")]
#[command(about = "Checks out the same cart with PayPal, then with a credit card")]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let mut stdout = std::io::stdout().lock();

    let mut cart = ShoppingCart::new();
    cart.add_item(Item::new("T-shirt", 10));
    cart.add_item(Item::new("Jeans", 20));

    cart.set_payment_strategy(Box::new(PaypalStrategy::new("henry@gmail.com", "henry123")));
    cart.checkout(&mut stdout)?;

    cart.set_payment_strategy(Box::new(CreditCardStrategy::new("Henry Tran", "47136985569")));
    cart.checkout(&mut stdout)?;

    Ok(())
}
