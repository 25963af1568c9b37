use clap::Parser;
use pattern_demos::utils::logger;
use pattern_demos::{ConcreteStrategyA, ConcreteStrategyB, Context};

#[derive(Parser)]
#[command(name = "strategy-demo")]
#[command(about = "Runs strategy A, switches the context to strategy B, runs again")]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let mut stdout = std::io::stdout().lock();

    let mut context = Context::new(Box::new(ConcreteStrategyA));
    context.execute_strategy(&mut stdout)?;

    context.set_strategy(Box::new(ConcreteStrategyB));
    context.execute_strategy(&mut stdout)?;

    Ok(())
}
