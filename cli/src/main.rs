mod commands;
mod terminal;

use commands::{CommandLine, Commands, menu, recipes};
use mealplan_core::context::AppContext;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(commands.verbose)?;
    print::banner(cfg.no_banner, cfg.quiet);

    let ctx = AppContext::from_config(&cfg)?;

    match commands.command {
        Commands::Recipes => recipes::list(&ctx, &cfg),
        Commands::Recipe { id } => recipes::show(&ctx, &id, &cfg),
        Commands::Menu(args) => menu::menu(ctx, args, &cfg).await,
    }
}
