use std::io::IsTerminal;

use clap::Parser;
use solid_lessons::adapter::inbound::cli::command::{
    Cli, ColorChoice, Commands, ConfigCommand, DiscountCommand, LessonCommand,
};
use solid_lessons::adapter::inbound::cli::{config, discount, lesson, operator, run};
use solid_lessons::adapter::output::{self, OutputConfig};
use solid_lessons::error::Result;
use solid_lessons::infrastructure::operator::entry::Operator;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    };
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose, color));
    let _ = operator::install(Box::new(Operator));

    if let Err(e) = dispatch(cli.command, color) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn dispatch(command: Commands, color: bool) -> Result<()> {
    match command {
        Commands::Run(args) => run::execute(&args, color),
        Commands::Lessons(LessonCommand::List) => lesson::list(),
        Commands::Lessons(LessonCommand::Explain { name }) => lesson::explain(&name),
        Commands::Discount(DiscountCommand::List(args)) => discount::list(&args),
        Commands::Discount(DiscountCommand::Compute(args)) => discount::compute(&args),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    }
}
