use clap::Parser;
use dragnet::{
    cli::{Cli, Command},
    configuration::get_configuration,
    startup::{run_directory_harvest, run_search},
};
use env_logger::Env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let cli = Cli::parse();

    match cli.command {
        Command::Search(args) => run_search(args, &configuration).await,
        Command::Harvest(args) => run_directory_harvest(args, &configuration).await,
    }
}
