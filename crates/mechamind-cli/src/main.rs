//! CLI for the MechaMind+ telemetry relay.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mechamind")]
#[command(about = "MechaMind+ — simulated vehicle telemetry relay")]
#[command(version = mechamind_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP telemetry server (GET / and GET /vehicle-data)
    Server {
        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Insert a simulated snapshot into the vehicle_data table every 5 seconds, forever
    Feed,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Server { port, host } => commands::server::run(&host, port),
        Commands::Feed => commands::feed::run(),
    }
}
