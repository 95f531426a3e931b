use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use dwsync::{
    config::{self, Config},
    error, info, scheduler, server,
    state::AppState,
    success,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP server and the transfer scheduler (default)
    Serve(ServeOptions),

    /// Run one automatic transfer now and exit
    Transfer,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS
    #[clap(long)]
    addr: Option<String>,

    /// Do not start the transfer scheduler
    #[clap(long)]
    no_scheduler: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    }
}

fn build_state(config: Config) -> AppState {
    match AppState::new(config) {
        Ok(state) => state,
        Err(e) => error!("Cannot initialize HTTP client. Err: {}", e),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve(ServeOptions::default())) {
        Command::Serve(opt) => {
            let mut config = load_config();
            if let Some(addr) = opt.addr {
                config.server_address = addr;
            }
            let state = build_state(config);

            let scheduler = if state.config.scheduler_enabled && !opt.no_scheduler {
                Some(scheduler::start_automatic_transfers(state.clone()))
            } else {
                info!("Transfer scheduler disabled");
                None
            };

            let served = server::start_api_server(state).await;

            if let Some(scheduler) = scheduler {
                scheduler.stop().await;
            }
            if let Err(e) = served {
                error!("Server stopped. Err: {}", e);
            }
        }
        Command::Transfer => {
            let state = build_state(load_config());
            match scheduler::automatic_transfer(&state).await {
                Ok(report) => success!(
                    "Copied {} tracks into playlist {}",
                    report.tracks,
                    report.playlist.id
                ),
                Err(e) => error!("Transfer failed. Err: {}", e),
            }
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
