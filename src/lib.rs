//! Discover Weekly transfer service library
//!
//! This library links a Spotify account with an Apple Music account and copies
//! the tracks of the Spotify "Discover Weekly" playlist into an Apple Music
//! library playlist, either on demand through the HTTP API or on a fixed
//! schedule.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for login, callback, health and transfer endpoints
//! - `apple_music` - Apple Music developer tokens and library client
//! - `config` - Configuration loaded once from the environment
//! - `error` - Error taxonomy shared by every component
//! - `scheduler` - Periodic automatic transfers
//! - `server` - Router construction and the HTTP listener
//! - `spotify` - Spotify OAuth and Web API client
//! - `state` - Shared application state handed to handlers and jobs
//! - `transfer` - The orchestration of one playlist transfer
//! - `types` - Request, response and upstream payload types
//! - `utils` - Small helpers used across modules
//!
//! # Example
//!
//! ```
//! use dwsync::{config, server, state::AppState};
//!
//! #[tokio::main]
//! async fn main() -> dwsync::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     let state = AppState::new(config)?;
//!     server::start_api_server(state).await
//! }
//! ```

pub mod api;
pub mod apple_music;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod server;
pub mod spotify;
pub mod state;
pub mod transfer;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every component reports failures through [`Error`], so handlers can map
/// them onto HTTP responses and the scheduler can log them uniformly.
///
/// # Example
///
/// ```
/// use dwsync::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Each line carries a local timestamp so server output can be correlated
/// with upstream requests. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
      "o".blue().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Transferred {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
      "✓".green().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal startup failures such as missing configuration. Request
/// handlers and scheduled jobs must never call it.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
      "!".red().bold(),
      std::format_args!($($arg)*)
    );
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable failures: a rejected request, a failed scheduler
/// tick, a track that could not be matched.
///
/// # Example
///
/// ```
/// warning!("Scheduled transfer failed: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
      "!".yellow().bold(),
      std::format_args!($($arg)*)
    );
  })
}
