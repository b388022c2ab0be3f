pub mod config;
pub mod poller;
pub mod server;

pub use config::Config;
pub use poller::{PollStatus, Poller};
pub use server::{create_metrics, run_server, AppState};
