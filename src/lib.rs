pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use config::Settings;
pub use db::{Database, Session};
pub use error::SentivestError;
pub use router::{SentivestState, sentivest_router};
