//! Request extractors: query validation and the per-request database session.

pub mod limit;
pub mod session;

pub use limit::ListLimit;
