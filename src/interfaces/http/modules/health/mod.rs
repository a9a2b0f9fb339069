//! Health module: liveness and datastore reachability

pub mod handlers;

pub use handlers::*;
