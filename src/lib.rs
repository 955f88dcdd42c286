pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod server;
mod show;
pub mod template;
pub mod widget;

pub use routes::AppState;
pub use show::show;
