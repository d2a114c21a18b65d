pub mod boundary;
pub mod configuration;
pub mod error;
pub mod routes;
pub mod server;

pub use boundary::PageError;
pub use error::ServerError;
pub use server::{app, mount, pages};
