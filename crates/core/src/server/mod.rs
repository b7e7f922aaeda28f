//! The stdio tool server: request dispatch and the line transport.

pub mod dispatcher;
pub mod error;
pub mod transport;

pub use dispatcher::Dispatcher;
pub use error::{DispatchError, ServeError, ServeResult};
pub use transport::{serve, serve_stdio};
