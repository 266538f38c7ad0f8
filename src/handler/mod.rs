//! Request handler module
//!
//! Route selection and response dispatch for the application server.

pub mod router;

pub use router::{handle_request, route, Route};
