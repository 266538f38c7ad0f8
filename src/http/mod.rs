//! HTTP protocol layer module
//!
//! Response builders shared by the request handlers.

pub mod response;

pub use response::build_text_response;
