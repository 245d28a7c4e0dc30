//! Request-side protocol helpers: environment snapshots, header resolution, reserved
//! parameters, and base string canonicalization.

pub mod base_string;
pub mod environment;
pub mod header;
pub mod headers;
pub mod reserved;

pub use base_string::*;
pub use environment::*;
pub use header::*;
pub use headers::*;
pub use reserved::*;
