//! Message signing contracts and the built-in OAuth 1.0 signature methods.

pub mod encoding;
pub mod hmac;
pub mod input;
pub mod plaintext;
pub mod secret;
pub mod signer;

pub use self::hmac::*;
pub use encoding::*;
pub use input::*;
pub use plaintext::*;
pub use secret::*;
pub use signer::*;
