pub mod error;
pub mod message;
pub mod signing;

pub use error::{EncodingError, KeyLoadError, SignError};
pub use message::{TransactionFields, canonical_message};
pub use signing::{MessageSigner, Pkcs12Signer};
