mod signer;
mod pkcs12;

pub use signer::MessageSigner;
pub use pkcs12::Pkcs12Signer;
