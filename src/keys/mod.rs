//! SSH key files
//!
//! Lists RSA private keys in the ssh directory and creates new key pairs
//! through `ssh-keygen`.

mod keygen;
mod store;

pub use keygen::{KeyGenerator, KeygenOutput, SshKeygen, SSH_KEYGEN};
pub use store::{GeneratedKey, KeyStore, RSA_PRIVATE_KEY_MARKER};
