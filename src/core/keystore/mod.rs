mod keystore_trait;
pub use keystore_trait::KeyStore;

mod keyring;
pub use keyring::SessionKeyring;

mod file;
pub use file::FileKeyStore;
