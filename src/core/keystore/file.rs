use super::KeyStore;
use crate::Result;
use log::debug;
use std::fs;

/// Writes the raw key payload into a file instead of the kernel, to inspect
/// it or load it later with `keyctl padd rxrpc <description> @s`.
pub struct FileKeyStore {
    file_path: String,
}

impl FileKeyStore {
    pub fn new(file_path: String) -> Self {
        return Self { file_path };
    }
}

impl KeyStore for FileKeyStore {
    fn id(&self) -> &str {
        return &self.file_path;
    }

    fn add(&self, description: &str, payload: &[u8]) -> Result<()> {
        fs::write(&self.file_path, payload).map_err(|err| {
            let message = format!(
                "Unable to write key payload in file {}",
                self.file_path
            );
            (message, err)
        })?;

        debug!(
            "Wrote {} octets of {} key in {}",
            payload.len(),
            description,
            self.file_path
        );
        return Ok(());
    }
}
