use crate::Result;

pub trait KeyStore {
    fn id(&self) -> &str;

    /// Adds the key payload under the given description. An existing key
    /// with the same type and description is replaced.
    fn add(&self, description: &str, payload: &[u8]) -> Result<()>;
}
