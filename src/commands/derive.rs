use crate::core::etypes::etype_to_string;
use crate::core::rxkad::{classify, derive_session_key, KeyMaterial};
use crate::Result;
use log::info;

pub fn derive(key: KeyMaterial) -> Result<()> {
    let path = classify(key.etype(), key.len());
    info!(
        "Key of {} octets with etype {}",
        key.len(),
        etype_to_string(key.etype())
    );

    let session_key = derive_session_key(&key)?;

    println!("path:{}", path);
    println!("rxkad:{}", hex::encode(session_key.as_bytes()));

    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_aes_key() {
        assert!(derive(KeyMaterial::new(17, (1..=16).collect())).is_ok());
    }

    #[test]
    fn test_derive_rejects_short_key() {
        assert!(derive(KeyMaterial::new(99, vec![0; 5])).is_err());
    }
}
