use super::SessionKey;
use super::DES_BLOCK_SIZE;
use crate::error::{Error, Result};
use std::convert::TryFrom;

/// Version 1 of the rxrpc key payload interface.
pub const RXRPC_KEY_INTERFACE_V1: u32 = 1;

/// RxRPC header security index of rxkad.
pub const RXRPC_SECURITY_RXKAD: u16 = 2;

/// Key version number that marks a Kerberos 5 ticket.
pub const RXKAD_TKT_TYPE_KERBEROS_V5: u32 = 256;

/// The rxkad key payload understood by the kernel `rxrpc` key type
/// (`struct rxrpc_key_sec2_v1`). Integers are laid out in host byte order.
///
/// ```text
/// kver(4) | security_index(2) | ticket_length(2) | expiry(4) | kvno(4)
/// | session_key(8) | ticket(ticket_length)
/// ```
pub struct RxrpcKeyPayload {
    pub kver: u32,
    pub security_index: u16,
    pub expiry: u32,
    pub kvno: u32,
    pub session_key: SessionKey,
    pub ticket: Vec<u8>,
}

impl RxrpcKeyPayload {
    pub const HEADER_SIZE: usize = 16 + DES_BLOCK_SIZE;

    /// Payload for a Kerberos 5 ticket protected by rxkad.
    pub fn new(session_key: SessionKey, ticket: Vec<u8>, expiry: u32) -> Self {
        return Self {
            kver: RXRPC_KEY_INTERFACE_V1,
            security_index: RXRPC_SECURITY_RXKAD,
            expiry,
            kvno: RXKAD_TKT_TYPE_KERBEROS_V5,
            session_key,
            ticket,
        };
    }

    pub fn size(&self) -> usize {
        return Self::HEADER_SIZE + self.ticket.len();
    }

    pub fn build(&self) -> Result<Vec<u8>> {
        let ticket_length = u16::try_from(self.ticket.len()).map_err(|_| {
            Error::DataError(format!(
                "Ticket too long for rxkad ({} octets, {} allowed)",
                self.ticket.len(),
                u16::MAX
            ))
        })?;

        let mut raw = Vec::with_capacity(self.size());
        raw.extend_from_slice(&self.kver.to_ne_bytes());
        raw.extend_from_slice(&self.security_index.to_ne_bytes());
        raw.extend_from_slice(&ticket_length.to_ne_bytes());
        raw.extend_from_slice(&self.expiry.to_ne_bytes());
        raw.extend_from_slice(&self.kvno.to_ne_bytes());
        raw.extend_from_slice(self.session_key.as_bytes());
        raw.extend_from_slice(&self.ticket);

        return Ok(raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_key() -> SessionKey {
        return SessionKey::new([
            0x80, 0x5d, 0x9d, 0xba, 0x5d, 0x08, 0xc2, 0x8c,
        ]);
    }

    #[test]
    fn test_build_payload_layout() {
        let ticket: Vec<u8> = (0..37).collect();
        let payload =
            RxrpcKeyPayload::new(session_key(), ticket.clone(), 1700000000);

        let raw = payload.build().unwrap();

        assert_eq!(RxrpcKeyPayload::HEADER_SIZE + 37, raw.len());
        assert_eq!(payload.size(), raw.len());
        assert_eq!(&1u32.to_ne_bytes(), &raw[0..4]);
        assert_eq!(&2u16.to_ne_bytes(), &raw[4..6]);
        assert_eq!(&37u16.to_ne_bytes(), &raw[6..8]);
        assert_eq!(&1700000000u32.to_ne_bytes(), &raw[8..12]);
        assert_eq!(&256u32.to_ne_bytes(), &raw[12..16]);
        assert_eq!(session_key().as_bytes(), &raw[16..24]);
        assert_eq!(&ticket[..], &raw[24..]);
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn test_build_payload_little_endian_bytes() {
        let payload =
            RxrpcKeyPayload::new(session_key(), vec![0xaa, 0xbb], 1700000000);

        assert_eq!(
            vec![
                0x01, 0x00, 0x00, 0x00, // kver
                0x02, 0x00, // security index
                0x02, 0x00, // ticket length
                0x00, 0xf1, 0x53, 0x65, // expiry
                0x00, 0x01, 0x00, 0x00, // kvno
                0x80, 0x5d, 0x9d, 0xba, 0x5d, 0x08, 0xc2, 0x8c, // key
                0xaa, 0xbb,
            ],
            payload.build().unwrap()
        );
    }

    #[test]
    fn test_build_payload_empty_ticket() {
        let payload = RxrpcKeyPayload::new(session_key(), Vec::new(), 0);
        let raw = payload.build().unwrap();
        assert_eq!(RxrpcKeyPayload::HEADER_SIZE, raw.len());
    }

    #[test]
    fn test_build_payload_ticket_too_long() {
        let payload = RxrpcKeyPayload::new(session_key(), vec![0; 65536], 0);
        assert!(payload.build().unwrap_err().is_data_error());

        let payload = RxrpcKeyPayload::new(session_key(), vec![0; 65535], 0);
        assert_eq!(65535 + 24, payload.build().unwrap().len());
    }
}
