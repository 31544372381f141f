use crate::core::etypes::etype_to_string;
use crate::core::rxkad::{derive_session_key, RxrpcKeyPayload};
use crate::core::{AfsCell, AfsCredential, CredentialSource, KeyStore};
use crate::Result;
use chrono::{Local, TimeZone, Utc};
use log::{debug, info};

/// Main function to load the rxkad key of a cell into the key store
pub fn token(
    cell: AfsCell,
    source: &dyn CredentialSource,
    keystore: &dyn KeyStore,
) -> Result<()> {
    info!("CELL {}", cell.name);
    info!("PRINC {}", cell.principal());

    let AfsCredential {
        key,
        ticket,
        expiry,
    } = source.get_credential(&cell)?;
    info!(
        "Found ticket in {} with etype {}, expires {}",
        source.id(),
        etype_to_string(key.etype()),
        expiry_to_string(expiry)
    );

    let session_key = derive_session_key(&key)?;
    drop(key);

    let payload = RxrpcKeyPayload::new(session_key, ticket, expiry);
    let raw_payload = payload.build()?;
    debug!(
        "plen={} tklen={} rk={}",
        raw_payload.len(),
        payload.ticket.len(),
        RxrpcKeyPayload::HEADER_SIZE
    );

    let description = cell.key_description();
    keystore.add(&description, &raw_payload)?;
    info!("Save {} key in {}", description, keystore.id());

    return Ok(());
}

fn expiry_to_string(expiry: u32) -> String {
    match Utc.timestamp_opt(expiry as i64, 0).single() {
        Some(time) => time
            .with_timezone(&Local)
            .format("%m/%d/%Y %H:%M:%S")
            .to_string(),
        None => format!("{}", expiry),
    }
}
