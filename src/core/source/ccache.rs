use super::CredentialSource;
use crate::core::{AfsCell, AfsCredential, CredFormat, TicketCreds};
use crate::error::Error;
use crate::Result;
use kerberos_asn1::{Asn1Object, KrbCred, Ticket};
use kerberos_ccache::{CCache, Credential};
use log::{debug, info};
use std::convert::TryFrom;
use std::fs;

/// Realm of the entries where MIT krb5 keeps cache configuration, such as
/// `krb5_ccache_conf_data/pa_type/<princ>@X-CACHECONF:`.
const CACHE_CONF_REALM: &[u8] = b"X-CACHECONF:";

/// Credentials cache stored in a file, in ccache or krb format.
pub struct CcacheSource {
    file_path: String,
}

impl CcacheSource {
    pub fn new(file_path: String) -> Self {
        return Self { file_path };
    }

    fn find_credential(
        &self,
        cell: &AfsCell,
    ) -> Result<Option<AfsCredential>> {
        let data = fs::read(&self.file_path).map_err(|err| {
            let message =
                format!("Unable to read the file '{}'", self.file_path);
            (message, err)
        })?;

        match CCache::parse(&data) {
            Ok((_, ccache)) => {
                info!(
                    "Read {} credentials from {} with {} format",
                    ccache.credentials.len(),
                    self.file_path,
                    CredFormat::Ccache
                );
                return Ok(ccache_afs_credential(ccache, cell));
            }
            Err(_) => {
                let (_, krb_cred) = KrbCred::parse(&data).map_err(|_| {
                    Error::DataError(format!(
                        "Error parsing content of ccache/krb file '{}'",
                        self.file_path
                    ))
                })?;
                let ticket_creds = TicketCreds::try_from(krb_cred)?;
                info!(
                    "Read {} credentials from {} with {} format",
                    ticket_creds.len(),
                    self.file_path,
                    CredFormat::Krb
                );

                let afs_creds = ticket_creds.afs_cell(cell);
                debug!("Found {} tickets for {}", afs_creds.len(), cell);

                return afs_creds
                    .latest()
                    .map(AfsCredential::try_from)
                    .transpose();
            }
        }
    }
}

impl CredentialSource for CcacheSource {
    fn id(&self) -> &str {
        return &self.file_path;
    }

    fn get_credential(&self, cell: &AfsCell) -> Result<AfsCredential> {
        let credential = self.find_credential(cell)?.ok_or_else(|| {
            format!(
                "No ticket for {} found in {}, request one with kinit/kvno",
                cell, self.file_path
            )
        })?;

        return Ok(credential);
    }
}

/// Select the AFS ticket of the cell among the ccache entries. Configuration
/// entries and tickets that cannot be parsed are skipped. The ticket bytes
/// are kept as stored in the cache.
fn ccache_afs_credential(
    ccache: CCache,
    cell: &AfsCell,
) -> Option<AfsCredential> {
    let afs_creds: Vec<Credential> = ccache
        .credentials
        .into_iter()
        .filter(|credential| !is_cache_conf(credential))
        .filter(|credential| is_afs_service(credential, cell))
        .filter(|credential| {
            if Ticket::parse(&credential.ticket.data).is_err() {
                debug!("Skip entry of {} with invalid ticket", cell);
                return false;
            }
            return true;
        })
        .collect();
    debug!("Found {} tickets for {}", afs_creds.len(), cell);

    return afs_creds
        .into_iter()
        .max_by_key(|credential| credential.time.endtime)
        .map(AfsCredential::from);
}

fn is_cache_conf(credential: &Credential) -> bool {
    return credential.server.realm.data == CACHE_CONF_REALM;
}

/// Whether the entry server is `afs/<cell>@<realm>`. Case insensitive.
fn is_afs_service(credential: &Credential, cell: &AfsCell) -> bool {
    let server = &credential.server;
    if !String::from_utf8_lossy(&server.realm.data)
        .eq_ignore_ascii_case(&cell.realm)
    {
        return false;
    }

    let parts = cell.service_parts();
    return server.components.len() == parts.len()
        && server
            .components
            .iter()
            .zip(parts.iter())
            .all(|(component, part)| {
                String::from_utf8_lossy(&component.data)
                    .eq_ignore_ascii_case(part)
            });
}
