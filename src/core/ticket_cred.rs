//! Structs to allow handle easier tickets and their associated KrbCredInfo

use crate::core::rxkad::KeyMaterial;
use crate::core::AfsCell;
use crate::error::Error;
use kerberos_asn1::{
    Asn1Object, EncKrbCredPart, EncryptedData, KrbCred, KrbCredInfo, Ticket,
};
use kerberos_ccache::Credential;
use kerberos_constants::etypes::NO_ENCRYPTION;
use std::convert::TryFrom;
use std::slice::Iter;

#[derive(Debug)]
pub struct TicketCreds {
    pub ticket_creds: Vec<TicketCred>,
}

impl TicketCreds {
    pub fn new(ticket_creds: Vec<TicketCred>) -> Self {
        return Self { ticket_creds };
    }

    pub fn iter(&self) -> Iter<'_, TicketCred> {
        return self.ticket_creds.iter();
    }

    pub fn len(&self) -> usize {
        return self.ticket_creds.len();
    }

    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&TicketCred) -> bool,
    {
        self.iter()
            .filter(|tci| predicate(tci))
            .cloned()
            .collect::<Vec<TicketCred>>()
            .into()
    }

    /// Filter tickets for srealm (realm of the service). Case insensitive.
    pub fn srealm(&self, realm: &str) -> Self {
        self.filter(|tci| {
            if let Some(srealm) = &tci.cred_info.srealm {
                return srealm.to_lowercase() == realm.to_lowercase();
            }
            return false;
        })
    }

    /// Filter tickets whose service name components are the given ones.
    /// Case insensitive.
    pub fn sname_parts(&self, parts: &[String]) -> Self {
        self.filter(|tci| {
            if let Some(sname) = &tci.cred_info.sname {
                return sname.name_string.len() == parts.len()
                    && sname
                        .name_string
                        .iter()
                        .zip(parts.iter())
                        .all(|(s, p)| s.to_lowercase() == p.to_lowercase());
            }
            return false;
        })
    }

    /// Filter to only return the tickets of the AFS service of a cell.
    pub fn afs_cell(&self, cell: &AfsCell) -> Self {
        return self.srealm(&cell.realm).sname_parts(&cell.service_parts());
    }

    /// The ticket that expires the latest, if any.
    pub fn latest(&self) -> Option<&TicketCred> {
        return self
            .iter()
            .max_by_key(|tci| {
                tci.cred_info.endtime.as_ref().map(|t| t.timestamp())
            });
    }
}

impl Into<KrbCred> for TicketCreds {
    fn into(self) -> KrbCred {
        let mut krb_cred = KrbCred::default();
        let mut tickets = Vec::with_capacity(self.ticket_creds.len());
        let mut cred_infos = Vec::with_capacity(self.ticket_creds.len());

        for ticket_cred_info in self.ticket_creds {
            tickets.push(ticket_cred_info.ticket);
            cred_infos.push(ticket_cred_info.cred_info);
        }

        krb_cred.tickets = tickets;
        let mut cred_part = EncKrbCredPart::default();
        cred_part.ticket_info = cred_infos;
        krb_cred.enc_part =
            EncryptedData::new(NO_ENCRYPTION, None, cred_part.build());
        return krb_cred;
    }
}

/// Convert from Kerberos credentials in plain text, the usual way of storing
/// them in machines. In case the credentials are encrypted this will fail.
impl TryFrom<KrbCred> for TicketCreds {
    type Error = Error;

    fn try_from(krb_cred: KrbCred) -> Result<Self, Error> {
        if krb_cred.enc_part.etype != NO_ENCRYPTION {
            return Err(Error::DataError(format!(
                "Unable to decrypt the credentials"
            )));
        }

        let (_, cred_part) = EncKrbCredPart::parse(&krb_cred.enc_part.cipher)
            .map_err(|_| {
            Error::DataError(format!(
                "Error parsing credentials: EncKrbCredPart"
            ))
        })?;

        let tickets = krb_cred.tickets;
        let cred_infos = cred_part.ticket_info;

        return Ok((tickets, cred_infos).into());
    }
}

impl From<(Vec<Ticket>, Vec<KrbCredInfo>)> for TicketCreds {
    fn from((tickets, cred_infos): (Vec<Ticket>, Vec<KrbCredInfo>)) -> Self {
        let mut ticket_cred_infos = Vec::with_capacity(tickets.len());

        for (ticket, cred_info) in
            tickets.into_iter().zip(cred_infos.into_iter())
        {
            ticket_cred_infos.push(TicketCred::new(ticket, cred_info));
        }

        return Self::new(ticket_cred_infos);
    }
}

impl From<Vec<TicketCred>> for TicketCreds {
    fn from(v: Vec<TicketCred>) -> Self {
        return Self::new(v);
    }
}

/// Struct to store a ticket and the related user info, like the session key.
#[derive(Debug, Clone)]
pub struct TicketCred {
    pub ticket: Ticket,
    pub cred_info: KrbCredInfo,
}

impl TicketCred {
    pub fn new(ticket: Ticket, cred_info: KrbCredInfo) -> Self {
        return Self { ticket, cred_info };
    }
}

/// What rxkad needs from an AFS service ticket.
#[derive(Debug)]
pub struct AfsCredential {
    pub key: KeyMaterial,
    /// DER encoded ticket.
    pub ticket: Vec<u8>,
    /// End time of the ticket, in seconds since the epoch.
    pub expiry: u32,
}

impl TryFrom<&TicketCred> for AfsCredential {
    type Error = Error;

    fn try_from(tcred: &TicketCred) -> Result<Self, Error> {
        let endtime = tcred
            .cred_info
            .endtime
            .as_ref()
            .ok_or_else(|| Error::DataError("Ticket without end time".into()))?;

        let expiry = u32::try_from(endtime.timestamp()).map_err(|_| {
            Error::DataError(format!(
                "Ticket end time {} out of range",
                endtime.timestamp()
            ))
        })?;

        let key = &tcred.cred_info.key;

        return Ok(Self {
            key: KeyMaterial::new(key.keytype, key.keyvalue.clone()),
            ticket: tcred.ticket.build(),
            expiry,
        });
    }
}

/// Take the AFS credential of a ccache entry. The ticket is kept in the
/// encoding found in the cache.
impl From<Credential> for AfsCredential {
    fn from(credential: Credential) -> Self {
        // ccache stores the enctype in 16 bits
        let etype = credential.key.keytype as i16 as i32;

        return Self {
            key: KeyMaterial::new(etype, credential.key.keyvalue),
            ticket: credential.ticket.data,
            expiry: credential.time.endtime,
        };
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use kerberos_asn1::{EncryptionKey, KerberosTime, PrincipalName};
    use kerberos_ccache::{CountedOctetString, KeyBlock, Principal, Times};
    use kerberos_constants::principal_names::{NT_PRINCIPAL, NT_SRV_INST};
    use kerberos_constants::ticket_flags;

    pub fn new_ticket_cred(
        service: &str,
        realm: &str,
        etype: i32,
        key: Vec<u8>,
        endtime: Option<i64>,
    ) -> TicketCred {
        let sname = PrincipalName {
            name_type: NT_SRV_INST,
            name_string: service.split("/").map(|s| s.to_string()).collect(),
        };

        let ticket = Ticket {
            tkt_vno: 5,
            realm: realm.to_string(),
            sname: sname.clone(),
            enc_part: EncryptedData::new(etype, Some(2), vec![0xaa; 64]),
        };

        let authtime: KerberosTime =
            Utc.timestamp_opt(1600000000, 0).unwrap().into();

        let cred_info = KrbCredInfo {
            key: EncryptionKey {
                keytype: etype,
                keyvalue: key,
            },
            prealm: Some(realm.to_string()),
            pname: Some(PrincipalName {
                name_type: NT_PRINCIPAL,
                name_string: vec!["alice".to_string()],
            }),
            flags: Some(
                (ticket_flags::FORWARDABLE | ticket_flags::PRE_AUTHENT).into(),
            ),
            authtime: Some(authtime.clone()),
            starttime: Some(authtime),
            endtime: endtime.map(|t| {
                let endtime: KerberosTime =
                    Utc.timestamp_opt(t, 0).unwrap().into();
                endtime
            }),
            renew_till: None,
            srealm: Some(realm.to_string()),
            sname: Some(sname),
            caddr: None,
        };

        return TicketCred::new(ticket, cred_info);
    }

    fn ticket_creds() -> TicketCreds {
        return vec![
            new_ticket_cred(
                "krbtgt/EXAMPLE.COM",
                "EXAMPLE.COM",
                18,
                vec![1; 32],
                Some(1700000000),
            ),
            new_ticket_cred(
                "afs/example.com",
                "EXAMPLE.COM",
                18,
                vec![2; 32],
                Some(1700000000),
            ),
            new_ticket_cred(
                "AFS/Example.com",
                "example.com",
                17,
                vec![3; 16],
                Some(1700003600),
            ),
            new_ticket_cred(
                "afs/other.org",
                "EXAMPLE.COM",
                18,
                vec![4; 32],
                Some(1700007200),
            ),
            new_ticket_cred(
                "afs",
                "EXAMPLE.COM",
                18,
                vec![5; 32],
                Some(1700007200),
            ),
        ]
        .into();
    }

    #[test]
    fn test_filter_afs_cell() {
        let cell = AfsCell::new("example.com", None);
        let creds = ticket_creds().afs_cell(&cell);
        assert_eq!(2, creds.len());

        let latest = creds.latest().unwrap();
        assert_eq!(17, latest.cred_info.key.keytype);
    }

    #[test]
    fn test_filter_afs_cell_with_realm() {
        let cell = AfsCell::new("other.org", Some("EXAMPLE.COM"));
        let creds = ticket_creds().afs_cell(&cell);
        assert_eq!(1, creds.len());
        let latest = creds.latest().unwrap();
        assert_eq!(vec![4; 32], latest.cred_info.key.keyvalue);
    }

    #[test]
    fn test_filter_no_afs_ticket() {
        let cell = AfsCell::new("nowhere.net", None);
        let creds = ticket_creds().afs_cell(&cell);
        assert_eq!(0, creds.len());
        assert!(creds.latest().is_none());
    }

    #[test]
    fn test_afs_credential_from_ticket_cred() {
        let tcred = new_ticket_cred(
            "afs/example.com",
            "EXAMPLE.COM",
            16,
            vec![7; 24],
            Some(1700000000),
        );

        let cred = AfsCredential::try_from(&tcred).unwrap();
        assert_eq!(16, cred.key.etype());
        assert_eq!(&[7; 24][..], cred.key.as_bytes());
        assert_eq!(1700000000, cred.expiry);
        assert_eq!(tcred.ticket.build(), cred.ticket);
    }

    #[test]
    fn test_afs_credential_without_endtime() {
        let tcred = new_ticket_cred(
            "afs/example.com",
            "EXAMPLE.COM",
            18,
            vec![7; 32],
            None,
        );
        assert!(AfsCredential::try_from(&tcred).unwrap_err().is_data_error());
    }

    #[test]
    fn test_afs_credential_endtime_out_of_range() {
        let tcred = new_ticket_cred(
            "afs/example.com",
            "EXAMPLE.COM",
            18,
            vec![7; 32],
            Some(1 << 33),
        );
        assert!(AfsCredential::try_from(&tcred).unwrap_err().is_data_error());
    }

    #[test]
    fn test_krb_cred_round_trip() {
        let krb_cred: KrbCred = ticket_creds().into();
        let creds = TicketCreds::try_from(krb_cred).unwrap();
        assert_eq!(5, creds.len());
    }

    fn ccache_credential(keytype: u16) -> Credential {
        return Credential::new(
            Principal::new(
                NT_PRINCIPAL as u32,
                "EXAMPLE.COM".into(),
                vec!["alice".into()],
            ),
            Principal::new(
                NT_SRV_INST as u32,
                "EXAMPLE.COM".into(),
                vec!["afs".into(), "example.com".into()],
            ),
            KeyBlock::new(keytype, vec![7; 16]),
            Times::new(1600000000, 1600000000, 1700000000, 0),
            0,
            0,
            CountedOctetString::new(vec![0x61, 0x03, 0x02, 0x01, 0x05]),
        );
    }

    #[test]
    fn test_afs_credential_from_ccache_credential() {
        let cred = AfsCredential::from(ccache_credential(17));
        assert_eq!(17, cred.key.etype());
        assert_eq!(&[7; 16][..], cred.key.as_bytes());
        assert_eq!(1700000000, cred.expiry);
        assert_eq!(vec![0x61, 0x03, 0x02, 0x01, 0x05], cred.ticket);
    }

    #[test]
    fn test_afs_credential_from_ccache_negative_etype() {
        let cred = AfsCredential::from(ccache_credential(-135i16 as u16));
        assert_eq!(-135, cred.key.etype());
    }
}
