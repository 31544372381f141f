mod afs_cell;
pub use afs_cell::AfsCell;

mod cred_format;
pub use cred_format::CredFormat;

pub mod etypes;

mod keystore;
pub use keystore::{FileKeyStore, KeyStore, SessionKeyring};

pub mod rxkad;

mod source;
pub use source::{CcacheSource, CredentialSource};

mod ticket_cred;
pub use ticket_cred::{AfsCredential, TicketCreds};
