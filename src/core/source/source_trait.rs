use crate::core::{AfsCell, AfsCredential};
use crate::Result;

/// Supplier of the AFS service ticket of a cell. The returned credentials are
/// trusted as they are.
pub trait CredentialSource {
    fn id(&self) -> &str;

    /// Retrieves the ticket and session key for `afs/<cell>@<realm>`.
    fn get_credential(&self, cell: &AfsCell) -> Result<AfsCredential>;
}
