mod source_trait;
pub use source_trait::CredentialSource;

mod ccache;
pub use ccache::CcacheSource;
