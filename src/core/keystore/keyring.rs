use super::KeyStore;
use crate::error::Error;
use crate::Result;
use log::debug;
use std::ffi::CString;
use std::io;

/// Kernel key type of the AFS rx security keys.
pub const RXRPC_KEY_TYPE: &str = "rxrpc";

const KEY_SPEC_SESSION_KEYRING: i32 = -3;

/// The session keyring of the process, where kAFS looks for the keys.
pub struct SessionKeyring {}

impl SessionKeyring {
    pub fn new() -> Self {
        return Self {};
    }
}

impl KeyStore for SessionKeyring {
    fn id(&self) -> &str {
        return "session keyring";
    }

    fn add(&self, description: &str, payload: &[u8]) -> Result<()> {
        let key_type = to_c_string(RXRPC_KEY_TYPE)?;
        let c_description = to_c_string(description)?;

        let serial = add_key(
            &key_type,
            &c_description,
            payload,
            KEY_SPEC_SESSION_KEYRING,
        )
        .map_err(|err| {
            let message = format!("Unable to add key '{}'", description);
            (message, err)
        })?;

        debug!(
            "Added {} key {} with serial {}",
            RXRPC_KEY_TYPE, description, serial
        );
        return Ok(());
    }
}

fn to_c_string(s: &str) -> Result<CString> {
    return CString::new(s).map_err(|_| {
        Error::DataError(format!("Invalid key description '{}'", s))
    });
}

#[cfg(target_os = "linux")]
fn add_key(
    key_type: &CString,
    description: &CString,
    payload: &[u8],
    keyring: i32,
) -> io::Result<i64> {
    use nix::errno::Errno;
    use nix::libc;

    // SAFETY: the strings are NUL terminated and the payload pointer is
    // valid for its length during the call. The kernel copies all of them.
    let serial = unsafe {
        libc::syscall(
            libc::SYS_add_key,
            key_type.as_ptr(),
            description.as_ptr(),
            payload.as_ptr() as *const libc::c_void,
            payload.len() as libc::size_t,
            keyring as libc::c_long,
        )
    };

    if serial < 0 {
        return Err(io::Error::from(Errno::last()));
    }

    return Ok(serial as i64);
}

#[cfg(not(target_os = "linux"))]
fn add_key(
    _key_type: &CString,
    _description: &CString,
    _payload: &[u8],
    _keyring: i32,
) -> io::Result<i64> {
    return Err(io::Error::new(
        io::ErrorKind::Other,
        "kernel keyrings are only available on Linux",
    ));
}
