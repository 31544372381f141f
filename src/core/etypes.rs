//! Kerberos enctype numbers involved in the rxkad key selection, with the
//! names used by MIT krb5 for the ones `kerberos_constants` does not carry.

use kerberos_constants::etypes;

pub const NULL: i32 = etypes::NO_ENCRYPTION;
pub const DES_CBC_CRC: i32 = etypes::DES_CBC_CRC;
pub const DES_CBC_MD4: i32 = 2;
pub const DES_CBC_MD5: i32 = etypes::DES_CBC_MD5;
pub const DES_CBC_RAW: i32 = 4;
pub const DES3_CBC_SHA: i32 = 5;
pub const DES3_CBC_RAW: i32 = 6;
pub const DES3_CBC_SHA1_OLD: i32 = 7;
pub const DES_HMAC_SHA1: i32 = 8;
pub const DSA_SHA1_CMS: i32 = 9;
pub const MD5_RSA_CMS: i32 = 10;
pub const SHA1_RSA_CMS: i32 = 11;
pub const RC2_CBC_ENV: i32 = 12;
pub const RSA_ENV: i32 = 13;
pub const RSA_ES_OAEP_ENV: i32 = 14;
pub const DES3_CBC_ENV: i32 = 15;
pub const DES3_CBC_SHA1: i32 = 16;

const UNKNOWN: &str = "???";

pub fn etype_to_string(etype: i32) -> String {
    format!("{} -> {}", etype, etype_name(etype))
}

pub fn etype_name(etype: i32) -> &'static str {
    match etype {
        NULL => "null",
        DES_CBC_CRC => "des-cbc-crc",
        DES_CBC_MD4 => "des-cbc-md4",
        DES_CBC_MD5 => "des-cbc-md5",
        DES_CBC_RAW => "des-cbc-raw",
        DES3_CBC_SHA => "des3-cbc-md5",
        DES3_CBC_RAW => "des3-cbc-raw",
        DES3_CBC_SHA1_OLD => "des3-cbc-sha1",
        DES_HMAC_SHA1 => "des-hmac-sha1",
        DSA_SHA1_CMS => "dsa-sha1-cms",
        MD5_RSA_CMS => "md5-rsa-cms",
        SHA1_RSA_CMS => "sha1-rsa-cms",
        RC2_CBC_ENV => "rc2-cbc-env",
        RSA_ENV => "rsa-env",
        RSA_ES_OAEP_ENV => "rsa-es-oaep-env",
        DES3_CBC_ENV => "des3-cbc-env",
        DES3_CBC_SHA1 => "des3-cbc-sha1-kd",
        etypes::AES128_CTS_HMAC_SHA1_96 => "aes128-cts-hmac-sha1-96",
        etypes::AES256_CTS_HMAC_SHA1_96 => "aes256-cts-hmac-sha1-96",
        etypes::RC4_HMAC => "rc4-hmac",
        etypes::RC4_HMAC_EXP => "rc4-hmac-exp",
        etypes::RC4_HMAC_OLD_EXP => "rc4-hmac-old-exp",
        _ => UNKNOWN,
    }
}
