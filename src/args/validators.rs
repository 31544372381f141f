use crate::core::AfsCell;
use std::convert::TryFrom;

pub fn is_cell(v: String) -> Result<(), String> {
    AfsCell::try_from(v)?;
    return Ok(());
}

pub fn is_realm(v: String) -> Result<(), String> {
    if v.is_empty() || v.contains('@') {
        return Err(format!(
            "Invalid realm '{}', it must be a name like EXAMPLE.COM",
            v
        ));
    }
    return Ok(());
}

pub fn is_i32(v: String) -> Result<(), String> {
    v.parse::<i32>().map_err(|_| {
        format!(
            "Incorrect value '{}' must be a signed integer of 32 bits (i32)",
            v
        )
    })?;

    return Ok(());
}

pub fn is_hex(v: String) -> Result<(), String> {
    decode_hex(&v)?;
    return Ok(());
}

pub fn decode_hex(v: &str) -> Result<Vec<u8>, String> {
    return hex::decode(v).map_err(|err| {
        format!(
            "Invalid key '{}', must be a string of hexadecimals: {}",
            v, err
        )
    });
}
