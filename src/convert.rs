//! Hex-encoded IEEE-754 bit pattern decoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HexFloatError {
    #[error("Invalid hex value {value}: {source}")]
    Parse {
        value: String,
        source: std::num::ParseIntError,
    },
}

fn strip_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
}

/// Decode a hex bit pattern like `"0x41b80000"` into an `f32` (23.0 for that
/// example). Callers holding raw bits should use `f32::from_bits` directly.
pub fn hex_to_f32(hex: &str) -> Result<f32, HexFloatError> {
    let bits = u32::from_str_radix(strip_prefix(hex), 16).map_err(|e| HexFloatError::Parse {
        value: hex.to_string(),
        source: e,
    })?;
    Ok(f32::from_bits(bits))
}

/// Decode a hex bit pattern into an `f64`.
pub fn hex_to_f64(hex: &str) -> Result<f64, HexFloatError> {
    let bits = u64::from_str_radix(strip_prefix(hex), 16).map_err(|e| HexFloatError::Parse {
        value: hex.to_string(),
        source: e,
    })?;
    Ok(f64::from_bits(bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_f32_known_value() {
        assert_eq!(hex_to_f32("0x41b80000").unwrap(), 23.0);
    }

    #[test]
    fn test_hex_to_f32_without_prefix() {
        assert_eq!(hex_to_f32("41b80000").unwrap(), 23.0);
    }

    #[test]
    fn test_hex_to_f32_zero() {
        assert_eq!(hex_to_f32("0").unwrap(), 0.0);
    }

    #[test]
    fn test_hex_to_f64_known_value() {
        assert_eq!(hex_to_f64("0x4037000000000000").unwrap(), 23.0);
    }

    #[test]
    fn test_invalid_hex_fails() {
        assert!(hex_to_f32("not-hex").is_err());
        assert!(hex_to_f64("0xzz").is_err());
    }

    #[test]
    fn test_roundtrip_bits() {
        let value = -1.5f32;
        let hex = format!("{:08x}", value.to_bits());
        assert_eq!(hex_to_f32(&hex).unwrap(), value);
    }
}
