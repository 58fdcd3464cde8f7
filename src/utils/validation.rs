use crate::utils::error::{Result, SequenceError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SequenceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SequenceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SequenceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Checks that `bits` is non-empty and made only of '0' and '1'.
pub fn validate_bit_string(name: &str, bits: &str) -> Result<()> {
    if bits.is_empty() {
        return Err(SequenceError::ValidationError {
            message: format!("Sequence '{}' is empty", name),
        });
    }

    if let Some((pos, ch)) = bits.char_indices().find(|(_, c)| *c != '0' && *c != '1') {
        return Err(SequenceError::ValidationError {
            message: format!(
                "Sequence '{}' has invalid character {:?} at position {}",
                name, ch, pos
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("analysis.input", "sequences.json").is_ok());
        assert!(validate_path("analysis.input", "").is_err());
        assert!(validate_path("analysis.input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("analysis.block_size", 8, 1).is_ok());
        assert!(validate_positive_number("analysis.block_size", 0, 1).is_err());
    }

    #[test]
    fn test_validate_bit_string() {
        assert!(validate_bit_string("ok", "0101").is_ok());
        assert!(validate_bit_string("empty", "").is_err());

        let err = validate_bit_string("bad", "01x1").unwrap_err();
        assert!(err.to_string().contains("position 2"));
    }
}
