use crate::utils::error::{Result, TrayError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrayError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_weight(field_name: &str, weight: f64) -> Result<()> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(TrayError::InvalidConfigValue {
            field: field_name.to_string(),
            value: weight.to_string(),
            reason: "Weight must be a positive number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_minimum_amount(field_name: &str, amount: u32, min_value: u32) -> Result<()> {
    if amount < min_value {
        return Err(TrayError::InvalidConfigValue {
            field: field_name.to_string(),
            value: amount.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TrayError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
