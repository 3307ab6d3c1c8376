use thiserror::Error;

/// Validation errors reported synchronously by engine construction and
/// configuration. Out-of-bounds cell coordinates are deliberately not an
/// error anywhere; they are ignored so patterns may overlap the boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Grid dimensions must both be positive
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// A numeric parameter fell outside its documented range
    #[error("{name} must be within [{min}, {max}], got {value}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::InvalidDimension {
            width: 0,
            height: 5,
        };
        assert_eq!(err.to_string(), "grid dimensions must be positive, got 0x5");

        let err = EngineError::InvalidParameter {
            name: "density",
            value: 1.5,
            min: 0.0,
            max: 1.0,
        };
        assert_eq!(err.to_string(), "density must be within [0, 1], got 1.5");
    }
}
