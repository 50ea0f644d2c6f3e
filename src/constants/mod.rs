//! Physical constants and elementwise unit conversions.
//!
//! Temperature conversion routes through Kelvin as the common pivot, so
//! every scale pair is a pure pointwise affine transform and round trips
//! recover the input to within floating-point rounding.
//!
//! # Examples
//!
//! ```
//! use medir::constants::{convert_temperature, lambda2nu, SPEED_OF_LIGHT};
//! use medir::primitives::Array;
//!
//! let c = Array::from_vec(1, 2, vec![0.0, 100.0]).expect("valid shape");
//! let f = convert_temperature(&c, "Celsius", "Fahrenheit").expect("recognized scales");
//! assert_eq!(f.as_slice(), &[32.0, 212.0]);
//!
//! let lambda = Array::scalar(SPEED_OF_LIGHT);
//! assert_eq!(lambda2nu(&lambda).get(0, 0), 1.0);
//! ```

use crate::error::{MedirError, Result};
use crate::primitives::Array;

/// Speed of light in vacuum, m/s (exact).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Zero of the Celsius scale expressed in Kelvin (exact).
pub const ZERO_CELSIUS: f64 = 273.15;

/// A recognized temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    /// Degrees Celsius
    Celsius,
    /// Kelvin
    Kelvin,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Degrees Rankine
    Rankine,
}

impl TemperatureScale {
    /// Parses a scale identifier. Full names and single-letter aliases
    /// are accepted, case-insensitively. `param` names the argument being
    /// parsed and is carried into the error.
    ///
    /// # Errors
    ///
    /// Returns [`MedirError::UnsupportedScale`] for unrecognized input.
    pub fn parse(value: &str, param: &'static str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "celsius" | "c" => Ok(Self::Celsius),
            "kelvin" | "k" => Ok(Self::Kelvin),
            "fahrenheit" | "f" => Ok(Self::Fahrenheit),
            "rankine" | "r" => Ok(Self::Rankine),
            _ => Err(MedirError::UnsupportedScale {
                param,
                value: value.to_string(),
            }),
        }
    }

    /// Converts a value on this scale to Kelvin.
    #[must_use]
    pub fn to_kelvin(self, x: f64) -> f64 {
        match self {
            Self::Celsius => x + ZERO_CELSIUS,
            Self::Kelvin => x,
            Self::Fahrenheit => (x - 32.0) * 5.0 / 9.0 + ZERO_CELSIUS,
            Self::Rankine => x * 5.0 / 9.0,
        }
    }

    /// Converts a value in Kelvin to this scale.
    #[must_use]
    pub fn from_kelvin(self, k: f64) -> f64 {
        match self {
            Self::Celsius => k - ZERO_CELSIUS,
            Self::Kelvin => k,
            Self::Fahrenheit => (k - ZERO_CELSIUS) * 9.0 / 5.0 + 32.0,
            Self::Rankine => k * 9.0 / 5.0,
        }
    }
}

/// Converts temperatures elementwise from `old_scale` to `new_scale`.
///
/// Scale identifiers are matched case-insensitively against the full
/// names and single-letter aliases of Celsius, Kelvin, Fahrenheit and
/// Rankine. Both identifiers are validated before any value is
/// converted.
///
/// # Errors
///
/// Returns [`MedirError::UnsupportedScale`] naming the offending
/// parameter (`old_scale` or `new_scale`) for unrecognized identifiers.
pub fn convert_temperature(values: &Array, old_scale: &str, new_scale: &str) -> Result<Array> {
    let from = TemperatureScale::parse(old_scale, "old_scale")?;
    let to = TemperatureScale::parse(new_scale, "new_scale")?;
    Ok(values.map(|x| to.from_kelvin(from.to_kelvin(x))))
}

/// Converts wavelengths (m) to optical frequencies (Hz), elementwise.
///
/// The transform is its own inverse: [`nu2lambda`] applies the identical
/// map, so composing the two recovers the input.
#[must_use]
pub fn lambda2nu(lambda: &Array) -> Array {
    lambda.map(|x| SPEED_OF_LIGHT / x)
}

/// Converts optical frequencies (Hz) to wavelengths (m), elementwise.
#[must_use]
pub fn nu2lambda(nu: &Array) -> Array {
    lambda2nu(nu)
}
