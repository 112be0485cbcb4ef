use crate::algebra::*;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Configuration for the dense Cholesky factorization.
///
/// Construct with defaults via `CholeskySettings::default()`, or set
/// individual fields using the builder:
///
/// ```
/// use numerica::algebra::*;
///
/// let settings = CholeskySettingsBuilder::<f64>::default()
///     .hermitian_check(true)
///     .hermitian_tol(1e-12)
///     .build()
///     .unwrap();
/// ```
///
/// The tolerance type is always real, so complex matrices of
/// `Complex<f64>` are configured with `CholeskySettings<f64>`.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CholeskySettings<T: FloatT> {
    ///verify that the input is Hermitian before factoring.  When
    ///disabled, only the lower triangle of the input is read.
    #[builder(default = "false")]
    pub hermitian_check: bool,

    ///absolute tolerance on `|A[i,j] - conj(A[j,i])|` for the Hermitian check
    #[builder(default = "(1e-10).as_T()")]
    pub hermitian_tol: T,
}

impl<T> Default for CholeskySettings<T>
where
    T: FloatT,
{
    fn default() -> CholeskySettings<T> {
        CholeskySettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> CholeskySettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_hermitian_tol(self.hermitian_tol)
    }
}

// pass SettingsError from the builder's validate() function
impl From<SettingsError> for CholeskySettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        CholeskySettingsBuilderError::ValidationError(e.to_string())
    }
}

impl<T> CholeskySettingsBuilder<T>
where
    T: FloatT,
{
    /// check that the specified hermitian_tol is valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tol) = self.hermitian_tol {
            validate_hermitian_tol(tol)?;
        }
        Ok(())
    }
}

fn validate_hermitian_tol<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    // NaN fails this test as well
    if tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("hermitian_tol"))
    }
}

#[test]
fn test_settings_defaults() {
    let settings = CholeskySettings::<f64>::default();
    assert!(!settings.hermitian_check);
    assert_eq!(settings.hermitian_tol, 1e-10);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validate() {
    let built = CholeskySettingsBuilder::<f32>::default()
        .hermitian_tol(-1.0)
        .build();
    assert!(built.is_err());

    let built = CholeskySettingsBuilder::<f32>::default()
        .hermitian_check(true)
        .hermitian_tol(0.0)
        .build();
    assert!(built.is_ok());

    let mut settings = CholeskySettings::<f64>::default();
    settings.hermitian_tol = f64::NAN;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("hermitian_tol"))
    );
}
