//! Domain errors for matchup-core.
//!
//! The engine itself is total over valid inputs: the damage formula and the
//! comparators cannot fail. Errors only arise at the boundary, when string
//! parameters or raw catalog records are turned into typed values, or when a
//! request names a unit the catalog does not contain.

/// Severity level of an error.
///
/// - **Validation**: the caller supplied a bad value; reject without retry
/// - **Internal**: the catalog data itself is inconsistent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error points at broken catalog data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common classification for matchup-core errors.
pub trait MatchupError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while validating catalog records and request parameters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DomainError {
    /// A field holds a value outside its enumerated set.
    #[error("{field} must be one of: {allowed} (got '{value}')")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        allowed: &'static str,
    },

    /// Tier outside 1..=3.
    #[error("tier must be one of: 1, 2, 3 (got {0})")]
    InvalidTier(u8),

    /// A required field is empty.
    #[error("{0} can't be blank")]
    MissingField(&'static str),

    /// Two records share the same unit name.
    #[error("unit '{0}' already exists in the catalog")]
    DuplicateUnit(String),

    /// A request referenced a unit name that is not in the catalog.
    #[error("unit '{0}' not found in the catalog")]
    UnknownUnit(String),
}

impl MatchupError for DomainError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateUnit(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use DomainError::*;
        match self {
            InvalidEnumValue { .. } => "DOMAIN_INVALID_ENUM_VALUE",
            InvalidTier(_) => "DOMAIN_INVALID_TIER",
            MissingField(_) => "DOMAIN_MISSING_FIELD",
            DuplicateUnit(_) => "DOMAIN_DUPLICATE_UNIT",
            UnknownUnit(_) => "DOMAIN_UNKNOWN_UNIT",
        }
    }
}

/// Parses an enumerated field, reporting the field name and allowed set on failure.
pub(crate) fn parse_field<T>(
    field: &'static str,
    allowed: &'static str,
    value: &str,
) -> Result<T, DomainError>
where
    T: core::str::FromStr,
{
    value.parse().map_err(|_| DomainError::InvalidEnumValue {
        field,
        value: value.to_owned(),
        allowed,
    })
}
