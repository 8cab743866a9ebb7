//! The three selectable plate configurations.

use std::fmt;
use std::str::FromStr;

use crate::constants::PRESET_SEPARATIONS;
use crate::errors::PlateFieldError;
use crate::math::Scalar;

/// A preset plate separation offered to the user.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Configuration {
    /// Plates 0.5 m apart.
    One,
    /// Plates 1.0 m apart; the initial selection.
    #[default]
    Two,
    /// Plates 1.5 m apart.
    Three,
}

impl Configuration {
    /// Every configuration in display order.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Position of this configuration in [`Configuration::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }

    /// Plate separation in meters.
    #[must_use]
    pub const fn separation(self) -> Scalar {
        PRESET_SEPARATIONS[self.index()]
    }

    /// Name shown in the selector, e.g. `Configuration 2`.
    #[must_use]
    pub fn label(self) -> String {
        format!("Configuration {}", self.index() + 1)
    }

    /// Identifier used on the command line and in file names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Two => "two",
            Self::Three => "three",
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Configuration {
    type Err = PlateFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "one" => Ok(Self::One),
            "2" | "two" => Ok(Self::Two),
            "3" | "three" => Ok(Self::Three),
            other => Err(PlateFieldError::UnknownConfiguration(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separations_match_presets() {
        assert_eq!(Configuration::One.separation(), 0.5);
        assert_eq!(Configuration::Two.separation(), 1.0);
        assert_eq!(Configuration::Three.separation(), 1.5);
    }

    #[test]
    fn default_is_the_middle_configuration() {
        assert_eq!(Configuration::default(), Configuration::Two);
        assert_eq!(Configuration::default().to_string(), "Configuration 2");
    }

    #[test]
    fn parses_numbers_and_names() {
        assert_eq!("1".parse::<Configuration>().unwrap(), Configuration::One);
        assert_eq!(" Three ".parse::<Configuration>().unwrap(), Configuration::Three);
        for c in Configuration::ALL {
            assert_eq!(c.slug().parse::<Configuration>().unwrap(), c);
        }
        let err = "four".parse::<Configuration>().unwrap_err();
        assert!(err.to_string().contains("four"));
    }
}
