//! US state codes.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const STATES: [(&str, &str); 51] = [
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// A two-letter state code, including `DC`.
///
/// Parsing accepts either the code or the full state name, ignoring case and
/// surrounding whitespace.
///
/// # Examples
/// ```
/// use gridsite_core::StateCode;
///
/// let code: StateCode = "wisconsin".parse()?;
/// assert_eq!(code.as_str(), "WI");
/// assert_eq!(code.name(), "Wisconsin");
/// # Ok::<(), gridsite_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct StateCode(&'static str);

impl StateCode {
    /// The upper-case code, for example `"TX"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// The full state name.
    #[must_use]
    pub fn name(self) -> &'static str {
        STATES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map_or(self.0, |&(_, name)| name)
    }

    /// Whether `code` names this state. Case and surrounding whitespace are
    /// ignored.
    #[must_use]
    pub fn matches(self, code: &str) -> bool {
        self.0.eq_ignore_ascii_case(code.trim())
    }
}

impl FromStr for StateCode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        STATES
            .iter()
            .find(|(code, name)| {
                code.eq_ignore_ascii_case(wanted) || name.eq_ignore_ascii_case(wanted)
            })
            .map(|&(code, _)| Self(code))
            .ok_or_else(|| ConfigError::UnknownState {
                value: s.to_owned(),
            })
    }
}

impl TryFrom<String> for StateCode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StateCode> for String {
    fn from(value: StateCode) -> Self {
        value.0.to_owned()
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CA", "CA")]
    #[case(" tx ", "TX")]
    #[case("New Mexico", "NM")]
    #[case("district of columbia", "DC")]
    fn parses_codes_and_names(#[case] input: &str, #[case] expected: &str) {
        let code: StateCode = input.parse().expect("known state");
        assert_eq!(code.as_str(), expected);
    }

    #[rstest]
    #[case("XX")]
    #[case("")]
    #[case("Puerto")]
    fn rejects_unknown_states(#[case] input: &str) {
        let err = input.parse::<StateCode>().expect_err("unknown state");
        assert_eq!(
            err,
            ConfigError::UnknownState {
                value: input.to_owned()
            }
        );
    }

    #[rstest]
    fn matches_ignores_case() {
        let code: StateCode = "OR".parse().expect("known state");
        assert!(code.matches("or"));
        assert!(!code.matches("WA"));
    }
}
