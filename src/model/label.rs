//! Fixed label sets stored as strings in the database.
//!
//! Every enumerated field (player role, match status, dismissal type, ...) is declared with
//! [`label_enum!`], which derives the serde and OpenAPI representation from the same label
//! used in the database column so the three can never drift apart.

use thiserror::Error;

/// A string did not match any label of the expected set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind} '{value}', expected one of: {expected}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Declares a fieldless enum with a display label per variant.
///
/// The generated type implements `Serialize`/`Deserialize` and `ToSchema` using the labels,
/// plus `as_str`, `Display` and `FromStr` (failing with [`UnknownLabel`]).
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:tt) {
            $($variant:ident => $label:tt),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            Debug,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            utoipa::ToSchema,
        )]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::label::UnknownLabel;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($label => Ok($name::$variant),)+
                    _ => Err($crate::model::label::UnknownLabel {
                        kind: $kind,
                        value: value.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|label| label.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }
    };
}

pub(crate) use label_enum;

#[cfg(test)]
mod tests {
    use crate::model::{fixture::MatchStatus, player::BowlingStyle};

    /// Labels parse back into the variant they were produced from
    #[test]
    fn parses_own_labels() {
        for style in BowlingStyle::ALL {
            assert_eq!(style.as_str().parse::<BowlingStyle>(), Ok(*style));
        }
    }

    /// Unknown labels list the accepted values
    #[test]
    fn rejects_unknown_label() {
        let err = "Postponed".parse::<MatchStatus>().unwrap_err();

        assert_eq!(err.kind, "match status");
        assert_eq!(
            err.to_string(),
            "Invalid match status 'Postponed', expected one of: Scheduled, In Progress, Completed, Cancelled"
        );
    }

    /// Serde uses the display label rather than the variant name
    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&MatchStatus::InProgress).unwrap();

        assert_eq!(json, "\"In Progress\"");
    }
}
