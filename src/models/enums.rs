use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn gender_roundtrips_through_str() {
        for g in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(Gender::from_str(g.as_str()).unwrap(), g);
        }
    }

    #[test]
    fn unknown_gender_is_invalid_enum() {
        assert!(Gender::from_str("male").is_err());
        assert!(Gender::from_str("Unknown").is_err());
    }

    #[test]
    fn gender_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), r#""Male""#);
    }
}
