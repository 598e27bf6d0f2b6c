use std::fmt::{Debug, Display};
use std::hash::Hash;
use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};

/// Identity shared by every aggregate: a v4 UUID behind a typed wrapper
pub trait EntityId:
    Clone + Eq + Hash + Debug + Display + Send + Sync + From<Uuid> + 'static
{
    fn as_uuid(&self) -> &Uuid;
}

pub fn parse_uuid(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value).map_err(AppError::from)
}

/// Declares a typed aggregate id backed by a UUID.
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::shared::errors::AppError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                $crate::shared::domain::value_objects::parse_uuid(value).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $crate::shared::domain::value_objects::EntityId for $name {
            fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }
    };
}
