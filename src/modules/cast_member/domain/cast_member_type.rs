use std::fmt;

use crate::shared::errors::AppError;

/// Role of a cast member, stored as its numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CastMemberType {
    Director = 1,
    Actor = 2,
}

impl CastMemberType {
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }
}

impl TryFrom<i32> for CastMemberType {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CastMemberType::Director),
            2 => Ok(CastMemberType::Actor),
            other => Err(AppError::InvalidArgument(format!(
                "Invalid cast member type: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for CastMemberType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CastMemberType::Director => write!(f, "Director"),
            CastMemberType::Actor => write!(f, "Actor"),
        }
    }
}
