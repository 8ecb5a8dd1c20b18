//! Strongly-typed ID newtypes for domain entities.
//!
//! Every table keys its rows with a 64-bit integer. Wrapping each in its own
//! type keeps a `StudentId` from being passed where a `UserId` is expected,
//! which matters here because guardianship compares student ids while
//! self-ownership compares user ids.
//!
//! # Example
//!
//! ```ignore
//! use academia_models::ids::{StudentId, UserId};
//!
//! fn is_linked(user: UserId, student: StudentId) -> bool { /* ... */ }
//!
//! is_linked(UserId::new(7), StudentId::new(101));    // OK
//! // is_linked(StudentId::new(101), UserId::new(7)); // Compile error
//! ```

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Type,
    postgres::{PgHasArrayType, PgTypeInfo},
};
use std::fmt;

/// Defines a strongly-typed ID newtype over `i64`, with the conversions,
/// serde and SQLx Postgres impls every entity id needs.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the raw integer value.
            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }

        impl Type<sqlx::Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                <i64 as Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <i64 as Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <i64 as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        impl<'r> Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: <sqlx::Postgres as Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <i64 as Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
            }
        }

        impl PgHasArrayType for $name {
            fn array_type_info() -> PgTypeInfo {
                <i64 as PgHasArrayType>::array_type_info()
            }
        }
    };
}

define_id!(
    /// ID of a user account (any role).
    UserId
);

define_id!(
    /// ID of a student record. Not a user id.
    StudentId
);

define_id!(
    /// ID of a parent-to-student link record.
    ParentLinkId
);

define_id!(MessageId);
define_id!(NotificationId);
define_id!(AnnouncementId);
define_id!(FeeStructureId);
define_id!(FeePaymentId);
define_id!(ExpenseId);
define_id!(ReportTemplateId);
define_id!(GeneratedReportId);
define_id!(StaffId);
define_id!(DataImportId);
define_id!(DataExportId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_debug_names_type() {
        assert_eq!(format!("{:?}", UserId::new(7)), "UserId(7)");
        assert_eq!(format!("{:?}", StudentId::new(101)), "StudentId(101)");
    }

    #[test]
    fn test_id_display() {
        assert_eq!(MessageId::new(42).to_string(), "42");
    }

    #[test]
    fn test_id_from_str() {
        let id: UserId = "12".parse().unwrap();
        assert_eq!(id.get(), 12);
        assert!("twelve".parse::<UserId>().is_err());
    }

    #[test]
    fn test_id_serde_is_transparent() {
        assert_eq!(serde_json::to_string(&StudentId::new(5)).unwrap(), "5");
        let id: FeePaymentId = serde_json::from_str("9").unwrap();
        assert_eq!(id, FeePaymentId::new(9));
    }

    #[test]
    fn test_id_conversion() {
        let id: UserId = 3i64.into();
        let raw: i64 = id.into();
        assert_eq!(raw, 3);
    }

    #[test]
    fn test_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StudentId::new(1));
        set.insert(StudentId::new(2));
        set.insert(StudentId::new(1));
        assert_eq!(set.len(), 2);
    }
}
