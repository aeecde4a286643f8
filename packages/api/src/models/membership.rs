//! # Membership model
//!
//! A [`Membership`] ties a user to a membership type for a period. Besides
//! the raw references and timestamps, the record carries display strings the
//! server computes for the admin tables (owner name, type name, formatted
//! price and duration) so the client never re-derives pricing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user's enrolment in a membership type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: i64,
    pub user_id: String,
    /// Owner's display name, computed server-side.
    pub user_name: String,
    pub membership_type_id: i64,
    pub membership_type_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    /// Server-formatted price, e.g. "29.99 EUR".
    pub price: String,
    /// Server-formatted duration, e.g. "1 month".
    pub duration: String,
}

impl Membership {
    /// Date range for table rendering.
    pub fn period(&self) -> String {
        format!(
            "{} – {}",
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d")
        )
    }
}

impl store::Record for Membership {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Payload for `POST /memberships`. The end date, price and duration follow
/// from the membership type server-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembership {
    pub user_id: String,
    pub membership_type_id: i64,
    pub start_date: DateTime<Utc>,
}

/// Payload for `PUT /memberships/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMembership {
    pub membership_type_id: i64,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_server_shape() {
        let membership: Membership = serde_json::from_value(serde_json::json!({
            "id": 7,
            "userId": "9f1c",
            "userName": "Dana Whitfield",
            "membershipTypeId": 2,
            "membershipTypeName": "Gold",
            "startDate": "2026-01-01T00:00:00Z",
            "endDate": "2026-02-01T00:00:00Z",
            "isActive": true,
            "price": "29.99 EUR",
            "duration": "1 month"
        }))
        .unwrap();

        assert_eq!(membership.membership_type_name, "Gold");
        assert!(membership.is_active);
        assert_eq!(membership.period(), "2026-01-01 – 2026-02-01");
    }
}
