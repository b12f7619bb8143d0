//! User profile entity - the actor behind emoji administration requests

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A user within a realm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Snowflake,
    pub realm_id: Snowflake,
    pub full_name: String,
    pub is_realm_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a new, non-admin UserProfile
    pub fn new(id: Snowflake, realm_id: Snowflake, full_name: String) -> Self {
        Self {
            id,
            realm_id,
            full_name,
            is_realm_admin: false,
            created_at: Utc::now(),
        }
    }

    /// Create a realm administrator
    pub fn admin(id: Snowflake, realm_id: Snowflake, full_name: String) -> Self {
        Self {
            is_realm_admin: true,
            ..Self::new(id, realm_id, full_name)
        }
    }

    #[inline]
    pub fn is_realm_admin(&self) -> bool {
        self.is_realm_admin
    }
}
