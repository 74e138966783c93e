use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

pub const FAKE_ADMIN_EMAIL: &str = "admin@customwear.com";
const FAKE_ADMIN_ID: Uuid = uuid!("00000000-0000-0000-0000-000000000001");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

/// A dashboard user as persisted under the `user` storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
}

/// Only the role matters when deciding admin access, the rest of the record may be absent.
#[derive(Deserialize)]
struct StoredRole {
    role: Role,
}

impl Identity {
    pub fn fake_admin() -> Self {
        Self {
            id: FAKE_ADMIN_ID,
            first_name: "Admin".into(),
            last_name: "User".into(),
            email: FAKE_ADMIN_EMAIL.into(),
            role: Role::Admin,
            status: Status::Active,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// The record as persisted under the `user` key.
    ///
    /// # Panics
    /// Never in practice: every field serializes to plain JSON strings.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("Failed to serialize an identity")
    }

    /// Extract the role out of a serialized user record.
    pub fn parse_role(raw: &str) -> Result<Role, serde_json::Error> {
        serde_json::from_str::<StoredRole>(raw).map(|r| r.role)
    }
}
