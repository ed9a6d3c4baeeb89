use crate::model::{generate_id, now, Id, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
    Merchant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
            Role::Merchant => "merchant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "member" => Ok(Role::Member),
            "merchant" => Ok(Role::Merchant),
            other => Err(anyhow::anyhow!("Unknown role '{}'", other)),
        }
    }
}

/// A persisted account. `password` always holds an Argon2 PHC string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub created_at: Timestamp,
}

/// Input model for creating a user; the password is already hashed
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl NewUser {
    /// Convert to a full User with server-generated fields
    pub fn into_user(self) -> User {
        User {
            id: generate_id(),
            email: self.email,
            password: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            created_at: now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [Role::Admin, Role::Member, Role::Merchant] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_password_is_not_serialized() {
        let user = NewUser {
            email: "a@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            first_name: "A".to_string(),
            last_name: "User".to_string(),
            role: Role::Member,
        }
        .into_user();

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "member");
    }
}
