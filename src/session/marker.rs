use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Where a signed-in actor of this role lands.
    pub fn home(self) -> &'static str {
        match self {
            Role::User => "/dashboard",
            Role::Admin => "/admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::User => "Researcher",
            Role::Admin => "Administrator",
        }
    }
}

/// Who is signed in. Advisory only: the marker is held by the client and
/// carries no signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMarker {
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    #[error("Marker is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Marker is not a valid record: {0}")]
    Json(#[from] serde_json::Error),
}

impl SessionMarker {
    /// Cookie-safe form: hex of the JSON record. Raw JSON characters are
    /// invalid in cookie values.
    pub fn encode(&self) -> Result<String, MarkerError> {
        Ok(hex::encode(serde_json::to_vec(self)?))
    }

    pub fn decode(value: &str) -> Result<Self, MarkerError> {
        let bytes = hex::decode(value.trim())?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
