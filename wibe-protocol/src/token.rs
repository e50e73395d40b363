use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Room capabilities embedded into an access token.
///
/// Field names follow the LiveKit `video` grant so issued tokens are accepted by a LiveKit
/// media server as-is. Capabilities that are not granted are left out of the serialized claims.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoGrants {
    /// Name of the room the grant is scoped to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub room: String,
    /// Permission to join the room.
    #[serde(skip_serializing_if = "is_false")]
    pub room_join: bool,
    /// Permission to publish tracks into the room.
    #[serde(skip_serializing_if = "is_false")]
    pub can_publish: bool,
    /// Permission to subscribe to tracks of other participants.
    #[serde(skip_serializing_if = "is_false")]
    pub can_subscribe: bool,
}

impl VideoGrants {
    /// Grant for a regular participant: join, publish and subscribe in `room`.
    pub fn room_participant(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            room_join: true,
            can_publish: true,
            can_subscribe: true,
        }
    }
}

/// Claim set of a signed access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AccessClaims {
    /// API key the token was signed for.
    pub iss: String,
    /// Participant identity.
    pub sub: String,
    /// Issued at, seconds since the unix epoch.
    pub iat: u64,
    /// Not valid before, seconds since the unix epoch.
    pub nbf: u64,
    /// Expiry, seconds since the unix epoch.
    pub exp: u64,
    /// Unique token ID.
    pub jti: String,
    /// Room capabilities granted to the participant.
    pub video: VideoGrants,
}
