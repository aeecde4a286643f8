use serde::{Deserialize, Serialize};

/// Payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The server's answer: a signed bearer token with embedded claims.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
