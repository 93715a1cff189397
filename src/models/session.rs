use serde::{Deserialize, Serialize};

/// Contents of the signed session cookie. Present means logged in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionData {
    pub session_id: i64,  // id of the authenticated user
    pub username: String,
}
