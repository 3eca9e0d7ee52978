use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}
