use serde::{Deserialize, Serialize};

/// Entry of the legacy `usuarios_cadastrados` collection.
/// Only the fields needed to locate a user are read; the rest is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    #[serde(rename = "nome", default)]
    pub name: String,
    pub email: String,
}
