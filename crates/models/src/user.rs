use serde::{Deserialize, Serialize};

/// Account record. `password` holds the PHC-formatted hash, never plaintext.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub password: String,
}
