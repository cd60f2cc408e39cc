use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::filled;
use crate::numeric::parse_int_lenient;

/// Visitor review. `rating` is `None` when the submitted value had no
/// integer prefix; it is persisted as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub comment: String,
    pub rating: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReviewForm {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub rating: Option<String>,
}

impl ReviewForm {
    pub fn validate(&self) -> Result<(), ModelError> {
        if filled(&self.name) && filled(&self.comment) && filled(&self.rating) {
            Ok(())
        } else {
            Err(ModelError::Validation("All fields are required.".into()))
        }
    }

    pub fn into_review(self) -> Result<Review, ModelError> {
        self.validate()?;
        Ok(Review {
            rating: parse_int_lenient(self.rating.as_deref().unwrap_or_default()),
            name: self.name.unwrap_or_default(),
            comment: self.comment.unwrap_or_default(),
        })
    }
}
