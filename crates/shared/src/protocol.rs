use serde::{Deserialize, Serialize};

use crate::domain::FoodDraft;

/// Body of `POST /foods`: the draft fields plus the availability flag the client sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFoodRequest {
    #[serde(flatten)]
    pub draft: FoodDraft,
    pub available: bool,
}

impl From<FoodDraft> for CreateFoodRequest {
    fn from(draft: FoodDraft) -> Self {
        Self {
            draft,
            available: true,
        }
    }
}
