use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(FoodId);

/// A catalog entry as held by the remote service. `id` is assigned on creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub image: String,
}

/// User-supplied fields for a food that does not exist yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

/// Partial changes to an existing food. Absent fields keep the value of the base they are
/// applied to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl FoodPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.available.is_none()
            && self.image.is_none()
    }

    pub fn apply_to(&self, base: &Food) -> Food {
        Food {
            id: base.id,
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| base.description.clone()),
            price: self.price.unwrap_or(base.price),
            available: self.available.unwrap_or(base.available),
            image: self.image.clone().unwrap_or_else(|| base.image.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> Food {
        Food {
            id: FoodId(1),
            name: "Burger".to_string(),
            description: "Double patty".to_string(),
            price: 10.0,
            available: true,
            image: "https://img.example/burger.png".to_string(),
        }
    }

    #[test]
    fn patch_overrides_only_present_fields() {
        let patch = FoodPatch {
            price: Some(20.0),
            available: Some(false),
            ..FoodPatch::default()
        };

        let merged = patch.apply_to(&burger());
        assert_eq!(merged.id, FoodId(1));
        assert_eq!(merged.name, "Burger");
        assert_eq!(merged.price, 20.0);
        assert!(!merged.available);
    }

    #[test]
    fn empty_patch_is_identity() {
        let patch = FoodPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply_to(&burger()), burger());
    }

    #[test]
    fn food_id_serializes_as_bare_integer() {
        let json = serde_json::to_value(burger()).expect("serialize");
        assert_eq!(json["id"], serde_json::json!(1));

        let parsed: Food = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Pasta",
            "description": "Fresh",
            "price": 19.9,
            "available": false,
            "image": "pasta.png"
        }))
        .expect("deserialize");
        assert_eq!(parsed.id, FoodId(7));
        assert!(!parsed.available);
    }

    #[test]
    fn patch_omits_absent_fields_on_the_wire() {
        let patch = FoodPatch {
            name: Some("Veggie".to_string()),
            ..FoodPatch::default()
        };
        let json = serde_json::to_value(&patch).expect("serialize");
        assert_eq!(json, serde_json::json!({ "name": "Veggie" }));
    }
}
