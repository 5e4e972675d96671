use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{characters, favorites, planets, users};

/// Public view of a user. The password column never leaves the database layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub eye_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub planet_name: String,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
}

/// Foreign keys only; related rows are not embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub user_id: Option<i32>,
    pub character_id: Option<i32>,
    pub planets_id: Option<i32>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
        }
    }
}

impl From<characters::Model> for Character {
    fn from(model: characters::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
            eye_color: model.eye_color,
        }
    }
}

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Self {
            id: model.id,
            planet_name: model.planet_name,
            diameter: model.diameter,
            gravity: model.gravity,
        }
    }
}

impl From<favorites::Model> for Favorite {
    fn from(model: favorites::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            character_id: model.character_id,
            planets_id: model.planets_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn keys(value: &Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn user_serialization_drops_password() {
        let row = users::Model {
            id: 1,
            email: "luke@rebels.org".into(),
            password: "use-the-force".into(),
            is_active: true,
        };
        let value = serde_json::to_value(User::from(row)).unwrap();

        assert_eq!(keys(&value), ["email", "id", "is_active"]);
        assert!(!value.to_string().contains("use-the-force"));
    }

    #[test]
    fn planet_keeps_absent_measurements_as_null() {
        let row = planets::Model {
            id: 3,
            planet_name: "Dagobah".into(),
            diameter: None,
            gravity: Some("N/A".into()),
        };
        let value = serde_json::to_value(Planet::from(row)).unwrap();
        assert_eq!(
            value,
            json!({"id": 3, "planet_name": "Dagobah", "diameter": null, "gravity": "N/A"})
        );
    }

    #[test]
    fn favorite_serializes_ids_not_objects() {
        let row = favorites::Model {
            id: 9,
            user_id: Some(1),
            character_id: None,
            planets_id: Some(2),
        };
        let value = serde_json::to_value(Favorite::from(row)).unwrap();
        assert_eq!(
            value,
            json!({"id": 9, "user_id": 1, "character_id": null, "planets_id": 2})
        );
    }

    #[test]
    fn character_serializes_every_column() {
        let row = characters::Model {
            id: 4,
            name: "Leia Organa".into(),
            gender: "female".into(),
            eye_color: "brown".into(),
        };
        let value = serde_json::to_value(Character::from(row)).unwrap();
        assert_eq!(keys(&value), ["eye_color", "gender", "id", "name"]);
    }
}
