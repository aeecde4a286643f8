use serde::{Deserialize, Serialize};

/// An exercise offered in classes, referenced by schedule slots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub muscle_group: String,
}

impl store::Record for Exercise {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Payload for `POST /exercises`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExercise {
    pub name: String,
    pub description: String,
    pub muscle_group: String,
}

/// Payload for `PUT /exercises/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExercise {
    pub name: String,
    pub description: String,
    pub muscle_group: String,
}
