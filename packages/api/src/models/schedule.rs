use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A recurring slot in the weekly class calendar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i64,
    /// Weekday name as the server reports it, e.g. "Monday".
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub exercise_id: i64,
    pub exercise_name: String,
    pub trainer_name: String,
}

impl Schedule {
    /// "08:00 – 09:00" for table rendering.
    pub fn time_slot(&self) -> String {
        format!(
            "{} – {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

impl store::Record for Schedule {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Payload for `POST /schedules`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchedule {
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub exercise_id: i64,
    pub trainer_name: String,
}

/// Payload for `PUT /schedules/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSchedule {
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub exercise_id: i64,
    pub trainer_name: String,
}
