use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// User models
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
}

// Taxonomy models
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Default)]
pub struct UpdateWorkoutType {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MuscleGroup {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Default)]
pub struct UpdateMuscleGroup {
    pub name: Option<String>,
}

/// A named exercise belonging to exactly one workout type.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutName {
    pub id: i64,
    pub name: String,
    pub workout_type_id: i64,
}

#[derive(Debug, Default)]
pub struct UpdateWorkoutName {
    pub name: Option<String>,
    pub workout_type_id: Option<i64>,
}

// Workout log models
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutLog {
    pub id: i64,
    pub user_id: i64,
    pub workout_name_id: i64,
    pub workout_date: NaiveDateTime,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
}

#[derive(Debug, Clone)]
pub struct NewWorkoutLog {
    pub user_id: i64,
    pub workout_name_id: i64,
    pub workout_date: NaiveDateTime,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
}

#[derive(Debug, Default)]
pub struct UpdateWorkoutLog {
    pub user_id: Option<i64>,
    pub workout_name_id: Option<i64>,
    pub workout_date: Option<NaiveDateTime>,
    pub sets: Option<i64>,
    pub reps: Option<i64>,
    pub weight: Option<f64>,
}

/// Derived per-user aggregate. Nothing maintains these rows automatically;
/// they are written and read like any other entity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PerformanceStats {
    pub id: i64,
    pub user_id: i64,
    pub workout_name_id: i64,
    pub personal_record: f64,
    pub frequency: i64,
}

#[derive(Debug, Clone)]
pub struct NewPerformanceStats {
    pub user_id: i64,
    pub workout_name_id: i64,
    pub personal_record: f64,
    pub frequency: i64,
}

#[derive(Debug, Default)]
pub struct UpdatePerformanceStats {
    pub user_id: Option<i64>,
    pub workout_name_id: Option<i64>,
    pub personal_record: Option<f64>,
    pub frequency: Option<i64>,
}

/// One row of the workout_logs x workout_names join feeding the dashboard.
#[derive(Debug, Clone, FromRow)]
pub struct WeightEntry {
    pub workout_name: String,
    pub workout_date: NaiveDateTime,
    pub weight: f64,
}
