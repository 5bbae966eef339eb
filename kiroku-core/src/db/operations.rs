use sqlx::SqlitePool;

use crate::db::models::{
    MuscleGroup, NewPerformanceStats, NewWorkoutLog, PerformanceStats, UpdateMuscleGroup,
    UpdatePerformanceStats, UpdateUser, UpdateWorkoutLog, UpdateWorkoutName, UpdateWorkoutType,
    User, WeightEntry, WorkoutLog, WorkoutName, WorkoutType,
};

/// Text fields follow the original form semantics: an empty replacement
/// means "no change", never "clear the field".
fn merge_text(current: String, replacement: Option<&str>) -> String {
    match replacement {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => current,
    }
}

// Users
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (username, email) VALUES (?1, ?2) RETURNING *",
    )
    .bind(username)
    .bind(email)
    .fetch_one(pool)
    .await
}

pub async fn get_user(pool: &SqlitePool, user_id: i64) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
        .bind(user_id)
        .fetch_one(pool)
        .await
}

pub async fn get_all_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn update_user(
    pool: &SqlitePool,
    user_id: i64,
    update: &UpdateUser,
) -> Result<User, sqlx::Error> {
    let mut conn = pool.acquire().await?;

    let current = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await?;

    let username = merge_text(current.username, update.username.as_deref());
    let email = merge_text(current.email, update.email.as_deref());

    sqlx::query_as::<_, User>(
        "UPDATE users SET username = ?1, email = ?2 WHERE id = ?3 RETURNING *",
    )
    .bind(&username)
    .bind(&email)
    .bind(user_id)
    .fetch_one(&mut *conn)
    .await
}

pub async fn delete_user(pool: &SqlitePool, user_id: i64) -> Result<(), sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(user_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

// Workout types
pub async fn create_workout_type(
    pool: &SqlitePool,
    name: &str,
) -> Result<WorkoutType, sqlx::Error> {
    sqlx::query_as::<_, WorkoutType>(
        "INSERT INTO workout_types (name) VALUES (?1) RETURNING *",
    )
    .bind(name)
    .fetch_one(pool)
    .await
}

pub async fn get_workout_type(
    pool: &SqlitePool,
    workout_type_id: i64,
) -> Result<WorkoutType, sqlx::Error> {
    sqlx::query_as::<_, WorkoutType>("SELECT * FROM workout_types WHERE id = ?1")
        .bind(workout_type_id)
        .fetch_one(pool)
        .await
}

pub async fn get_all_workout_types(
    pool: &SqlitePool,
) -> Result<Vec<WorkoutType>, sqlx::Error> {
    sqlx::query_as::<_, WorkoutType>("SELECT * FROM workout_types ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn update_workout_type(
    pool: &SqlitePool,
    workout_type_id: i64,
    update: &UpdateWorkoutType,
) -> Result<WorkoutType, sqlx::Error> {
    let mut conn = pool.acquire().await?;

    let current = sqlx::query_as::<_, WorkoutType>("SELECT * FROM workout_types WHERE id = ?1")
        .bind(workout_type_id)
        .fetch_one(&mut *conn)
        .await?;

    let name = merge_text(current.name, update.name.as_deref());

    sqlx::query_as::<_, WorkoutType>(
        "UPDATE workout_types SET name = ?1 WHERE id = ?2 RETURNING *",
    )
    .bind(&name)
    .bind(workout_type_id)
    .fetch_one(&mut *conn)
    .await
}

pub async fn delete_workout_type(
    pool: &SqlitePool,
    workout_type_id: i64,
) -> Result<(), sqlx::Error> {
    let result = sqlx::query("DELETE FROM workout_types WHERE id = ?1")
        .bind(workout_type_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

// Muscle groups
pub async fn create_muscle_group(
    pool: &SqlitePool,
    name: &str,
) -> Result<MuscleGroup, sqlx::Error> {
    sqlx::query_as::<_, MuscleGroup>(
        "INSERT INTO muscle_groups (name) VALUES (?1) RETURNING *",
    )
    .bind(name)
    .fetch_one(pool)
    .await
}

pub async fn get_muscle_group(
    pool: &SqlitePool,
    muscle_group_id: i64,
) -> Result<MuscleGroup, sqlx::Error> {
    sqlx::query_as::<_, MuscleGroup>("SELECT * FROM muscle_groups WHERE id = ?1")
        .bind(muscle_group_id)
        .fetch_one(pool)
        .await
}

pub async fn get_all_muscle_groups(
    pool: &SqlitePool,
) -> Result<Vec<MuscleGroup>, sqlx::Error> {
    sqlx::query_as::<_, MuscleGroup>("SELECT * FROM muscle_groups ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn update_muscle_group(
    pool: &SqlitePool,
    muscle_group_id: i64,
    update: &UpdateMuscleGroup,
) -> Result<MuscleGroup, sqlx::Error> {
    let mut conn = pool.acquire().await?;

    let current = sqlx::query_as::<_, MuscleGroup>("SELECT * FROM muscle_groups WHERE id = ?1")
        .bind(muscle_group_id)
        .fetch_one(&mut *conn)
        .await?;

    let name = merge_text(current.name, update.name.as_deref());

    sqlx::query_as::<_, MuscleGroup>(
        "UPDATE muscle_groups SET name = ?1 WHERE id = ?2 RETURNING *",
    )
    .bind(&name)
    .bind(muscle_group_id)
    .fetch_one(&mut *conn)
    .await
}

pub async fn delete_muscle_group(
    pool: &SqlitePool,
    muscle_group_id: i64,
) -> Result<(), sqlx::Error> {
    let result = sqlx::query("DELETE FROM muscle_groups WHERE id = ?1")
        .bind(muscle_group_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

// Workout names
pub async fn create_workout_name(
    pool: &SqlitePool,
    name: &str,
    workout_type_id: i64,
) -> Result<WorkoutName, sqlx::Error> {
    sqlx::query_as::<_, WorkoutName>(
        "INSERT INTO workout_names (name, workout_type_id) VALUES (?1, ?2) RETURNING *",
    )
    .bind(name)
    .bind(workout_type_id)
    .fetch_one(pool)
    .await
}

pub async fn get_workout_name(
    pool: &SqlitePool,
    workout_name_id: i64,
) -> Result<WorkoutName, sqlx::Error> {
    sqlx::query_as::<_, WorkoutName>("SELECT * FROM workout_names WHERE id = ?1")
        .bind(workout_name_id)
        .fetch_one(pool)
        .await
}

pub async fn get_all_workout_names(
    pool: &SqlitePool,
) -> Result<Vec<WorkoutName>, sqlx::Error> {
    sqlx::query_as::<_, WorkoutName>("SELECT * FROM workout_names ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn update_workout_name(
    pool: &SqlitePool,
    workout_name_id: i64,
    update: &UpdateWorkoutName,
) -> Result<WorkoutName, sqlx::Error> {
    let mut conn = pool.acquire().await?;

    let current = sqlx::query_as::<_, WorkoutName>("SELECT * FROM workout_names WHERE id = ?1")
        .bind(workout_name_id)
        .fetch_one(&mut *conn)
        .await?;

    let name = merge_text(current.name, update.name.as_deref());
    let workout_type_id = update.workout_type_id.unwrap_or(current.workout_type_id);

    sqlx::query_as::<_, WorkoutName>(
        "UPDATE workout_names SET name = ?1, workout_type_id = ?2 WHERE id = ?3 RETURNING *",
    )
    .bind(&name)
    .bind(workout_type_id)
    .bind(workout_name_id)
    .fetch_one(&mut *conn)
    .await
}

pub async fn delete_workout_name(
    pool: &SqlitePool,
    workout_name_id: i64,
) -> Result<(), sqlx::Error> {
    let result = sqlx::query("DELETE FROM workout_names WHERE id = ?1")
        .bind(workout_name_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

// Workout logs
pub async fn create_workout_log(
    pool: &SqlitePool,
    new_log: &NewWorkoutLog,
) -> Result<WorkoutLog, sqlx::Error> {
    sqlx::query_as::<_, WorkoutLog>(
        "INSERT INTO workout_logs (user_id, workout_name_id, workout_date, sets, reps, weight)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         RETURNING *",
    )
    .bind(new_log.user_id)
    .bind(new_log.workout_name_id)
    .bind(new_log.workout_date)
    .bind(new_log.sets)
    .bind(new_log.reps)
    .bind(new_log.weight)
    .fetch_one(pool)
    .await
}

pub async fn get_workout_log(
    pool: &SqlitePool,
    workout_log_id: i64,
) -> Result<WorkoutLog, sqlx::Error> {
    sqlx::query_as::<_, WorkoutLog>("SELECT * FROM workout_logs WHERE id = ?1")
        .bind(workout_log_id)
        .fetch_one(pool)
        .await
}

pub async fn get_all_workout_logs(
    pool: &SqlitePool,
) -> Result<Vec<WorkoutLog>, sqlx::Error> {
    sqlx::query_as::<_, WorkoutLog>("SELECT * FROM workout_logs ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn update_workout_log(
    pool: &SqlitePool,
    workout_log_id: i64,
    update: &UpdateWorkoutLog,
) -> Result<WorkoutLog, sqlx::Error> {
    let mut conn = pool.acquire().await?;

    let current = sqlx::query_as::<_, WorkoutLog>("SELECT * FROM workout_logs WHERE id = ?1")
        .bind(workout_log_id)
        .fetch_one(&mut *conn)
        .await?;

    sqlx::query_as::<_, WorkoutLog>(
        "UPDATE workout_logs
         SET user_id = ?1, workout_name_id = ?2, workout_date = ?3, sets = ?4, reps = ?5, weight = ?6
         WHERE id = ?7
         RETURNING *",
    )
    .bind(update.user_id.unwrap_or(current.user_id))
    .bind(update.workout_name_id.unwrap_or(current.workout_name_id))
    .bind(update.workout_date.unwrap_or(current.workout_date))
    .bind(update.sets.unwrap_or(current.sets))
    .bind(update.reps.unwrap_or(current.reps))
    .bind(update.weight.unwrap_or(current.weight))
    .bind(workout_log_id)
    .fetch_one(&mut *conn)
    .await
}

pub async fn delete_workout_log(
    pool: &SqlitePool,
    workout_log_id: i64,
) -> Result<(), sqlx::Error> {
    let result = sqlx::query("DELETE FROM workout_logs WHERE id = ?1")
        .bind(workout_log_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

// Performance stats
pub async fn create_performance_stats(
    pool: &SqlitePool,
    new_stats: &NewPerformanceStats,
) -> Result<PerformanceStats, sqlx::Error> {
    sqlx::query_as::<_, PerformanceStats>(
        "INSERT INTO performance_stats (user_id, workout_name_id, personal_record, frequency)
         VALUES (?1, ?2, ?3, ?4)
         RETURNING *",
    )
    .bind(new_stats.user_id)
    .bind(new_stats.workout_name_id)
    .bind(new_stats.personal_record)
    .bind(new_stats.frequency)
    .fetch_one(pool)
    .await
}

pub async fn get_performance_stats(
    pool: &SqlitePool,
    stats_id: i64,
) -> Result<PerformanceStats, sqlx::Error> {
    sqlx::query_as::<_, PerformanceStats>("SELECT * FROM performance_stats WHERE id = ?1")
        .bind(stats_id)
        .fetch_one(pool)
        .await
}

pub async fn get_all_performance_stats(
    pool: &SqlitePool,
) -> Result<Vec<PerformanceStats>, sqlx::Error> {
    sqlx::query_as::<_, PerformanceStats>("SELECT * FROM performance_stats ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn update_performance_stats(
    pool: &SqlitePool,
    stats_id: i64,
    update: &UpdatePerformanceStats,
) -> Result<PerformanceStats, sqlx::Error> {
    let mut conn = pool.acquire().await?;

    let current =
        sqlx::query_as::<_, PerformanceStats>("SELECT * FROM performance_stats WHERE id = ?1")
            .bind(stats_id)
            .fetch_one(&mut *conn)
            .await?;

    sqlx::query_as::<_, PerformanceStats>(
        "UPDATE performance_stats
         SET user_id = ?1, workout_name_id = ?2, personal_record = ?3, frequency = ?4
         WHERE id = ?5
         RETURNING *",
    )
    .bind(update.user_id.unwrap_or(current.user_id))
    .bind(update.workout_name_id.unwrap_or(current.workout_name_id))
    .bind(update.personal_record.unwrap_or(current.personal_record))
    .bind(update.frequency.unwrap_or(current.frequency))
    .bind(stats_id)
    .fetch_one(&mut *conn)
    .await
}

pub async fn delete_performance_stats(
    pool: &SqlitePool,
    stats_id: i64,
) -> Result<(), sqlx::Error> {
    let result = sqlx::query("DELETE FROM performance_stats WHERE id = ?1")
        .bind(stats_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

/// Joined log history for the dashboard, oldest first.
pub async fn weight_history(pool: &SqlitePool) -> Result<Vec<WeightEntry>, sqlx::Error> {
    sqlx::query_as::<_, WeightEntry>(
        "SELECT workout_names.name AS workout_name,
                workout_logs.workout_date,
                workout_logs.weight
         FROM workout_logs
         JOIN workout_names ON workout_names.id = workout_logs.workout_name_id
         ORDER BY workout_logs.workout_date, workout_logs.id",
    )
    .fetch_all(pool)
    .await
}
