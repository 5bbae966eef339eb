use chrono::NaiveDate;
use kiroku::db::models::{
    NewPerformanceStats, NewWorkoutLog, UpdatePerformanceStats, UpdateWorkoutLog,
    UpdateWorkoutName, UpdateWorkoutType,
};
use kiroku::db::{self, operations};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

async fn setup_test_db() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse connect options")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");
    db::init_database(&pool)
        .await
        .expect("Failed to apply schema");
    pool
}

fn noon(year: i32, month: u32, day: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn workout_type_lifecycle() {
    let pool = setup_test_db().await;

    let strength = operations::create_workout_type(&pool, "Strength").await.unwrap();
    let fetched = operations::get_workout_type(&pool, strength.id).await.unwrap();
    assert_eq!(fetched.name, "Strength");

    let renamed = operations::update_workout_type(
        &pool,
        strength.id,
        &UpdateWorkoutType {
            name: Some("Powerlifting".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(renamed.name, "Powerlifting");

    // Blank replacement keeps the stored name.
    let unchanged = operations::update_workout_type(
        &pool,
        strength.id,
        &UpdateWorkoutType {
            name: Some(String::new()),
        },
    )
    .await
    .unwrap();
    assert_eq!(unchanged.name, "Powerlifting");

    operations::delete_workout_type(&pool, strength.id).await.unwrap();
    let err = operations::get_workout_type(&pool, strength.id).await.unwrap_err();
    assert!(matches!(err, sqlx::Error::RowNotFound));
}

#[tokio::test]
async fn muscle_group_lifecycle() {
    let pool = setup_test_db().await;

    let back = operations::create_muscle_group(&pool, "Back").await.unwrap();
    assert_eq!(
        operations::get_all_muscle_groups(&pool).await.unwrap().len(),
        1
    );

    operations::delete_muscle_group(&pool, back.id).await.unwrap();
    let err = operations::delete_muscle_group(&pool, back.id).await.unwrap_err();
    assert!(matches!(err, sqlx::Error::RowNotFound));
}

#[tokio::test]
async fn workout_name_requires_existing_type() {
    let pool = setup_test_db().await;

    let err = operations::create_workout_name(&pool, "Deadlift", 99)
        .await
        .unwrap_err();
    assert!(err.as_database_error().is_some());
}

#[tokio::test]
async fn workout_name_lifecycle() {
    let pool = setup_test_db().await;

    let strength = operations::create_workout_type(&pool, "Strength").await.unwrap();
    let cardio = operations::create_workout_type(&pool, "Cardio").await.unwrap();
    let squat = operations::create_workout_name(&pool, "Squat", strength.id)
        .await
        .unwrap();

    let moved = operations::update_workout_name(
        &pool,
        squat.id,
        &UpdateWorkoutName {
            workout_type_id: Some(cardio.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(moved.name, "Squat");
    assert_eq!(moved.workout_type_id, cardio.id);

    operations::delete_workout_name(&pool, squat.id).await.unwrap();
    assert!(operations::get_all_workout_names(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn workout_log_lifecycle() {
    let pool = setup_test_db().await;

    let user = operations::create_user(&pool, "frank", "frank@example.com")
        .await
        .unwrap();
    let strength = operations::create_workout_type(&pool, "Strength").await.unwrap();
    let bench = operations::create_workout_name(&pool, "Bench Press", strength.id)
        .await
        .unwrap();

    let log = operations::create_workout_log(
        &pool,
        &NewWorkoutLog {
            user_id: user.id,
            workout_name_id: bench.id,
            workout_date: noon(2026, 3, 14),
            sets: 3,
            reps: 5,
            weight: 80.0,
        },
    )
    .await
    .unwrap();
    assert_eq!(log.sets, 3);

    let heavier = operations::update_workout_log(
        &pool,
        log.id,
        &UpdateWorkoutLog {
            weight: Some(85.0),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(heavier.weight, 85.0);
    assert_eq!(heavier.reps, 5);
    assert_eq!(heavier.workout_date, noon(2026, 3, 14));

    operations::delete_workout_log(&pool, log.id).await.unwrap();
    let err = operations::get_workout_log(&pool, log.id).await.unwrap_err();
    assert!(matches!(err, sqlx::Error::RowNotFound));
}

#[tokio::test]
async fn workout_log_requires_existing_user_and_name() {
    let pool = setup_test_db().await;

    let err = operations::create_workout_log(
        &pool,
        &NewWorkoutLog {
            user_id: 1,
            workout_name_id: 1,
            workout_date: noon(2026, 1, 1),
            sets: 1,
            reps: 1,
            weight: 20.0,
        },
    )
    .await
    .unwrap_err();
    assert!(err.as_database_error().is_some());
}

#[tokio::test]
async fn performance_stats_lifecycle() {
    let pool = setup_test_db().await;

    let user = operations::create_user(&pool, "grace", "grace@example.com")
        .await
        .unwrap();
    let strength = operations::create_workout_type(&pool, "Strength").await.unwrap();
    let squat = operations::create_workout_name(&pool, "Squat", strength.id)
        .await
        .unwrap();

    let stats = operations::create_performance_stats(
        &pool,
        &NewPerformanceStats {
            user_id: user.id,
            workout_name_id: squat.id,
            personal_record: 120.0,
            frequency: 2,
        },
    )
    .await
    .unwrap();

    let bumped = operations::update_performance_stats(
        &pool,
        stats.id,
        &UpdatePerformanceStats {
            personal_record: Some(125.0),
            frequency: Some(3),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(bumped.personal_record, 125.0);
    assert_eq!(bumped.frequency, 3);
    assert_eq!(bumped.user_id, user.id);

    operations::delete_performance_stats(&pool, stats.id).await.unwrap();
    assert!(
        operations::get_all_performance_stats(&pool)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn deleting_referenced_user_is_refused() {
    let pool = setup_test_db().await;

    let user = operations::create_user(&pool, "henry", "henry@example.com")
        .await
        .unwrap();
    let strength = operations::create_workout_type(&pool, "Strength").await.unwrap();
    let row_name = operations::create_workout_name(&pool, "Row", strength.id)
        .await
        .unwrap();
    let log = operations::create_workout_log(
        &pool,
        &NewWorkoutLog {
            user_id: user.id,
            workout_name_id: row_name.id,
            workout_date: noon(2026, 2, 2),
            sets: 4,
            reps: 8,
            weight: 60.0,
        },
    )
    .await
    .unwrap();

    // No cascade: the store refuses to delete a user with dependent logs.
    let err = operations::delete_user(&pool, user.id).await.unwrap_err();
    assert!(err.as_database_error().is_some());

    operations::delete_workout_log(&pool, log.id).await.unwrap();
    operations::delete_user(&pool, user.id).await.unwrap();
}
