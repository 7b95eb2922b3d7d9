//! Subcommand handlers. Every result is printed to stdout as JSON.

use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use symmetry_core::{
    calculate_macros, calculate_plates, calculate_plates_with_inventory, deload_weight,
    warmup_ramp, BodyMeasurement, CardioLog, Circumferences, DataError, DataService,
    EquipmentProfile, Exercise, MacroInput, NutritionTargets, SetLog, User, WorkoutExercise,
    WorkoutPlan, WorkoutPlanUpdate, WorkoutStatus,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    CardioCommand, Command, CreateUserArgs, CreateWorkoutArgs, EquipmentCommand, MeasureCommand,
    ScansCommand, TargetsCommand, UserCommand, WorkoutCommand,
};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

fn print_json<T: Serialize + ?Sized>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub async fn run(data: &DataService, user_id: &str, command: Command) -> CommandResult {
    match command {
        Command::User(UserCommand::Create(args)) => create_user(data, user_id, args).await,
        Command::User(UserCommand::Show) => print_json(&data.user.get_user(user_id).await?),

        Command::Targets(TargetsCommand::Set {
            calories,
            protein,
            carbs,
            fats,
        }) => {
            let targets = NutritionTargets {
                calories,
                protein,
                carbs,
                fats,
            };
            print_json(&data.user.update_nutrition_targets(user_id, targets).await?)
        }
        Command::Targets(TargetsCommand::Show) => {
            print_json(&data.user.get_nutrition_targets(user_id).await?)
        }

        Command::Macros(args) => {
            let calculation = calculate_macros(&MacroInput {
                age: args.age,
                gender: args.gender,
                weight_lbs: args.weight_lbs,
                height_in: args.height_in,
                activity: args.activity,
                goal: args.goal,
            });
            if args.save {
                data.user
                    .update_nutrition_targets(user_id, calculation.targets)
                    .await?;
                info!("Saved {} kcal target", calculation.targets.calories);
            }
            print_json(&calculation)
        }

        Command::Plates(args) => {
            if args.inventory {
                let profile = data
                    .user
                    .get_equipment(user_id)
                    .await?
                    .ok_or_else(|| DataError::not_found("EquipmentProfile", user_id))?;
                print_json(&calculate_plates_with_inventory(args.target, &profile))
            } else {
                let bar = args.bar.unwrap_or_else(|| args.unit.default_bar_weight());
                print_json(&json!({
                    "unit": args.unit,
                    "barWeight": bar,
                    "perSide": calculate_plates(args.target, bar, args.unit),
                }))
            }
        }

        Command::Warmup(args) => {
            let mut out = json!({ "warmup": warmup_ramp(args.weight) });
            if args.deload {
                out["deload"] = json!(deload_weight(args.weight));
            }
            print_json(&out)
        }

        Command::Equipment(command) => equipment(data, user_id, command).await,
        Command::Workout(command) => workout(data, user_id, command).await,
        Command::Measure(command) => measure(data, user_id, command).await,
        Command::Cardio(command) => cardio(data, user_id, command).await,
        Command::Scans(ScansCommand::List) => {
            print_json(&data.progress.get_physique_scans(user_id).await?)
        }
    }
}

async fn create_user(data: &DataService, user_id: &str, args: CreateUserArgs) -> CommandResult {
    let user = User {
        id: user_id.to_string(),
        name: args.name,
        email: args.email,
        height_cm: args.height_cm,
        weight_kg: args.weight_kg,
        age: args.age,
        gender: args.gender,
        experience_level: args.experience,
        goal: args.goal,
        training_frequency: args.frequency,
        training_days: args.days,
        created_at: Utc::now(),
    };
    print_json(&data.user.create_user(user).await?)
}

async fn equipment(data: &DataService, user_id: &str, command: EquipmentCommand) -> CommandResult {
    match command {
        EquipmentCommand::Set {
            kind,
            unit,
            bar_weight,
        } => {
            let mut profile = EquipmentProfile::standard_gym(unit);
            profile.kind = kind;
            if let Some(bar) = bar_weight {
                profile.bar_weight = bar;
            }
            print_json(&data.user.update_equipment(user_id, profile).await?)
        }
        EquipmentCommand::Adjust { weight, delta } => {
            print_json(&data.user.update_plate_count(user_id, weight, delta).await?)
        }
        EquipmentCommand::Show => print_json(&data.user.get_equipment(user_id).await?),
    }
}

fn build_plan(user_id: &str, args: CreateWorkoutArgs) -> WorkoutPlan {
    let unit = symmetry_core::WeightUnit::Lbs;
    let mut target_muscles = Vec::new();

    let exercises = args
        .exercises
        .into_iter()
        .enumerate()
        .map(|(order, (name, muscle))| {
            if !target_muscles.contains(&muscle) {
                target_muscles.push(muscle);
            }
            let exercise_id = new_id();
            WorkoutExercise {
                id: new_id(),
                exercise_id: exercise_id.clone(),
                exercise: Exercise {
                    id: exercise_id,
                    name,
                    target_muscle: muscle,
                    secondary_muscles: Vec::new(),
                    video_url: None,
                    is_unilateral: false,
                    superset_id: None,
                    notes: None,
                    equipment_required: Vec::new(),
                },
                sets: (1..=args.sets)
                    .map(|n| SetLog::planned(new_id(), n, unit))
                    .collect(),
                target_sets: args.sets,
                target_reps: args.reps.clone(),
                rest_seconds: args.rest,
                superset_id: None,
                order: order as u32,
            }
        })
        .collect();

    WorkoutPlan {
        id: new_id(),
        user_id: user_id.to_string(),
        name: args.name,
        day_name: args.day,
        target_muscles,
        exercises,
        status: WorkoutStatus::Scheduled,
        scheduled_date: args.date.unwrap_or_else(Utc::now),
        completed_at: None,
        duration_minutes: None,
    }
}

async fn workout(data: &DataService, user_id: &str, command: WorkoutCommand) -> CommandResult {
    match command {
        WorkoutCommand::Create(args) => {
            let plan = build_plan(user_id, args);
            print_json(&data.workout.create_workout_plan(plan).await?)
        }
        WorkoutCommand::List => print_json(&data.workout.get_workout_plans(user_id).await?),
        WorkoutCommand::Start { id } => {
            let update = WorkoutPlanUpdate::status(WorkoutStatus::Active);
            print_json(&data.workout.update_workout_plan(&id, update).await?)
        }
        WorkoutCommand::Complete { id, duration } => {
            let update = WorkoutPlanUpdate {
                status: Some(WorkoutStatus::Completed),
                completed_at: Some(Utc::now()),
                duration_minutes: duration,
                ..Default::default()
            };
            print_json(&data.workout.update_workout_plan(&id, update).await?)
        }
        WorkoutCommand::Skip { id } => {
            let update = WorkoutPlanUpdate::status(WorkoutStatus::Skipped);
            print_json(&data.workout.update_workout_plan(&id, update).await?)
        }
        WorkoutCommand::Delete { id } => {
            data.workout.delete_workout_plan(&id).await?;
            print_json(&json!({ "deleted": id }))
        }
    }
}

async fn measure(data: &DataService, user_id: &str, command: MeasureCommand) -> CommandResult {
    match command {
        MeasureCommand::Add {
            weight,
            unit,
            waist,
            chest,
        } => {
            let measurement = BodyMeasurement {
                id: new_id(),
                user_id: user_id.to_string(),
                date: Utc::now(),
                weight,
                unit,
                measurements: Circumferences {
                    waist,
                    chest,
                    ..Default::default()
                },
            };
            print_json(&data.progress.add_body_measurement(measurement).await?)
        }
        MeasureCommand::List => print_json(&data.progress.get_body_measurements(user_id).await?),
    }
}

async fn cardio(data: &DataService, user_id: &str, command: CardioCommand) -> CommandResult {
    match command {
        CardioCommand::Add {
            kind,
            duration,
            intensity,
            calories,
            distance,
            notes,
        } => {
            let log = CardioLog {
                id: new_id(),
                user_id: user_id.to_string(),
                date: Utc::now(),
                kind,
                duration_minutes: duration,
                intensity,
                calories_burned: calories,
                distance,
                notes,
            };
            print_json(&data.progress.add_cardio_log(log).await?)
        }
        CardioCommand::List => print_json(&data.progress.get_cardio_logs(user_id).await?),
    }
}
