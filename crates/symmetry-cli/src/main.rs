use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use cloud_service::CloudDataService;
use kv_store::SqliteStore;
use local_service::LocalDataService;
use symmetry_core::{
    ActivityLevel, CardioType, DataService, EquipmentType, ExperienceLevel, Gender, Goal,
    Intensity, MuscleGroup, WeightUnit,
};
use tracing::info;

mod commands;
mod config;

use config::{Backend, Config};

#[derive(Debug, Parser)]
#[command(name = "symmetry")]
#[command(about = "Manage Symmetry training data from the command line")]
struct Cli {
    /// User the command acts on
    #[arg(long, global = true, env = "SYMMETRY_USER_ID", default_value = "local-user")]
    user: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create or show the user profile
    #[command(subcommand)]
    User(UserCommand),
    /// Daily nutrition targets
    #[command(subcommand)]
    Targets(TargetsCommand),
    /// Compute macro targets from biometrics
    Macros(MacrosArgs),
    /// Work out which plates to load
    Plates(PlatesArgs),
    /// Warm-up ramp and deload weight for a working set
    Warmup(WarmupArgs),
    /// Training environment and plate inventory
    #[command(subcommand)]
    Equipment(EquipmentCommand),
    /// Workout plans and their lifecycle
    #[command(subcommand)]
    Workout(WorkoutCommand),
    /// Body measurements
    #[command(subcommand)]
    Measure(MeasureCommand),
    /// Cardio sessions
    #[command(subcommand)]
    Cardio(CardioCommand),
    /// Physique scans
    #[command(subcommand)]
    Scans(ScansCommand),
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    Create(CreateUserArgs),
    Show,
}

#[derive(Debug, Args)]
struct CreateUserArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    /// Height in centimetres
    #[arg(long)]
    height_cm: f64,
    /// Body weight in kilograms
    #[arg(long)]
    weight_kg: f64,
    #[arg(long)]
    age: u32,
    #[arg(long, value_parser = parse_enum::<Gender>)]
    gender: Gender,
    #[arg(long, value_parser = parse_enum::<ExperienceLevel>, default_value = "beginner")]
    experience: ExperienceLevel,
    #[arg(long, value_parser = parse_enum::<Goal>, default_value = "maintain")]
    goal: Goal,
    /// Sessions per week
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(3..=6))]
    frequency: u8,
    /// Comma-separated weekday names
    #[arg(long, value_delimiter = ',')]
    days: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum TargetsCommand {
    Set {
        #[arg(long)]
        calories: u32,
        #[arg(long)]
        protein: u32,
        #[arg(long)]
        carbs: u32,
        #[arg(long)]
        fats: u32,
    },
    Show,
}

#[derive(Debug, Args)]
struct MacrosArgs {
    #[arg(long)]
    age: u32,
    #[arg(long, value_parser = parse_enum::<Gender>)]
    gender: Gender,
    #[arg(long)]
    weight_lbs: f64,
    #[arg(long)]
    height_in: f64,
    #[arg(long, value_parser = parse_enum::<ActivityLevel>, default_value = "moderate")]
    activity: ActivityLevel,
    #[arg(long, value_parser = parse_enum::<Goal>, default_value = "maintain")]
    goal: Goal,
    /// Store the result as the user's nutrition targets
    #[arg(long)]
    save: bool,
}

#[derive(Debug, Args)]
struct PlatesArgs {
    /// Total bar weight to reach
    target: f64,
    #[arg(long, default_value = "lbs")]
    unit: WeightUnit,
    /// Bar weight (defaults to the unit's standard bar)
    #[arg(long)]
    bar: Option<f64>,
    /// Only use plates from the stored equipment profile
    #[arg(long)]
    inventory: bool,
}

#[derive(Debug, Args)]
struct WarmupArgs {
    /// Working weight
    weight: f64,
    /// Show the deload weight as well
    #[arg(long)]
    deload: bool,
}

#[derive(Debug, Subcommand)]
enum EquipmentCommand {
    /// Store a profile with the usual plate set for the unit
    Set {
        #[arg(long = "type", value_parser = parse_enum::<EquipmentType>, default_value = "gym")]
        kind: EquipmentType,
        #[arg(long, default_value = "lbs")]
        unit: WeightUnit,
        #[arg(long)]
        bar_weight: Option<f64>,
    },
    /// Add or remove pairs of one plate weight
    Adjust {
        #[arg(long)]
        weight: f64,
        #[arg(long, allow_negative_numbers = true)]
        delta: i64,
    },
    Show,
}

#[derive(Debug, Subcommand)]
enum WorkoutCommand {
    Create(CreateWorkoutArgs),
    List,
    Start { id: String },
    Complete {
        id: String,
        /// Session length in minutes
        #[arg(long)]
        duration: Option<u32>,
    },
    Skip { id: String },
    Delete { id: String },
}

#[derive(Debug, Args)]
struct CreateWorkoutArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    day: String,
    /// Scheduled date (RFC 3339); defaults to now
    #[arg(long)]
    date: Option<chrono::DateTime<chrono::Utc>>,
    /// Exercise as NAME=MUSCLE, repeatable
    #[arg(long = "exercise", value_parser = parse_exercise)]
    exercises: Vec<(String, MuscleGroup)>,
    #[arg(long, default_value_t = 3)]
    sets: u32,
    #[arg(long, default_value = "8-12")]
    reps: String,
    /// Rest between sets in seconds
    #[arg(long, default_value_t = 90)]
    rest: u32,
}

#[derive(Debug, Subcommand)]
enum MeasureCommand {
    Add {
        #[arg(long)]
        weight: f64,
        #[arg(long, default_value = "lbs")]
        unit: WeightUnit,
        #[arg(long)]
        waist: Option<f64>,
        #[arg(long)]
        chest: Option<f64>,
    },
    List,
}

#[derive(Debug, Subcommand)]
enum CardioCommand {
    Add {
        #[arg(long = "type", value_parser = parse_enum::<CardioType>)]
        kind: CardioType,
        /// Minutes
        #[arg(long)]
        duration: u32,
        #[arg(long, value_parser = parse_enum::<Intensity>, default_value = "moderate")]
        intensity: Intensity,
        #[arg(long)]
        calories: Option<u32>,
        #[arg(long)]
        distance: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },
    List,
}

#[derive(Debug, Subcommand)]
enum ScansCommand {
    List,
}

/// Parse a value using its serialized name.
fn parse_enum<T: serde::de::DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("unknown value: {}", value))
}

fn parse_exercise(value: &str) -> Result<(String, MuscleGroup), String> {
    let (name, muscle) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=MUSCLE, got {}", value))?;
    Ok((name.trim().to_string(), parse_enum(muscle.trim())?))
}

fn build_data_service(config: &Config) -> Result<DataService, Box<dyn std::error::Error>> {
    match config.backend {
        Backend::Local => {
            let store = SqliteStore::from_config(&config.store)?;
            Ok(LocalDataService::build(Arc::new(store)))
        }
        Backend::Cloud => Ok(CloudDataService::build(config.cloud.clone())),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    info!("Backend: {}", config.backend);

    let data = build_data_service(&config)?;
    commands::run(&data, &cli.user, cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_enum() {
        assert_eq!(parse_enum::<Gender>("female").unwrap(), Gender::Female);
        assert_eq!(
            parse_enum::<ActivityLevel>("veryActive").unwrap(),
            ActivityLevel::VeryActive
        );
        assert!(parse_enum::<Goal>("shred").is_err());
    }

    #[test]
    fn test_parse_exercise() {
        let (name, muscle) = parse_exercise("Bench Press=chest").unwrap();
        assert_eq!(name, "Bench Press");
        assert_eq!(muscle, MuscleGroup::Chest);
        assert!(parse_exercise("Bench Press").is_err());
    }

    #[test]
    fn test_parses_workout_create() {
        let cli = Cli::try_parse_from([
            "symmetry",
            "workout",
            "create",
            "--name",
            "Push A",
            "--day",
            "Monday",
            "--exercise",
            "Bench=chest",
            "--exercise",
            "Dips=triceps",
        ])
        .unwrap();
        match cli.command {
            Command::Workout(WorkoutCommand::Create(args)) => {
                assert_eq!(args.exercises.len(), 2);
                assert_eq!(args.sets, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_plate_delta() {
        let cli = Cli::try_parse_from([
            "symmetry", "equipment", "adjust", "--weight", "45", "--delta", "-2",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Equipment(EquipmentCommand::Adjust { delta: -2, .. })
        ));
    }
}
