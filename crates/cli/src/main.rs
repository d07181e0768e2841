use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{BmiCategory, DietType, FitnessDataset, FitnessLevel, Goal, MealType};
use pipeline::TableRow;
use predictor::calories::fields;
use predictor::{FormFields, ModelRegistry};
use rand::seq::IndexedRandom;
use server::{
    Outcome, RecommendationOrchestrator, RecommendationRequest, Recommendations, ServerConfig,
};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// FitRecs - Fitness predictor and meal/exercise recommender
#[derive(Parser)]
#[command(name = "fit-recs")]
#[command(about = "Meal and exercise recommendations with calorie and macro prediction", long_about = None)]
struct Cli {
    /// Path to the fitness dataset CSV
    #[arg(long, env = "FITRECS_DATASET", default_value = server::config::DEFAULT_DATASET_PATH)]
    dataset: PathBuf,

    /// Directory holding the model artifacts
    #[arg(long, env = "FITRECS_ARTIFACTS", default_value = server::config::DEFAULT_ARTIFACTS_DIR)]
    artifacts: PathBuf,

    /// Address the web apps listen on
    #[arg(long, env = "FITRECS_BIND", default_value = server::config::DEFAULT_BIND_ADDR)]
    bind: SocketAddr,

    /// Name of the session cookie set by the recommendation app
    #[arg(long, env = "FITRECS_SESSION_COOKIE", default_value = server::config::DEFAULT_SESSION_COOKIE)]
    session_cookie: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the meal and exercise recommendation app
    ServeRecommender,

    /// Serve the calorie, macro and planning app
    ServePredictor,

    /// Print meal and exercise recommendations for one selection
    Recommend {
        /// Fitness goal (Gain, Loss, Maintain)
        #[arg(long)]
        goal: Goal,

        /// Diet type (Balanced, High-Protein, Low-Carb, Vegan)
        #[arg(long)]
        diet_type: DietType,

        /// Meal type (Breakfast, Lunch, Dinner, Snack)
        #[arg(long)]
        meal_type: MealType,

        /// Fitness level (Beginner, Intermediate, Advanced)
        #[arg(long)]
        fitness_level: FitnessLevel,

        /// BMI category (Underweight, Normal, Overweight, Obese)
        #[arg(long)]
        bmi_category: BmiCategory,
    },

    /// Predict calories burned for one workout
    PredictCalories {
        /// Exercise intensity from 1 to 10
        #[arg(long)]
        intensity: u8,

        /// Normalized duration between 0 and 1
        #[arg(long)]
        duration: f64,

        /// Normalized heart rate between 0 and 1
        #[arg(long)]
        heart_rate: f64,

        #[arg(long)]
        bmi_category: BmiCategory,

        #[arg(long)]
        fitness_level: FitnessLevel,
    },

    /// Run random recommendation requests to measure latency
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig {
        bind_addr: cli.bind,
        dataset_path: cli.dataset,
        artifacts_dir: cli.artifacts,
        session_cookie: cli.session_cookie,
    };

    match cli.command {
        Commands::ServeRecommender => server::start_recommender(config).await?,
        Commands::ServePredictor => server::start_predictor(config).await?,
        Commands::Recommend {
            goal,
            diet_type,
            meal_type,
            fitness_level,
            bmi_category,
        } => {
            let request = RecommendationRequest {
                goal,
                diet_type,
                meal_type,
                fitness_level,
                bmi_category,
            };
            handle_recommend(&config.dataset_path, request).await?
        }
        Commands::PredictCalories {
            intensity,
            duration,
            heart_rate,
            bmi_category,
            fitness_level,
        } => {
            let form = FormFields::from([
                (fields::INTENSITY.to_string(), intensity.to_string()),
                (fields::DURATION.to_string(), duration.to_string()),
                (fields::HEART_RATE.to_string(), heart_rate.to_string()),
                (fields::BMI_CATEGORY.to_string(), bmi_category.to_string()),
                (fields::FITNESS_LEVEL.to_string(), fitness_level.to_string()),
            ]);
            handle_predict_calories(&config.artifacts_dir, &form)?
        }
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(&config.dataset_path, requests, concurrent).await?,
    }

    Ok(())
}

/// Load the dataset, reporting how long it took
fn load_dataset(path: &Path) -> Result<Arc<FitnessDataset>> {
    println!("Loading fitness dataset from {}...", path.display());
    let start = Instant::now();
    let dataset = FitnessDataset::load_from_file(path)
        .with_context(|| format!("Failed to load dataset from {}", path.display()))?;
    println!(
        "{} Loaded {} rows in {:?}",
        "✓".green(),
        dataset.len(),
        start.elapsed()
    );
    Ok(Arc::new(dataset))
}

/// Handle the 'recommend' command
async fn handle_recommend(dataset_path: &Path, request: RecommendationRequest) -> Result<()> {
    let dataset = load_dataset(dataset_path)?;
    let orchestrator = RecommendationOrchestrator::new(dataset);

    let recommendations = orchestrator.recommend(&request).await?;
    print_recommendations(&request, &recommendations);
    Ok(())
}

/// Handle the 'predict-calories' command
fn handle_predict_calories(artifacts_dir: &Path, form: &FormFields) -> Result<()> {
    let registry = ModelRegistry::load(artifacts_dir).with_context(|| {
        format!("Failed to load model artifacts from {}", artifacts_dir.display())
    })?;

    let prediction = registry
        .predict_calories(form)
        .context("Calorie prediction failed")?;

    println!(
        "\n{} {}",
        "Predicted Calories Burned:".bold().blue(),
        format!("{:.2}", prediction.value).bold()
    );
    println!("{}", prediction.summary());
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(dataset_path: &Path, requests: usize, concurrent: usize) -> Result<()> {
    if requests == 0 || concurrent == 0 {
        bail!("--requests and --concurrent must both be at least 1");
    }

    let dataset = load_dataset(dataset_path)?;
    let orchestrator = RecommendationOrchestrator::new(dataset);
    let selections = random_requests(requests)?;

    println!(
        "\n{}",
        format!("Running {requests} requests, {concurrent} at a time...").bold().blue()
    );

    let start = Instant::now();
    let mut latencies: Vec<Duration> = Vec::with_capacity(requests);
    let mut fallbacks = 0usize;

    for batch in selections.chunks(concurrent) {
        let handles: Vec<_> = batch
            .iter()
            .copied()
            .map(|request| {
                let orchestrator = orchestrator.clone();
                tokio::spawn(async move {
                    let started = Instant::now();
                    let recommendations = orchestrator.recommend(&request).await?;
                    Ok::<_, anyhow::Error>((started.elapsed(), recommendations))
                })
            })
            .collect();

        for handle in handles {
            let (elapsed, recommendations) = handle.await.context("Benchmark task panicked")??;
            if recommendations.meals.is_fallback() || recommendations.exercises.is_fallback() {
                fallbacks += 1;
            }
            latencies.push(elapsed);
        }
    }

    let total = start.elapsed();
    latencies.sort();

    println!("{} Completed in {:?}", "✓".green(), total);
    println!(
        "  Throughput: {:.1} req/s",
        requests as f64 / total.as_secs_f64().max(f64::EPSILON)
    );
    println!("  p50: {:?}", percentile(&latencies, 50));
    println!("  p95: {:?}", percentile(&latencies, 95));
    println!("  p99: {:?}", percentile(&latencies, 99));
    println!("  Requests using a fallback: {fallbacks}");
    Ok(())
}

/// Random selections covering every category combination
fn random_requests(count: usize) -> Result<Vec<RecommendationRequest>> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            Ok(RecommendationRequest {
                goal: *Goal::ALL.choose(&mut rng).context("no goals")?,
                diet_type: *DietType::ALL.choose(&mut rng).context("no diet types")?,
                meal_type: *MealType::ALL.choose(&mut rng).context("no meal types")?,
                fitness_level: *FitnessLevel::ALL.choose(&mut rng).context("no fitness levels")?,
                bmi_category: *BmiCategory::ALL.choose(&mut rng).context("no BMI categories")?,
            })
        })
        .collect()
}

/// Latency at the given percentile of a sorted, non-empty slice
fn percentile(sorted: &[Duration], pct: usize) -> Duration {
    let index = (sorted.len() * pct / 100).min(sorted.len().saturating_sub(1));
    sorted.get(index).copied().unwrap_or_default()
}

fn print_recommendations(request: &RecommendationRequest, recommendations: &Recommendations) {
    println!(
        "\n{}",
        format!(
            "Goal: {} | Diet: {} | Meal: {} | Level: {} | BMI: {}",
            request.goal,
            request.diet_type,
            request.meal_type,
            request.fitness_level,
            request.bmi_category
        )
        .bold()
        .blue()
    );

    print_outcome(
        "Recommended Meals",
        "No suitable meals found, showing general options instead.",
        &recommendations.meals,
    );
    print_outcome(
        "Recommended Exercises",
        "No matching exercises found, showing general options instead.",
        &recommendations.exercises,
    );
}

fn print_outcome<T: TableRow>(title: &str, fallback_note: &str, outcome: &Outcome<T>) {
    println!("\n{}", title.bold().underline());
    if outcome.is_fallback() {
        println!("{} {}", "!".yellow().bold(), fallback_note.yellow());
    }
    print_table(outcome.rows());
}

/// Print rows as an aligned text table
fn print_table<T: TableRow>(rows: &[T]) {
    if rows.is_empty() {
        println!("{}", "(no rows)".dimmed());
        return;
    }

    let cells: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();
    let widths: Vec<usize> = T::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = T::COLUMNS
        .iter()
        .zip(&widths)
        .map(|(name, width)| format!("{name:<width$}"))
        .collect();
    println!("{}", header.join("  ").bold());

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        println!("{}", line.join("  "));
    }
}
