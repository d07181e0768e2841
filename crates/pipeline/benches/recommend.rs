//! Benchmarks for the recommenders
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic dataset so the benchmark runs without data files.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{
    BmiCategory, DietType, FitnessDataset, FitnessLevel, FitnessRecord, Goal, MealType,
};
use pipeline::{fallback_meals, recommend_exercises, recommend_meals};

fn synthetic_dataset(rows: usize) -> FitnessDataset {
    let records = (0..rows)
        .map(|i| {
            let unit = (i % 100) as f64 / 100.0;
            FitnessRecord {
                goal: Goal::ALL[i % Goal::ALL.len()].as_str().to_string(),
                diet_type: DietType::ALL[i % DietType::ALL.len()].as_str().to_string(),
                meal_type: MealType::ALL[(i / 7) % MealType::ALL.len()].as_str().to_string(),
                food_item: format!("Food {}", i % 500),
                category: "Main".to_string(),
                calories: unit,
                protein: 1.0 - unit,
                carbohydrates: (unit * 3.0) % 1.0,
                fat: (unit * 7.0) % 1.0,
                exercise: format!("Exercise {}", i % 200),
                calories_burned: 100.0 + (i % 400) as f64,
                duration: 15.0 + (i % 75) as f64,
                intensity: 1.0 + (i % 10) as f64,
                heart_rate: unit,
            }
        })
        .collect();
    FitnessDataset::from_records(records)
}

fn bench_recommend_meals(c: &mut Criterion) {
    let dataset = synthetic_dataset(20_000);

    c.bench_function("recommend_meals", |b| {
        b.iter(|| {
            let meals = recommend_meals(
                black_box(&dataset),
                Goal::Loss,
                DietType::Vegan,
                MealType::Lunch,
            );
            black_box(meals)
        })
    });
}

fn bench_recommend_exercises(c: &mut Criterion) {
    let dataset = synthetic_dataset(20_000);

    c.bench_function("recommend_exercises", |b| {
        b.iter(|| {
            let exercises = recommend_exercises(
                black_box(&dataset),
                Goal::Loss,
                FitnessLevel::Intermediate,
                BmiCategory::Obese,
            );
            black_box(exercises)
        })
    });
}

fn bench_fallback_meals(c: &mut Criterion) {
    let dataset = synthetic_dataset(20_000);

    c.bench_function("fallback_meals", |b| {
        b.iter(|| black_box(fallback_meals(black_box(&dataset), Goal::Gain)))
    });
}

criterion_group!(
    benches,
    bench_recommend_meals,
    bench_recommend_exercises,
    bench_fallback_meals
);
criterion_main!(benches);
