//! Motivation quotes and tips shown alongside predictions and recommendations.

use rand::seq::IndexedRandom;

pub const MOTIVATION_QUOTES: [&str; 4] = [
    "Push yourself, because no one else is going to do it for you.",
    "Your body can stand almost anything. It’s your mind you have to convince.",
    "Fitness is not about being better than someone else. It’s about being better than you used to be.",
    "Discipline is doing what needs to be done, even if you don’t want to do it.",
];

pub const WELLNESS_TIPS: [&str; 5] = [
    "Drink at least 2 liters of water daily.",
    "Warm up before workouts to prevent injury.",
    "Eat high-protein meals after strength training.",
    "Get 7–8 hours of sleep every night.",
    "Avoid skipping breakfast to maintain energy levels.",
];

/// Tips rotated on the recommendation page
pub const DAILY_TIPS: [&str; 8] = [
    "💧 Stay hydrated! Drink at least 8 glasses of water a day.",
    "🥗 Add colorful veggies to your plate — more colors = more nutrients.",
    "🏃‍♂️ Exercise for at least 30 minutes a day, 5 days a week.",
    "😴 Sleep 7–8 hours to help your body recover and grow.",
    "🍎 Balance your macronutrients: protein, fats, and carbs matter.",
    "🧘 Take a deep breath — even 5 minutes of mindfulness can help.",
    "🚶‍♂️ Walking after meals can aid digestion and stabilize blood sugar.",
    "📉 Consistency beats intensity — stick to your plan!",
];

fn pick(items: &[&'static str]) -> &'static str {
    items.choose(&mut rand::rng()).copied().unwrap_or_default()
}

pub fn random_quote() -> &'static str {
    pick(&MOTIVATION_QUOTES)
}

pub fn random_wellness_tip() -> &'static str {
    pick(&WELLNESS_TIPS)
}

pub fn tip_of_the_day() -> &'static str {
    pick(&DAILY_TIPS)
}
