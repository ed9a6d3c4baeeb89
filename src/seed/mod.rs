pub mod data;
pub mod error;
pub mod fake;
pub mod password;
pub mod progress;
pub mod seeder;

pub use error::SeedError;
pub use fake::Faker;
pub use progress::{ConsoleProgress, Progress, RecordingProgress, Status};
pub use seeder::*;
