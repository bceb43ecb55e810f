pub mod practice;

// Re-export middleware functions
pub use practice::{PRACTICE_ID_HEADER, SelectedPractice, practice_middleware};
