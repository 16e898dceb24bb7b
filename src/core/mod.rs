pub mod advice;
pub mod classifier;
pub mod survey;

pub use crate::domain::model::{AdviceOutcome, Profile, ResultsView, SurveyInput, SurveyResult};
pub use crate::domain::ports::AdviceProvider;
pub use crate::utils::error::Result;
