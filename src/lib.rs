// lulimi - Zambian language translation API with English pivot routing
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod inference;
pub mod languages;
pub mod metrics;
pub mod router;
pub mod server;
pub mod utils;

pub use error::{Hop, LulimiError, Result};
pub use inference::{InferenceAdapter, InferenceError};
pub use languages::{Language, LanguageCode, LanguageRegistry};
pub use router::{Route, RoutePlan, TranslationRequest, TranslationResult, TranslationRouter};
