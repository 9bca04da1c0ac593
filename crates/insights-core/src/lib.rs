//! Query layer over personality-insights analysis results.
//!
//! A fetched profile is wrapped in a [`ResultsAccessor`], which normalizes the
//! nested trait tree into [`InsightNode`]s, finds traits by id, exposes the
//! top-level profile scalars, and grades the analysis by word count.

pub mod accessor;
pub mod app_config;
pub mod config;
pub mod error;
pub mod identifier;
pub mod node;
pub mod profile;
pub mod strength;

pub use accessor::{ProfileSummary, ResultsAccessor};
pub use app_config::{AppConfig, ConfigOverrides, Environment, OutputFormat};
pub use config::{load_app_config, load_app_config_from_env, load_app_config_with};
pub use error::{ConfigError, ProfileError};
pub use identifier::id_matches;
pub use node::{collect_all, FieldValue, InsightNode};
pub use profile::{load_profile, Profile, ProfileSource};
pub use strength::AnalysisStrength;
