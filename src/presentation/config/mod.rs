mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ChunkUnit, InferenceSettings, ServerSettings, Settings, SummarizationSettings,
};
