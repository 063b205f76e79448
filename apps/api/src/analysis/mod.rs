//! Resume-vs-JD analysis: prompt construction, the model-reply normalizer,
//! and the `/api/analyze` handler.

pub mod handlers;
pub mod normalizer;
pub mod prompts;
