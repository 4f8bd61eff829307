// Curriculum generation: outline titles and long-form lesson content.
// All LLM calls go through llm_client's Completion trait, exactly one
// upstream request per operation.

pub mod content;
pub mod outline;
pub mod prompts;
