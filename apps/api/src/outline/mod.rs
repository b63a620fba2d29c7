//! The outline pipeline: keyword ranking, prompt assembly, outline/SEO
//! splitting and result shaping. Everything here is pure and synchronous;
//! the only outbound call (text generation) lives behind the
//! `generators::OutlineGenerator` trait and is orchestrated by `pipeline`.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod ranker;
pub mod shaper;
pub mod splitter;
