//! Response orchestration for the Atende conversational front-end.
//!
//! This crate is the "brain" of the system:
//! - **Intent classification** (`classify`): closure intents (gratitude,
//!   farewell, negation) are recognized before any AI call is attempted.
//! - **Closure replies** (`closure`): fixed reply pools, random selection,
//!   no external dependency that could fail or add latency.
//! - **Commercial-interest detection** (`lead`): keyword signals over the
//!   user utterance that open the downstream lead-capture flow.
//! - **AI responder** (`llm`, `prompt`): a pluggable completion client fed
//!   a system prompt grounded in the company profile.
//! - **Rule-based responder** (`responder`): deterministic, data-driven
//!   templates that can never fail.
//! - **Orchestration** (`runtime`): session state, the one-way failover
//!   from AI to rules, and the message entry point.
//!
//! # Failover principle
//!
//! The AI backend is an optimization, never a requirement. Its first
//! failure permanently switches the process to the rule-based responder:
//! no retries, no re-probing, no error ever shown to the end user.

pub mod classify;
pub mod closure;
pub mod lead;
pub mod llm;
pub mod prompt;
pub mod responder;
pub mod runtime;

pub use classify::{classify, MessageKind};
pub use lead::detect_commercial_interest;
pub use llm::{Completion, LlmClient, LlmError, OpenAiChatClient};
pub use responder::{respond, RuleBasedReply, SubIntent};
pub use runtime::{ChatReply, ChatRuntime, ReplySource};
