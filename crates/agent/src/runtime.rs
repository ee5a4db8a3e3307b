//! Message orchestration: classification short-circuit, AI/rule-based
//! dispatch under the one-way failover, session bookkeeping, and the
//! commercial-interest flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use atende_core::profile::{CompanyProfile, ProfileProvider};
use atende_core::session::{SessionStore, Turn, DEFAULT_SESSION_ID};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::classify::{classify, MessageKind};
use crate::closure::closure_reply;
use crate::lead::detect_commercial_interest;
use crate::llm::LlmClient;
use crate::prompt::build_system_prompt;
use crate::responder::respond;

/// Reply guaranteed safe for empty or otherwise unusable input.
const SAFE_REPLY: &str =
    "Olá! 👋 Sou o assistente virtual do Grupo OC. Como posso ajudar você hoje?";

/// Which responder produced the reply, carried to the delivery layer for
/// observability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplySource {
    Ai,
    RuleBased(crate::responder::SubIntent),
    Closure(MessageKind),
    Fallback,
}

impl ReplySource {
    pub fn tag(self) -> String {
        match self {
            Self::Ai => "ai".to_string(),
            Self::RuleBased(sub_intent) => format!("rules:{}", sub_intent.tag()),
            Self::Closure(kind) => format!("closure:{}", kind.tag()),
            Self::Fallback => "fallback".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub open_lead_form: bool,
    pub source: ReplySource,
    pub tokens: u32,
}

/// Process-wide orchestrator. The profile is acquired lazily on the first
/// message and cached forever; the failover flag only ever transitions
/// from ai-available to fallback-forced.
pub struct ChatRuntime {
    provider: Arc<dyn ProfileProvider>,
    llm: Option<Arc<dyn LlmClient>>,
    sessions: SessionStore,
    profile: OnceCell<CompanyProfile>,
    fallback_forced: AtomicBool,
}

impl ChatRuntime {
    pub fn new(provider: Arc<dyn ProfileProvider>, llm: Option<Arc<dyn LlmClient>>) -> Self {
        Self {
            provider,
            llm,
            sessions: SessionStore::new(),
            profile: OnceCell::new(),
            fallback_forced: AtomicBool::new(false),
        }
    }

    /// Whether the AI responder is still in play.
    pub fn ai_available(&self) -> bool {
        self.llm.is_some() && !self.fallback_forced.load(Ordering::Relaxed)
    }

    /// Current responder mode for status reporting.
    pub fn ai_mode(&self) -> &'static str {
        if self.llm.is_none() {
            "unconfigured"
        } else if self.fallback_forced.load(Ordering::Relaxed) {
            "fallback_forced"
        } else {
            "ai"
        }
    }

    /// The profile source tag, once acquired.
    pub fn profile_source(&self) -> Option<&'static str> {
        self.profile.get().map(|profile| profile.metadata.source.tag())
    }

    pub async fn handle_message(&self, utterance: &str, session_id: &str) -> ChatReply {
        let trimmed = utterance.trim();
        if trimmed.is_empty() {
            return ChatReply {
                text: SAFE_REPLY.to_string(),
                open_lead_form: false,
                source: ReplySource::Fallback,
                tokens: 0,
            };
        }

        let session_id =
            if session_id.trim().is_empty() { DEFAULT_SESSION_ID } else { session_id };

        // Closure intents bypass everything downstream, including lead
        // detection: a goodbye must never open the lead form or hit the
        // completion service.
        let kind = classify(trimmed);
        if kind.is_closure_intent() {
            let text = closure_reply(kind, &mut rand::thread_rng())
                .unwrap_or(SAFE_REPLY)
                .to_string();
            return ChatReply {
                text,
                open_lead_form: false,
                source: ReplySource::Closure(kind),
                tokens: 0,
            };
        }

        let profile = self.profile.get_or_init(|| self.provider.acquire()).await;
        let open_lead_form = detect_commercial_interest(trimmed);

        if self.ai_available() {
            if let Some(client) = &self.llm {
                match self.try_ai_reply(client.as_ref(), profile, trimmed, session_id).await {
                    Some(reply) => {
                        return ChatReply {
                            text: reply.0,
                            open_lead_form,
                            source: ReplySource::Ai,
                            tokens: reply.1,
                        }
                    }
                    None => {
                        // First failure: permanent switch, no re-probing.
                        self.fallback_forced.store(true, Ordering::Relaxed);
                    }
                }
            }
        }

        let rule_reply = respond(trimmed, profile);
        self.sessions.append(session_id, Turn::user(trimmed));
        self.sessions.append(session_id, Turn::assistant(rule_reply.text.clone()));

        ChatReply {
            text: rule_reply.text,
            open_lead_form,
            source: ReplySource::RuleBased(rule_reply.sub_intent),
            tokens: 0,
        }
    }

    async fn try_ai_reply(
        &self,
        client: &dyn LlmClient,
        profile: &CompanyProfile,
        utterance: &str,
        session_id: &str,
    ) -> Option<(String, u32)> {
        let system_prompt = build_system_prompt(profile);
        let history = self.sessions.get(session_id);

        match client.complete(&system_prompt, &history, utterance).await {
            Ok(completion) => {
                self.sessions.append(session_id, Turn::user(utterance));
                self.sessions.append(session_id, Turn::assistant(completion.text.clone()));
                info!(
                    event_name = "chat.ai.replied",
                    session_id,
                    tokens = completion.total_tokens,
                    "completion service replied"
                );
                Some((completion.text, completion.total_tokens))
            }
            Err(error) => {
                warn!(
                    event_name = "chat.ai.failed",
                    session_id,
                    error = %error,
                    "completion service failed, switching to rule-based replies permanently"
                );
                None
            }
        }
    }
}
