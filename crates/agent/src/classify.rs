//! Utterance classification, evaluated before any responder runs.

/// Closed set of utterance categories. Greeting is deliberately not a
/// category here; it only exists as an exclusion inside lead detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Gratitude,
    Farewell,
    /// Explicit negation or short "we're done" reply.
    Closure,
    Normal,
}

impl MessageKind {
    pub fn is_closure_intent(self) -> bool {
        !matches!(self, Self::Normal)
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Gratitude => "gratitude",
            Self::Farewell => "farewell",
            Self::Closure => "closure",
            Self::Normal => "normal",
        }
    }
}

const GRATITUDE_MARKERS: [&str; 13] = [
    "obrigado",
    "obrigada",
    "valeu",
    "agradeço",
    "agradeco",
    "grato",
    "grata",
    "thanks",
    "thank you",
    "brigado",
    "brigada",
    "vlw",
    "valeu mesmo",
];

const FAREWELL_MARKERS: [&str; 14] = [
    "tchau",
    "até logo",
    "até mais",
    "até breve",
    "até a próxima",
    "bye",
    "adeus",
    "falou",
    "flw",
    "xau",
    "era só isso",
    "era isso mesmo",
    "só isso mesmo",
    "não precisa mais",
];

const NEGATION_MARKERS: [&str; 10] = [
    "não preciso",
    "nao preciso",
    "não quero",
    "nao quero",
    "não tenho interesse",
    "não é necessário",
    "tá bom assim",
    "está bom assim",
    "só isso",
    "apenas isso",
];

/// Bare closure tokens accepted by the short-reply heuristic.
const SHORT_CLOSURE_TOKENS: [&str; 3] = ["ok", "beleza", "certo"];

const SHORT_REPLY_MAX_LEN: usize = 15;

/// Categorizes an utterance. Priority when several keyword sets match:
/// gratitude > farewell > negation/short-reply > normal. Gratitude goes
/// first because gratitude phrasing often carries farewell words too
/// ("obrigado, tchau" is a thank-you, not a plain goodbye).
pub fn classify(utterance: &str) -> MessageKind {
    let text = utterance.to_lowercase();
    let text = text.trim();

    if contains_any(text, &GRATITUDE_MARKERS) {
        return MessageKind::Gratitude;
    }
    if contains_any(text, &FAREWELL_MARKERS) {
        return MessageKind::Farewell;
    }
    if contains_any(text, &NEGATION_MARKERS) || is_short_closure_reply(text) {
        return MessageKind::Closure;
    }

    MessageKind::Normal
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(marker))
}

/// Flags bare affirmation/negation replies ("não", "ok") that close a
/// conversation without matching any full keyword.
fn is_short_closure_reply(text: &str) -> bool {
    if text.chars().count() > SHORT_REPLY_MAX_LEN {
        return false;
    }

    text.contains("não")
        || text.contains("nao")
        || SHORT_CLOSURE_TOKENS.contains(&text)
}

#[cfg(test)]
mod tests {
    use super::{classify, MessageKind};

    #[test]
    fn gratitude_wins_over_farewell_wording() {
        assert_eq!(classify("Obrigado, tchau!"), MessageKind::Gratitude);
        assert_eq!(classify("valeu mesmo"), MessageKind::Gratitude);
    }

    #[test]
    fn farewell_markers_are_recognized() {
        assert_eq!(classify("tchau"), MessageKind::Farewell);
        assert_eq!(classify("Era só isso"), MessageKind::Farewell);
    }

    #[test]
    fn short_negation_replies_close_the_conversation() {
        assert_eq!(classify("não"), MessageKind::Closure);
        assert_eq!(classify("nao"), MessageKind::Closure);
        assert_eq!(classify("ok"), MessageKind::Closure);
        assert_eq!(classify("beleza"), MessageKind::Closure);
    }

    #[test]
    fn short_reply_heuristic_respects_length_bound() {
        // Contains "não" but is a genuine question, well past 15 chars.
        assert_eq!(
            classify("não sei qual plano de telefonia escolher"),
            MessageKind::Normal
        );
    }

    #[test]
    fn normal_utterances_pass_through() {
        assert_eq!(classify("Olá"), MessageKind::Normal);
        assert_eq!(classify("Quais serviços vocês oferecem?"), MessageKind::Normal);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("  TCHAU  "), MessageKind::Farewell);
        assert_eq!(classify("OBRIGADA"), MessageKind::Gratitude);
    }
}
