//! Commercial-interest detection over the user utterance.
//!
//! A positive result tells the delivery layer to open the lead-capture
//! form. Only the user's own words are inspected; the assistant reply is
//! never keyword-matched (it would flag its own sales copy).

const COMMERCIAL_KEYWORDS: [&str; 36] = [
    // direct interest
    "quero",
    "preciso",
    "gostaria",
    "interesse",
    "contratar",
    "contratação",
    "contratacao",
    "contrato",
    "solicitar",
    "orçamento",
    "orcamento",
    "proposta",
    "cotação",
    "cotacao",
    "valor",
    "preço",
    "preco",
    "custo",
    // commercial actions
    "falar com",
    "reunião",
    "reuniao",
    "apresentação",
    "apresentacao",
    "demonstração",
    "demonstracao",
    "contato",
    "ligar",
    "whatsapp",
    "vendas",
    "comercial",
    // urgency and decision
    "urgente",
    "imediato",
    "decidir",
    "escolher",
    "comparar",
    "avaliar",
];

/// Named service categories that signal interest on their own.
const SERVICE_MENTIONS: [&str; 5] =
    ["telefonia", "marketing", "plano de saúde", "seo", "google ads"];

/// Fixed phrases that are high-confidence on their own.
const ENGAGEMENT_PHRASES: [&str; 4] =
    ["quero contratar", "interesse em", "preciso de", "gostaria de"];

const ENGAGEMENT_INTENT_WORDS: [&str; 3] = ["contratar", "solicitar", "começar"];

const GREETING_TOKENS: [&str; 5] = ["olá", "oi", "bom dia", "boa tarde", "boa noite"];

const GREETING_MAX_LEN: usize = 20;

/// Returns whether the utterance expresses lead-worthy commercial intent.
///
/// Three independent signals: commercial vocabulary, named service
/// mentions, and a "how to engage" pattern. A short greeting suppresses
/// all of them so "oi" or "bom dia" never opens the lead form.
pub fn detect_commercial_interest(utterance: &str) -> bool {
    let text = utterance.to_lowercase();
    let text = text.trim();

    if is_simple_greeting(text) {
        return false;
    }

    let has_keyword = COMMERCIAL_KEYWORDS.iter().any(|keyword| text.contains(keyword));
    let mentions_service = SERVICE_MENTIONS.iter().any(|service| text.contains(service));
    let asks_how_to_engage = (text.contains("como")
        && ENGAGEMENT_INTENT_WORDS.iter().any(|word| text.contains(word)))
        || ENGAGEMENT_PHRASES.iter().any(|phrase| text.contains(phrase));

    has_keyword || mentions_service || asks_how_to_engage
}

fn is_simple_greeting(text: &str) -> bool {
    text.chars().count() < GREETING_MAX_LEN
        && GREETING_TOKENS.iter().any(|token| text.contains(token))
}
