//! Deterministic rule-based responder: canned but data-driven replies
//! rendered from the company profile. This path can never fail; the
//! default template guarantees a reply even with no specific content.

use atende_core::profile::CompanyProfile;

/// Services listed in a rendered reply.
const MAX_LISTED_SERVICES: usize = 6;

/// Sub-intent detected from keyword membership, checked in declaration
/// order with first match winning. The ordering is load-bearing:
/// "quanto custa o serviço de telefonia" should read as a services
/// question before a pricing one only if services is checked first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubIntent {
    Services,
    About,
    Contact,
    Pricing,
    Default,
}

impl SubIntent {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Pricing => "pricing",
            Self::Default => "default",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleBasedReply {
    pub text: String,
    pub sub_intent: SubIntent,
}

const SERVICES_KEYWORDS: [&str; 9] = [
    "serviço",
    "servico",
    "telefonia",
    "internet",
    "fibra",
    "marketing",
    "saúde",
    "saude",
    "plano",
];

const ABOUT_KEYWORDS: [&str; 7] =
    ["empresa", "grupo oc", "sobre", "quem são", "quem sao", "história", "historia"];

const CONTACT_KEYWORDS: [&str; 6] =
    ["contato", "falar", "telefone", "email", "e-mail", "whatsapp"];

const PRICING_KEYWORDS: [&str; 7] =
    ["preço", "preco", "valor", "orçamento", "orcamento", "custo", "quanto custa"];

/// Classifies the utterance into a sub-intent and renders the matching
/// template from the profile.
pub fn respond(utterance: &str, profile: &CompanyProfile) -> RuleBasedReply {
    let text = utterance.to_lowercase();
    let sub_intent = detect_sub_intent(&text);

    let text = match sub_intent {
        SubIntent::Services => render_services(profile),
        SubIntent::About => render_about(profile),
        SubIntent::Contact => render_contact(),
        SubIntent::Pricing => render_pricing(),
        SubIntent::Default => render_default(profile),
    };

    RuleBasedReply { text, sub_intent }
}

fn detect_sub_intent(text: &str) -> SubIntent {
    let cascade: [(&[&str], SubIntent); 4] = [
        (&SERVICES_KEYWORDS, SubIntent::Services),
        (&ABOUT_KEYWORDS, SubIntent::About),
        (&CONTACT_KEYWORDS, SubIntent::Contact),
        (&PRICING_KEYWORDS, SubIntent::Pricing),
    ];

    for (keywords, sub_intent) in cascade {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return sub_intent;
        }
    }

    SubIntent::Default
}

fn render_services(profile: &CompanyProfile) -> String {
    let mut reply =
        String::from("O Grupo OC oferece os seguintes serviços através de suas divisões:\n");

    for service in profile.services.iter().take(MAX_LISTED_SERVICES) {
        reply.push_str("• ");
        reply.push_str(&service.name);
        reply.push('\n');
    }

    reply.push_str(
        "\nQuer saber mais sobre algum deles? É só perguntar, ou fale com nossa equipe comercial! 😊",
    );
    reply
}

fn render_about(profile: &CompanyProfile) -> String {
    format!(
        "{}\n\nPosso detalhar qualquer uma das nossas áreas de atuação. O que gostaria de saber?",
        profile.about.trim()
    )
}

fn render_contact() -> String {
    "Você pode falar com a equipe do Grupo OC pelo formulário de contato do nosso site, \
     por telefone ou WhatsApp. Se preferir, me diga qual serviço interessa e eu encaminho \
     seu contato para o consultor certo! 📞"
        .to_string()
}

fn render_pricing() -> String {
    "Os valores dos nossos serviços são personalizados conforme o perfil e a necessidade \
     de cada empresa. Para receber um orçamento sob medida, é só deixar seu contato que \
     nossa equipe comercial retorna rapidinho! 💼"
        .to_string()
}

fn render_default(profile: &CompanyProfile) -> String {
    let divisions = profile
        .services
        .iter()
        .filter_map(|service| service.division.as_deref())
        .collect::<Vec<_>>();
    let mut unique_divisions = Vec::new();
    for division in divisions {
        if !unique_divisions.contains(&division) {
            unique_divisions.push(division);
        }
    }

    if unique_divisions.is_empty() {
        "Olá! 👋 Sou o assistente virtual do Grupo OC. Posso falar sobre nossos serviços, \
         a empresa, contato ou orçamentos. Como posso ajudar?"
            .to_string()
    } else {
        format!(
            "Olá! 👋 Sou o assistente virtual do Grupo OC. Atuamos com {} e posso falar \
             sobre serviços, a empresa, contato ou orçamentos. Como posso ajudar?",
            unique_divisions.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use atende_content::static_profile;

    use super::{respond, SubIntent, MAX_LISTED_SERVICES};

    #[test]
    fn services_question_lists_capped_catalog() {
        let profile = static_profile();
        let reply = respond("quais serviços vocês oferecem?", &profile);

        assert_eq!(reply.sub_intent, SubIntent::Services);
        let listed = reply.text.matches("• ").count();
        assert_eq!(listed, MAX_LISTED_SERVICES);
    }

    #[test]
    fn about_question_uses_company_text() {
        let profile = static_profile();
        let reply = respond("me fala sobre a empresa", &profile);

        assert_eq!(reply.sub_intent, SubIntent::About);
        assert!(reply.text.contains(&profile.about));
    }

    #[test]
    fn contact_and_pricing_have_fixed_boilerplate() {
        let profile = static_profile();

        let contact = respond("qual o telefone de vocês?", &profile);
        assert_eq!(contact.sub_intent, SubIntent::Contact);

        let pricing = respond("qual o preço?", &profile);
        assert_eq!(pricing.sub_intent, SubIntent::Pricing);
        assert!(pricing.text.contains("orçamento"));
    }

    #[test]
    fn first_match_wins_across_keyword_sets() {
        let profile = static_profile();
        // Mentions both pricing and a service; services is checked first.
        let reply = respond("quanto custa o plano de telefonia?", &profile);
        assert_eq!(reply.sub_intent, SubIntent::Services);
    }

    #[test]
    fn unknown_utterance_gets_the_default_template() {
        let profile = static_profile();
        let reply = respond("xyz", &profile);

        assert_eq!(reply.sub_intent, SubIntent::Default);
        assert!(!reply.text.is_empty());
    }

    #[test]
    fn every_sub_intent_carries_a_provenance_tag() {
        assert_eq!(SubIntent::Services.tag(), "services");
        assert_eq!(SubIntent::About.tag(), "about");
        assert_eq!(SubIntent::Contact.tag(), "contact");
        assert_eq!(SubIntent::Pricing.tag(), "pricing");
        assert_eq!(SubIntent::Default.tag(), "default");
    }
}
