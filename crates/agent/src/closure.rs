//! Fixed reply pools for closure intents.
//!
//! Closure turns are high-frequency and low-information-need; they must
//! never depend on an external call that could fail or add latency, so the
//! replies are pre-written and selected uniformly at random. The random
//! source is injected so tests can enumerate the pools deterministically.

use rand::Rng;

use crate::classify::MessageKind;

pub const GRATITUDE_REPLIES: [&str; 5] = [
    "Por nada! 😊 Posso ajudar em mais alguma coisa?",
    "Fico feliz em ajudar! 🤝 Há algo mais que posso esclarecer?",
    "De nada! 😄 Estou aqui se precisar de mais informações.",
    "Foi um prazer ajudar! 🌟 Tem alguma outra dúvida?",
    "Disponha sempre! 👍 Posso auxiliar em mais algum assunto?",
];

pub const FAREWELL_REPLIES: [&str; 5] = [
    "Até logo! 👋 Estou sempre à disposição quando precisar. Tenha um ótimo dia!",
    "Tchau! 😊 Estarei aqui sempre que precisar dos serviços do Grupo OC. Até mais!",
    "Até breve! 🤝 Foi um prazer conversar com você. Conte conosco sempre!",
    "Falou! 👍 Qualquer dúvida sobre nossos serviços, é só chamar. Até logo!",
    "Até a próxima! 🌟 O Grupo OC está sempre pronto para atender você!",
];

pub const CLOSURE_REPLIES: [&str; 5] = [
    "Perfeito! 😊 Estou sempre à disposição quando precisar. O Grupo OC está aqui para ajudar!",
    "Entendi! 👍 Qualquer dúvida sobre nossos serviços, é só me chamar. Tenha um ótimo dia!",
    "Tudo bem! 🤝 Estarei aqui sempre que precisar de informações sobre o Grupo OC.",
    "Certo! 😄 Conte conosco sempre que precisar. Até logo!",
    "Beleza! 🌟 O Grupo OC está sempre pronto para atender você quando precisar!",
];

/// Picks a reply for a closure intent. Returns `None` for `Normal`, which
/// has no canned pool and must go through a responder.
pub fn closure_reply(kind: MessageKind, rng: &mut impl Rng) -> Option<&'static str> {
    let pool: &[&'static str] = match kind {
        MessageKind::Gratitude => &GRATITUDE_REPLIES,
        MessageKind::Farewell => &FAREWELL_REPLIES,
        MessageKind::Closure => &CLOSURE_REPLIES,
        MessageKind::Normal => return None,
    };

    Some(pool[rng.gen_range(0..pool.len())])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{closure_reply, CLOSURE_REPLIES, FAREWELL_REPLIES, GRATITUDE_REPLIES};
    use crate::classify::MessageKind;

    #[test]
    fn every_selection_comes_from_the_matching_pool() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let gratitude = closure_reply(MessageKind::Gratitude, &mut rng).unwrap();
            assert!(GRATITUDE_REPLIES.contains(&gratitude));

            let farewell = closure_reply(MessageKind::Farewell, &mut rng).unwrap();
            assert!(FAREWELL_REPLIES.contains(&farewell));

            let closure = closure_reply(MessageKind::Closure, &mut rng).unwrap();
            assert!(CLOSURE_REPLIES.contains(&closure));
        }
    }

    #[test]
    fn full_pool_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::BTreeSet::new();

        for _ in 0..200 {
            seen.insert(closure_reply(MessageKind::Gratitude, &mut rng).unwrap());
        }

        assert_eq!(seen.len(), GRATITUDE_REPLIES.len());
    }

    #[test]
    fn normal_kind_has_no_canned_reply() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(closure_reply(MessageKind::Normal, &mut rng).is_none());
    }
}
