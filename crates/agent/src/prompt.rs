//! System-prompt construction for the AI responder.

use atende_core::profile::CompanyProfile;

/// Services embedded in the prompt, beyond which the catalog only inflates
/// token usage.
const MAX_PROMPT_SERVICES: usize = 12;

/// Builds the system instruction grounding the completion service in the
/// company profile.
pub fn build_system_prompt(profile: &CompanyProfile) -> String {
    let mut prompt = String::from(
        "Você é o assistente virtual do Grupo OC. Responda em português, de forma \
         cordial e objetiva, usando apenas as informações abaixo. Se não souber a \
         resposta, oriente o cliente a falar com a equipe comercial. Nunca invente \
         serviços ou preços.\n",
    );

    prompt.push_str("\nSobre a empresa:\n");
    prompt.push_str(profile.about.trim());
    prompt.push('\n');

    if !profile.narrative_texts.is_empty() {
        prompt.push_str("\nDestaques:\n");
        for text in &profile.narrative_texts {
            prompt.push_str("- ");
            prompt.push_str(text.trim());
            prompt.push('\n');
        }
    }

    if !profile.services.is_empty() {
        prompt.push_str("\nServiços oferecidos:\n");
        for service in profile.services.iter().take(MAX_PROMPT_SERVICES) {
            prompt.push_str("- ");
            prompt.push_str(&service.name);
            prompt.push_str(": ");
            prompt.push_str(&service.description);
            prompt.push('\n');
        }
    }

    if !profile.differentiators.is_empty() {
        prompt.push_str("\nDiferenciais:\n");
        for differentiator in &profile.differentiators {
            prompt.push_str("- ");
            prompt.push_str(differentiator.trim());
            prompt.push('\n');
        }
    }

    prompt
}
