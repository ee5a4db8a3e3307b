//! Bundled static profile: the guaranteed-success final tier.
//!
//! Hand-authored data for the three Grupo OC divisions (OC TEL, OC DIGITAL,
//! OC SAÚDE). Content is byte-stable across calls; only the collection
//! timestamp differs.

use atende_core::profile::{CompanyProfile, ProfileMetadata, ProfileSource, Service};
use chrono::Utc;

/// Builds the bundled company profile. Always succeeds.
pub fn static_profile() -> CompanyProfile {
    let services = static_services();
    CompanyProfile {
        narrative_texts: vec![
            "Grupo OC - Soluções Empresariais Integradas".to_string(),
            "OC TEL: Expertise em Telecom para reduzir custos e otimizar comunicação".to_string(),
            "OC DIGITAL: Gestão de Marketing para ser referência na web".to_string(),
            "OC SAÚDE: Planos Empresariais sob medida para seus colaboradores".to_string(),
            "Três divisões especializadas para atender todas as necessidades empresariais"
                .to_string(),
            "Soluções personalizadas com foco em redução de custos e aumento de produtividade"
                .to_string(),
            "Consultoria especializada em cada área de atuação".to_string(),
            "Equipe de consultores experientes e certificados".to_string(),
        ],
        differentiators: vec![
            "Três divisões especializadas: OC TEL, OC DIGITAL e OC SAÚDE".to_string(),
            "Soluções integradas para todas as necessidades empresariais".to_string(),
            "Foco em redução de custos e otimização de recursos".to_string(),
            "Planos personalizados a partir de 2 vidas (OC SAÚDE)".to_string(),
            "Auditoria detalhada de faturas para garantir conformidade".to_string(),
            "Estratégias de marketing digital com ROI comprovado".to_string(),
            "Relatórios detalhados de desempenho e resultados".to_string(),
            "Suporte dedicado e acompanhamento contínuo".to_string(),
        ],
        about: "O Grupo OC é uma empresa especializada em soluções empresariais integradas, \
                atuando através de três divisões estratégicas: OC TEL (Soluções em Telecom), \
                OC DIGITAL (Gestão de Marketing) e OC SAÚDE (Planos Empresariais). Nossa missão \
                é ajudar empresas a reduzir custos, otimizar processos e aumentar a \
                produtividade através de soluções personalizadas e consultoria especializada."
            .to_string(),
        metadata: ProfileMetadata {
            source: ProfileSource::StaticFallback,
            collected_at: Utc::now(),
            service_count: services.len(),
        },
        services,
    }
}

fn static_services() -> Vec<Service> {
    vec![
        Service::with_division(
            "OC TEL - Telefonia Fixa e Móvel",
            "Conectamos você à operadora ideal, com soluções em telefonia móvel que reduzem \
             custos, simplificam a gestão e oferecem os melhores planos para sua empresa.",
            "OC TEL",
            "Telecom",
        ),
        Service::with_division(
            "OC TEL - Internet Fibra",
            "Com planos personalizados e suporte dedicado, conectamos você ao que há de melhor \
             para manter sua equipe eficiente e sempre disponível.",
            "OC TEL",
            "Telecom",
        ),
        Service::with_division(
            "OC TEL - Dados Móveis",
            "Com uma linha de dados rápida e estável, garantimos que sua equipe se mantenha \
             produtiva e totalmente conectada, de qualquer lugar.",
            "OC TEL",
            "Telecom",
        ),
        Service::with_division(
            "OC TEL - Link Dedicado e Infraestrutura",
            "Fornecemos serviços de dados como Link Dedicado, modens, roteadores e rastreamento \
             de frotas M2M para otimizar sua infraestrutura de comunicação.",
            "OC TEL",
            "Telecom",
        ),
        Service::with_division(
            "OC TEL - Auditoria de Faturas de Telefonia",
            "Realizamos auditorias detalhadas nas faturas de telefonia para assegurar \
             conformidade com os contratos e corrigir discrepâncias.",
            "OC TEL",
            "Telecom",
        ),
        Service::with_division(
            "OC DIGITAL - SEO e Otimização",
            "Serviços de SEO para melhorar a posição do seu site nos resultados de busca e \
             aumentar o tráfego orgânico, tornando sua empresa referência na web.",
            "OC DIGITAL",
            "Marketing Digital",
        ),
        Service::with_division(
            "OC DIGITAL - Google Ads e Campanhas",
            "Campanhas no Google Ads para alcançar o público-alvo de forma eficaz e maximizar o \
             retorno sobre o investimento em publicidade digital.",
            "OC DIGITAL",
            "Marketing Digital",
        ),
        Service::with_division(
            "OC DIGITAL - Criação de Conteúdo",
            "Desenvolvemos textos, artigos, postagens em redes sociais, vídeos e outros \
             formatos, criados para engajar, informar e gerar valor.",
            "OC DIGITAL",
            "Marketing Digital",
        ),
        Service::with_division(
            "OC DIGITAL - Marketing Digital Completo",
            "Estratégias completas de marketing digital, incluindo conteúdo, mídias sociais, \
             e-mail marketing e análise de dados.",
            "OC DIGITAL",
            "Marketing Digital",
        ),
        Service::with_division(
            "OC SAÚDE - Planos de Saúde Empresariais",
            "Soluções personalizadas em convênios médicos, com planos a partir de 2 vidas e \
             opções de cobertura nacional ou regional.",
            "OC SAÚDE",
            "Saúde Empresarial",
        ),
        Service::with_division(
            "OC SAÚDE - Consultoria em Saúde Corporativa",
            "Consultoria especializada para escolher a melhor opção, sempre considerando o \
             melhor custo-benefício para o perfil da sua empresa.",
            "OC SAÚDE",
            "Saúde Empresarial",
        ),
        Service::with_division(
            "OC SAÚDE - Otimização de Custos Corporativos",
            "Otimize os custos com planos de saúde da sua empresa, utilizando alternativas \
             inteligentes, eficazes e completamente personalizadas.",
            "OC SAÚDE",
            "Saúde Empresarial",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use atende_core::profile::ProfileSource;

    use super::static_profile;

    #[test]
    fn static_profile_is_byte_identical_apart_from_timestamp() {
        let mut first = static_profile();
        let second = static_profile();

        first.metadata.collected_at = second.metadata.collected_at;
        assert_eq!(first, second);
    }

    #[test]
    fn static_profile_is_tagged_and_complete() {
        let profile = static_profile();
        assert_eq!(profile.metadata.source, ProfileSource::StaticFallback);
        assert_eq!(profile.metadata.service_count, profile.services.len());
        assert!(!profile.about.is_empty());
        assert!(profile.services.len() >= 10);
        assert!(profile
            .services
            .iter()
            .all(|service| service.division.is_some() && !service.description.is_empty()));
    }
}
