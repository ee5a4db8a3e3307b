//! HTML text extraction shared by the fetch and crawl tiers.

use scraper::{Html, Selector};

/// Accepted fragment length. Shorter fragments are navigation crumbs,
/// longer ones are body copy that does not name a service.
const MIN_FRAGMENT_LEN: usize = 10;
const MAX_FRAGMENT_LEN: usize = 200;

const NOISE_MARKERS: [&str; 4] = ["menu", "footer", "cookie", "copyright"];

/// Extracts heading text (`h1`..`h6`) from a page, filtering navigation and
/// footer noise plus length outliers, de-duplicated in document order.
pub fn extract_headings(html: &str) -> Vec<String> {
    collect_fragments(html, &["h1", "h2", "h3", "h4", "h5", "h6"])
}

/// Extracts heading and paragraph text for the crawl tier.
pub fn extract_headings_and_paragraphs(html: &str) -> (Vec<String>, Vec<String>) {
    let headings = collect_fragments(html, &["h1", "h2", "h3"]);
    let paragraphs = collect_fragments(html, &["p"]);
    (headings, paragraphs)
}

fn collect_fragments(html: &str, selectors: &[&str]) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut fragments: Vec<String> = Vec::new();

    for selector_str in selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        for element in document.select(&selector) {
            let text = element.text().collect::<Vec<_>>().join(" ");
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if is_usable_fragment(&text) && !fragments.contains(&text) {
                fragments.push(text);
            }
        }
    }

    fragments
}

fn is_usable_fragment(text: &str) -> bool {
    let length = text.chars().count();
    if !(MIN_FRAGMENT_LEN..=MAX_FRAGMENT_LEN).contains(&length) {
        return false;
    }

    let lowered = text.to_lowercase();
    !NOISE_MARKERS.iter().any(|marker| lowered.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::{extract_headings, extract_headings_and_paragraphs};

    const SERVICES_PAGE: &str = r#"
        <html><body>
            <h1>Menu principal</h1>
            <h2>Telefonia Fixa e Móvel Corporativa</h2>
            <h2>Telefonia Fixa e Móvel Corporativa</h2>
            <h3>Internet Fibra para Empresas</h3>
            <h4>SEO</h4>
            <p>Reduzimos custos de comunicação com planos sob medida.</p>
            <h2>Footer institucional com links</h2>
        </body></html>
    "#;

    #[test]
    fn filters_noise_and_length_outliers() {
        let headings = extract_headings(SERVICES_PAGE);
        assert_eq!(
            headings,
            vec![
                "Telefonia Fixa e Móvel Corporativa".to_string(),
                "Internet Fibra para Empresas".to_string(),
            ]
        );
    }

    #[test]
    fn deduplicates_repeated_headings() {
        let headings = extract_headings(SERVICES_PAGE);
        let repeated = headings
            .iter()
            .filter(|text| text.as_str() == "Telefonia Fixa e Móvel Corporativa")
            .count();
        assert_eq!(repeated, 1);
    }

    #[test]
    fn crawl_extraction_separates_headings_from_paragraphs() {
        let (headings, paragraphs) = extract_headings_and_paragraphs(SERVICES_PAGE);
        assert!(headings.contains(&"Telefonia Fixa e Móvel Corporativa".to_string()));
        assert_eq!(
            paragraphs,
            vec!["Reduzimos custos de comunicação com planos sob medida.".to_string()]
        );
    }

    #[test]
    fn empty_page_yields_no_fragments() {
        assert!(extract_headings("<html><body></body></html>").is_empty());
    }
}
