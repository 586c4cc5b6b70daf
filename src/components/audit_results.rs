use web_sys::js_sys;
use yew::prelude::*;

const CRITICAL_FINDINGS: [&str; 3] = [
    "Optimisation des balises meta manquante",
    "Temps de chargement trop long",
    "Contenu en double détecté",
];

const IMPORTANT_FINDINGS: [&str; 3] = [
    "Structure des URLs à améliorer",
    "Densité de mots-clés insuffisante",
    "Balises alt manquantes sur les images",
];

const OPTIMIZATION_TIPS: [&str; 3] = [
    "Ajouter plus de contenu original",
    "Améliorer la structure des titres",
    "Optimiser les images",
];

#[derive(Clone, Copy, PartialEq)]
pub struct AuditScores {
    pub seo: u32,
    pub performance: u32,
    pub accessibility: u32,
}

/// Placeholder audit outcome, drawn once when the analysis "finishes".
#[derive(Clone, Copy, PartialEq)]
pub struct AuditReport {
    pub scores: AuditScores,
    pub yearly_searches: u32,
    pub competitors: u32,
}

impl AuditReport {
    pub fn generate() -> Self {
        AuditReport {
            scores: AuditScores {
                seo: draw_score(js_sys::Math::random()),
                performance: draw_score(js_sys::Math::random()),
                accessibility: draw_score(js_sys::Math::random()),
            },
            yearly_searches: draw_in_range(js_sys::Math::random(), 9_852, 13_072),
            competitors: draw_in_range(js_sys::Math::random(), 853, 1_107),
        }
    }
}

/// Maps a unit-interval draw onto the displayed score range [40, 69].
fn draw_score(unit: f64) -> u32 {
    40 + (unit * 30.0) as u32
}

fn draw_in_range(unit: f64, min: u32, max: u32) -> u32 {
    min + (unit * f64::from(max - min + 1)) as u32
}

fn score_class(score: u32) -> &'static str {
    if score >= 90 {
        "score-good"
    } else if score >= 70 {
        "score-mid"
    } else {
        "score-low"
    }
}

#[derive(Properties, PartialEq)]
pub struct AuditResultsProps {
    pub url: String,
    pub report: AuditReport,
}

#[function_component(AuditResults)]
pub fn audit_results(props: &AuditResultsProps) -> Html {
    let AuditReport { scores, yearly_searches, competitors } = props.report;

    html! {
        <div class="audit-results">
            <style>
                {r#"
                .audit-results {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 1.5rem;
                }
                .audit-results .results-card {
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                    padding: 2rem;
                }
                .audit-results h1 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .audit-results h2 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .audit-results .score-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .audit-results .score-card {
                    background: #f9fafb;
                    border-radius: 8px;
                    padding: 1.5rem;
                    text-align: center;
                }
                .audit-results .score-card h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }
                .audit-results .score-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .audit-results .score-good { color: #16a34a; }
                .audit-results .score-mid { color: #f97316; }
                .audit-results .score-low { color: #dc2626; }
                .audit-results .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .audit-results .stat-card,
                .audit-results .copy-card {
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                    padding: 1.5rem;
                }
                .audit-results .stat-card h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }
                .audit-results .stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #f39018;
                }
                .audit-results .copy-card {
                    margin-bottom: 2rem;
                }
                .audit-results .copy-card p {
                    color: #374151;
                    margin-bottom: 1rem;
                }
                .audit-results .copy-card p:last-child {
                    margin-bottom: 0;
                }
                .audit-results .recommendation-section {
                    margin-bottom: 2rem;
                }
                .audit-results .recommendation-section ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .audit-results .recommendation-section li {
                    display: flex;
                    align-items: flex-start;
                    color: #374151;
                }
                .audit-results .recommendation-icon {
                    margin-right: 0.75rem;
                    font-size: 1.1rem;
                }
                .audit-results .icon-critical { color: #ef4444; }
                .audit-results .icon-important { color: #f97316; }
                .audit-results .icon-suggestion { color: #22c55e; }
                .audit-results .cta-row {
                    margin-top: 3rem;
                    text-align: center;
                }
                .audit-results .cta-link {
                    display: inline-block;
                    background: #f39018;
                    color: #fff;
                    padding: 0.75rem 2rem;
                    border-radius: 8px;
                    text-decoration: none;
                    transition: background-color 0.2s;
                }
                .audit-results .cta-link:hover {
                    background: #e08416;
                }
                @media (max-width: 768px) {
                    .audit-results .score-grid,
                    .audit-results .stats-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>

            <div class="results-card">
                <h1>{ format!("Résultats de l'audit SEO pour {}", props.url) }</h1>

                <div class="score-grid">
                    { score_card("Score SEO", scores.seo) }
                    { score_card("Performance", scores.performance) }
                    { score_card("Accessibilité", scores.accessibility) }
                </div>

                <div class="stats-grid">
                    <div class="stat-card">
                        <h3>{"Recherches par an sur activité et localité"}</h3>
                        <p class="stat-value">{ yearly_searches }</p>
                    </div>
                    <div class="stat-card">
                        <h3>{"Concurrents sur votre activité et localité"}</h3>
                        <p class="stat-value">{ competitors }</p>
                    </div>
                </div>

                <div class="copy-card">
                    <h2>{"Astuces & stratégies gagnantes :"}</h2>
                    <p>{"Votre activité fait face à une concurrence intense, avec de nombreux professionnels présents sur le même créneau."}</p>
                    <p>{"💡 Prenez une longueur d'avance en optimisant votre position dans les résultats de recherche."}</p>
                    <p>{"Soyez l'option que vos clients potentiels voient en premier et transformez cette visibilité en opportunités concrètes."}</p>
                </div>

                { recommendation_section("Points critiques à corriger", &CRITICAL_FINDINGS, "✖", "icon-critical") }
                { recommendation_section("Points importants à améliorer", &IMPORTANT_FINDINGS, "⚠", "icon-important") }
                { recommendation_section("Suggestions d'optimisation", &OPTIMIZATION_TIPS, "✔", "icon-suggestion") }

                <div class="copy-card">
                    <h2>{"Boostez votre visibilité et attirez des prospects qualifiés:"}</h2>
                    <p>{"Pour maximiser vos chances d'être vu, il est essentiel d'apparaître en haut des résultats de recherche."}</p>
                    <p>{"Saviez-vous que 7 internautes sur 10 choisissent un professionnel situé parmi les premiers résultats"}</p>
                    <p>{"Grâce à nos offres EXPERTPRO, positionnez votre entreprise en tête des recherches et améliorez votre visibilité en ligne. Attirez de nouveaux clients et recevez davantage de demandes grâce à un référencement optimisé et prioritaire sur les plateformes stratégiques."}</p>
                </div>

                <div class="cta-row">
                    <a
                        href="https://www.leguichetpro.com/devenez-un-expert/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="cta-link"
                    >
                        {"Découvrir nos solutions"}
                    </a>
                </div>
            </div>
        </div>
    }
}

fn score_card(title: &str, score: u32) -> Html {
    html! {
        <div class="score-card">
            <h3>{ title }</h3>
            <div class={classes!("score-value", score_class(score))}>
                { format!("{}%", score) }
            </div>
        </div>
    }
}

fn recommendation_section(title: &str, items: &[&str], icon: &str, icon_class: &'static str) -> Html {
    html! {
        <div class="recommendation-section">
            <h2>{ title }</h2>
            <ul>
                {
                    items.iter().map(|item| html! {
                        <li>
                            <span class={classes!("recommendation-icon", icon_class)}>{ icon }</span>
                            <span>{ *item }</span>
                        </li>
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_stay_in_displayed_range() {
        assert_eq!(draw_score(0.0), 40);
        assert_eq!(draw_score(0.5), 55);
        assert_eq!(draw_score(0.999_999), 69);
    }

    #[test]
    fn market_statistics_stay_in_their_ranges() {
        assert_eq!(draw_in_range(0.0, 9_852, 13_072), 9_852);
        assert_eq!(draw_in_range(0.999_999, 9_852, 13_072), 13_072);
        assert_eq!(draw_in_range(0.0, 853, 1_107), 853);
        assert_eq!(draw_in_range(0.999_999, 853, 1_107), 1_107);
    }

    #[test]
    fn score_class_thresholds() {
        assert_eq!(score_class(90), "score-good");
        assert_eq!(score_class(89), "score-mid");
        assert_eq!(score_class(70), "score-mid");
        assert_eq!(score_class(69), "score-low");
    }

    #[test]
    fn recommendation_lists_are_fixed() {
        assert_eq!(CRITICAL_FINDINGS.len(), 3);
        assert_eq!(IMPORTANT_FINDINGS.len(), 3);
        assert_eq!(OPTIMIZATION_TIPS.len(), 3);
    }
}
