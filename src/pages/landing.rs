use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::audit_results::{AuditReport, AuditResults};
use crate::components::callback_modal::{CallbackModal, CallbackModalState};
use crate::components::lead_form::LeadForm;
use crate::components::notification::{Notice, NotificationToast};
use crate::services::webhook::{send_lead_request, validate_lead, LeadRequestData};
use crate::utils::sanitize::sanitize_url_input;

const ANALYSIS_DELAY_MS: u32 = 10_000;

/// Main page progression. `Analyzing` spans the webhook send and the
/// simulated analysis, so it is also the submit guard.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AuditFlow {
    UrlEntry,
    LeadFormVisible,
    Analyzing,
    ResultsShown,
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let flow = use_state(|| AuditFlow::UrlEntry);
    let url = use_state(String::new);
    let report = use_state(|| None::<AuditReport>);
    let modal = use_state(|| CallbackModalState::Closed);
    let notice = use_state(|| None::<Notice>);

    let on_url_input = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            url.set(sanitize_url_input(&input.value()));
        })
    };

    let on_url_submit = {
        let flow = flow.clone();
        let url = url.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !url.trim().is_empty() {
                flow.set(AuditFlow::LeadFormVisible);
            }
        })
    };

    let on_lead_submit = {
        let flow = flow.clone();
        let report = report.clone();
        let notice = notice.clone();
        Callback::from(move |data: LeadRequestData| {
            if *flow == AuditFlow::Analyzing {
                return;
            }
            if let Err(err) = validate_lead(&data) {
                notice.set(Some(Notice::error(err.user_message())));
                return;
            }

            flow.set(AuditFlow::Analyzing);

            let flow = flow.clone();
            let report = report.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match send_lead_request(&data).await {
                    Ok(()) => {
                        notice.set(Some(Notice::success(
                            "Votre demande a été envoyée avec succès",
                        )));
                        TimeoutFuture::new(ANALYSIS_DELAY_MS).await;
                        report.set(Some(AuditReport::generate()));
                        flow.set(AuditFlow::ResultsShown);
                    }
                    Err(err) => {
                        error!("Erreur lors de l'envoi du formulaire:", err.to_string());
                        notice.set(Some(Notice::error(err.user_message())));
                        // back to the form, every field preserved
                        flow.set(AuditFlow::LeadFormVisible);
                    }
                }
            });
        })
    };

    let open_modal = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(CallbackModalState::Open))
    };

    let on_modal_change = {
        let modal = modal.clone();
        Callback::from(move |state: CallbackModalState| modal.set(state))
    };

    let on_notice = {
        let notice = notice.clone();
        Callback::from(move |n: Notice| notice.set(Some(n)))
    };

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #fff7ed, #fff);
                    color: #111827;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .landing-page a {
                    text-decoration: none;
                }
                .site-header {
                    background: #fff;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                }
                .site-header .header-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .site-header .header-logo img {
                    height: 3rem;
                }
                .site-header nav {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .site-header .nav-link {
                    color: #374151;
                }
                .site-header .nav-link:hover {
                    color: #f39018;
                }
                .callback-button {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #f39018;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.5rem 1rem;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: background-color 0.2s;
                }
                .callback-button:hover {
                    background: #e08416;
                }
                .landing-main {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                    text-align: center;
                }
                .hero-title {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }
                .hero-title .hero-accent {
                    display: block;
                    color: #f39018;
                    font-size: 2.25rem;
                }
                .hero-lede {
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                }
                .hero-lede p {
                    font-size: 1.25rem;
                    color: #374151;
                    margin-bottom: 2rem;
                }
                .url-form .url-input-row {
                    display: flex;
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                }
                .url-form input {
                    flex: 1;
                    padding: 1rem 1.5rem;
                    border: none;
                    border-radius: 8px 0 0 8px;
                    font-size: 1rem;
                }
                .url-form input:focus {
                    outline: 2px solid #f39018;
                }
                .url-form .url-submit {
                    background: #f39018;
                    color: #fff;
                    border: none;
                    border-radius: 0 8px 8px 0;
                    padding: 1rem 2rem;
                    font-size: 1rem;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    transition: background-color 0.2s;
                }
                .url-form .url-submit:hover {
                    background: #e08416;
                }
                .url-form .url-example {
                    font-size: 0.875rem;
                    color: #6b7280;
                    margin-top: 0.5rem;
                }
                .lead-card {
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
                    padding: 2rem;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .lead-card h2 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }
                .pitch-card {
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                    padding: 2rem;
                    margin-bottom: 3rem;
                    text-align: left;
                }
                .pitch-card p {
                    color: #374151;
                    margin-bottom: 1rem;
                }
                .pitch-card p:last-child {
                    margin-bottom: 0;
                }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .feature-card {
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                    padding: 2rem;
                }
                .feature-card .feature-icon {
                    font-size: 2.5rem;
                    color: #f39018;
                    margin-bottom: 1rem;
                }
                .feature-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .feature-card p {
                    color: #4b5563;
                }
                .site-footer {
                    background: #f9fafb;
                    margin-top: 5rem;
                }
                .site-footer .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    text-align: left;
                }
                .site-footer img {
                    height: 2rem;
                    margin-bottom: 1rem;
                }
                .site-footer h4 {
                    font-weight: 600;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .site-footer p,
                .site-footer li,
                .site-footer a {
                    color: #4b5563;
                }
                .site-footer a:hover {
                    color: #f39018;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2.25rem;
                    }
                    .hero-title .hero-accent {
                        font-size: 1.875rem;
                    }
                    .feature-grid,
                    .site-footer .footer-content {
                        grid-template-columns: 1fr;
                    }
                    .site-header nav {
                        gap: 1rem;
                    }
                }
                "#}
            </style>

            <NotificationToast notice={(*notice).clone()} on_dismiss={dismiss_notice} />

            <header class="site-header">
                <div class="header-content">
                    <a
                        class="header-logo"
                        href="https://www.leguichetpro.com/"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <img
                            src="https://www.leguichetpro.com/wp-content/uploads/2024/10/MAIN-Logo-Leguichepro-no-background.jpg"
                            alt="LeGuichetPro Logo"
                            width="180"
                            height="48"
                        />
                    </a>
                    <nav>
                        <button class="callback-button" onclick={open_modal}>
                            {"📞 Être rappelé"}
                        </button>
                        <a
                            class="nav-link"
                            href="https://www.leguichetpro.com/devenez-un-expert/"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Offres ExpertPro"}
                        </a>
                        <a
                            class="nav-link"
                            href="https://www.leguichetpro.com/contact/"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Contact"}
                        </a>
                    </nav>
                </div>
            </header>

            <main class="landing-main">
                {
                    if *flow == AuditFlow::ResultsShown {
                        // report is always set before the flow reaches this state
                        match *report {
                            Some(report) => html! {
                                <AuditResults url={(*url).clone()} report={report} />
                            },
                            None => html! {},
                        }
                    } else {
                        html! {
                            <>
                                <h1 class="hero-title">
                                    {"Audit SEO Gratuit"}
                                    <span class="hero-accent">{"Analysez votre présence en ligne"}</span>
                                </h1>

                                <div class="hero-lede">
                                    <p>
                                        {"Optimisez votre visibilité en ligne et attirez plus de clients !"}
                                        <br />
                                        {"Saviez-vous que 93% des expériences en ligne commencent par un moteur de recherche ?"}
                                    </p>

                                    {
                                        if *flow == AuditFlow::UrlEntry {
                                            html! {
                                                <form class="url-form" onsubmit={on_url_submit}>
                                                    <div class="url-input-row">
                                                        <input
                                                            type="text"
                                                            value={(*url).clone()}
                                                            oninput={on_url_input}
                                                            placeholder="exemple.com"
                                                            pattern="^[a-zA-Z0-9][a-zA-Z0-9-]{1,61}[a-zA-Z0-9]\\.[a-zA-Z]{2,}$"
                                                            required=true
                                                        />
                                                        <button type="submit" class="url-submit">
                                                            {"Continuer →"}
                                                        </button>
                                                    </div>
                                                    <p class="url-example">{"Exemple: monsite.fr"}</p>
                                                </form>
                                            }
                                        } else {
                                            html! {
                                                <div class="lead-card">
                                                    <h2>{"Dernière étape avant votre audit"}</h2>
                                                    <LeadForm
                                                        url={(*url).clone()}
                                                        is_loading={*flow == AuditFlow::Analyzing}
                                                        on_submit={on_lead_submit.clone()}
                                                    />
                                                </div>
                                            }
                                        }
                                    }
                                </div>

                                <div class="pitch-card">
                                    <p>{"✔️ 48% des recherches locales aboutissent à une action concrète, comme un appel ou une visite."}</p>
                                    <p>{"✔️ Les entreprises qui investissent dans une stratégie SEO bien structurée voient souvent une augmentation significative de leurs conversions."}</p>
                                    <p>{"💡 Un audit SEO est la première étape pour maximiser votre potentiel digital. Identifiez les freins à votre visibilité et débloquez des opportunités pour surpasser vos concurrents."}</p>
                                    <p>{"👉 Passez à l'action dès maintenant et donnez à votre site l'avantage qu'il mérite."}</p>
                                </div>

                                <div class="feature-grid">
                                    <div class="feature-card">
                                        <div class="feature-icon">{"🔍"}</div>
                                        <h3>{"Analyse Technique"}</h3>
                                        <p>{"Évaluation complète des aspects techniques de votre site web"}</p>
                                    </div>
                                    <div class="feature-card">
                                        <div class="feature-icon">{"🔍"}</div>
                                        <h3>{"Performance SEO"}</h3>
                                        <p>{"Analyse détaillée de votre optimisation pour les moteurs de recherche"}</p>
                                    </div>
                                    <div class="feature-card">
                                        <div class="feature-icon">{"🔍"}</div>
                                        <h3>{"Recommandations"}</h3>
                                        <p>{"Suggestions personnalisées pour améliorer votre visibilité"}</p>
                                    </div>
                                </div>
                            </>
                        }
                    }
                }
            </main>

            <footer class="site-footer">
                <div class="footer-content">
                    <div>
                        <a
                            href="https://www.leguichetpro.com/"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <img
                                src="https://www.leguichetpro.com/wp-content/uploads/2024/10/MAIN-Logo-Leguichepro-no-background.jpg"
                                alt="LeGuichetPro Logo"
                                width="120"
                                height="32"
                            />
                        </a>
                        <p>{"Solutions digitales pour professionnels"}</p>
                    </div>
                    <div>
                        <h4>{"Contact"}</h4>
                        <ul>
                            <li>{"Email: newsletter@leguichetpro.com"}</li>
                            <li>{"Téléphone: 01 83 79 08 55"}</li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Informations Générales"}</h4>
                        <a
                            href="https://www.leguichetpro.com/conditions-generales-utilisation/"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Conditions générales d'utilisation"}
                        </a>
                    </div>
                </div>
            </footer>

            <CallbackModal
                state={*modal}
                on_change={on_modal_change}
                on_notice={on_notice}
            />
        </div>
    }
}
