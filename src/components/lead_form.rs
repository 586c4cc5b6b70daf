use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::webhook::LeadRequestData;
use crate::utils::sanitize::sanitize_phone_input;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    /// Sanitized URL captured on the previous step; carried into the payload.
    pub url: String,
    pub is_loading: bool,
    pub on_submit: Callback<LeadRequestData>,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let form = use_state(|| LeadRequestData {
        url: props.url.clone(),
        ..Default::default()
    });

    let update_field = |apply: fn(&mut LeadRequestData, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_first_name = update_field(|f, v| f.first_name = v);
    let on_last_name = update_field(|f, v| f.last_name = v);
    let on_email = update_field(|f, v| f.email = v);
    let on_company = update_field(|f, v| f.company = v);
    let on_phone = update_field(|f, v| f.phone = sanitize_phone_input(&v));

    let on_role = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.role = select.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let is_loading = props.is_loading;
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if is_loading {
                return;
            }
            on_submit.emit((*form).clone());
        })
    };

    html! {
        <form class="lead-form" onsubmit={onsubmit}>
            <style>
                {r#"
                .lead-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    text-align: left;
                }
                .lead-form .field-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .lead-form label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin-bottom: 0.25rem;
                }
                .lead-form input,
                .lead-form select {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font-size: 1rem;
                }
                .lead-form input:disabled,
                .lead-form select:disabled {
                    background: #f3f4f6;
                }
                .lead-form .field-hint {
                    font-size: 0.75rem;
                    color: #6b7280;
                    margin-top: 0.25rem;
                }
                .lead-form .submit-button {
                    width: 100%;
                    background: #f39018;
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    font-size: 1rem;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: background-color 0.2s;
                }
                .lead-form .submit-button:hover:not(:disabled) {
                    background: #e08416;
                }
                .lead-form .submit-button:disabled {
                    opacity: 0.5;
                    cursor: default;
                }
                .lead-form .form-footnote {
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .button-spinner {
                    display: inline-block;
                    width: 1.25rem;
                    height: 1.25rem;
                    margin-right: 0.5rem;
                    border: 2px solid transparent;
                    border-bottom-color: #fff;
                    border-radius: 50%;
                    animation: lead-spin 1s linear infinite;
                }
                @keyframes lead-spin {
                    to { transform: rotate(360deg); }
                }
                @media (max-width: 640px) {
                    .lead-form .field-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>

            <div class="field-row">
                <div>
                    <label for="prenom">{"Prénom *"}</label>
                    <input
                        type="text"
                        id="prenom"
                        value={form.first_name.clone()}
                        oninput={on_first_name}
                        required=true
                        minlength="2"
                        maxlength="50"
                        disabled={props.is_loading}
                    />
                </div>
                <div>
                    <label for="nom">{"Nom *"}</label>
                    <input
                        type="text"
                        id="nom"
                        value={form.last_name.clone()}
                        oninput={on_last_name}
                        required=true
                        minlength="2"
                        maxlength="50"
                        disabled={props.is_loading}
                    />
                </div>
            </div>

            <div>
                <label for="email">{"Email *"}</label>
                <input
                    type="email"
                    id="email"
                    value={form.email.clone()}
                    oninput={on_email}
                    required=true
                    disabled={props.is_loading}
                />
            </div>

            <div>
                <label for="telephone">{"Numéro de téléphone *"}</label>
                <input
                    type="tel"
                    id="telephone"
                    value={form.phone.clone()}
                    oninput={on_phone}
                    required=true
                    pattern="[0-9]{10}"
                    inputmode="numeric"
                    placeholder="0612345678"
                    disabled={props.is_loading}
                />
                <p class="field-hint">{"Format: 10 chiffres (ex: 0612345678)"}</p>
            </div>

            <div>
                <label for="societe">{"Nom de la société *"}</label>
                <input
                    type="text"
                    id="societe"
                    value={form.company.clone()}
                    oninput={on_company}
                    required=true
                    disabled={props.is_loading}
                />
            </div>

            <div>
                <label for="role">{"Rôle *"}</label>
                <select
                    id="role"
                    onchange={on_role}
                    required=true
                    disabled={props.is_loading}
                >
                    <option value="" selected={form.role.is_empty()}>{"Sélectionnez votre rôle"}</option>
                    <option value="CEO" selected={form.role == "CEO"}>{"PDG / CEO"}</option>
                    <option value="Marketing" selected={form.role == "Marketing"}>{"Responsable Marketing"}</option>
                    <option value="Digital" selected={form.role == "Digital"}>{"Responsable Digital"}</option>
                    <option value="Commercial" selected={form.role == "Commercial"}>{"Commercial"}</option>
                    <option value="Autre" selected={form.role == "Autre"}>{"Autre"}</option>
                </select>
            </div>

            <button type="submit" class="submit-button" disabled={props.is_loading}>
                {
                    if props.is_loading {
                        html! {
                            <>
                                <span class="button-spinner"></span>
                                {"Analyse en cours..."}
                            </>
                        }
                    } else {
                        html! { {"Lancer l'audit SEO"} }
                    }
                }
            </button>

            <p class="form-footnote">
                {"* Champs obligatoires"}
                <br />
                <br />
                {"En soumettant ce formulaire, vous acceptez que vos données soient traitées conformément à notre politique de confidentialité."}
            </p>
        </form>
    }
}
