use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::Notice;
use crate::services::webhook::{
    send_callback_request, validate_callback, CallbackRequestData,
};
use crate::utils::sanitize::sanitize_phone_input;

/// Modal lifecycle. `Submitting` doubles as the in-flight guard: dismissal
/// and re-submission are both ignored while a request is outstanding.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum CallbackModalState {
    Closed,
    Open,
    Submitting,
}

#[derive(Properties, PartialEq)]
pub struct CallbackModalProps {
    pub state: CallbackModalState,
    pub on_change: Callback<CallbackModalState>,
    pub on_notice: Callback<Notice>,
}

#[function_component(CallbackModal)]
pub fn callback_modal(props: &CallbackModalProps) -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);

    if props.state == CallbackModalState::Closed {
        return html! {};
    }

    let is_submitting = props.state == CallbackModalState::Submitting;

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(sanitize_phone_input(&input.value()));
        })
    };

    let on_close = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_change.emit(CallbackModalState::Closed);
        })
    };

    // Backdrop click closes too; the dialog itself swallows the event.
    let on_dialog_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let on_change = props.on_change.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if is_submitting {
                return;
            }

            let data = CallbackRequestData {
                name: (*name).trim().to_string(),
                phone: (*phone).clone(),
            };

            if let Err(err) = validate_callback(&data) {
                on_notice.emit(Notice::error(err.user_message()));
                return;
            }

            on_change.emit(CallbackModalState::Submitting);

            let name = name.clone();
            let phone = phone.clone();
            let on_change = on_change.clone();
            let on_notice = on_notice.clone();
            spawn_local(async move {
                match send_callback_request(&data).await {
                    Ok(()) => {
                        on_notice.emit(Notice::success(
                            "Votre demande a été enregistrée. Nous vous recontacterons rapidement.",
                        ));
                        name.set(String::new());
                        phone.set(String::new());
                        on_change.emit(CallbackModalState::Closed);
                    }
                    Err(err) => {
                        // fields stay put so the visitor can correct and retry
                        on_notice.emit(Notice::error(err.user_message()));
                        on_change.emit(CallbackModalState::Open);
                    }
                }
            });
        })
    };

    html! {
        <div class="modal-overlay" onclick={(!is_submitting).then_some(on_close.clone())}>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                }
                .modal-dialog {
                    background: #fff;
                    border-radius: 8px;
                    padding: 1.5rem;
                    max-width: 28rem;
                    width: 100%;
                    margin: 0 1rem;
                }
                .modal-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .modal-header h2 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #111827;
                    margin: 0;
                }
                .modal-close {
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    line-height: 1;
                    color: #6b7280;
                    cursor: pointer;
                }
                .modal-close:hover {
                    color: #374151;
                }
                .modal-close:disabled {
                    opacity: 0.5;
                }
                .modal-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .modal-form label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin-bottom: 0.25rem;
                }
                .modal-form input {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font-size: 1rem;
                }
                .modal-form input:disabled {
                    background: #f3f4f6;
                }
                .modal-form .field-hint {
                    font-size: 0.75rem;
                    color: #6b7280;
                    margin-top: 0.25rem;
                }
                .modal-form .submit-button {
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
                .modal-form .submit-button:hover:not(:disabled) {
                    background: #e08416;
                }
                .modal-form .submit-button:disabled {
                    opacity: 0.5;
                    cursor: default;
                }
                .modal-form .form-footnote {
                    font-size: 0.75rem;
                    color: #6b7280;
                    margin: 0;
                }
                .modal-form .button-spinner {
                    display: inline-block;
                    width: 1.25rem;
                    height: 1.25rem;
                    margin-right: 0.5rem;
                    border: 2px solid transparent;
                    border-bottom-color: #fff;
                    border-radius: 50%;
                    animation: modal-spin 1s linear infinite;
                }
                @keyframes modal-spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
            <div class="modal-dialog" onclick={on_dialog_click}>
                <div class="modal-header">
                    <h2>{"Être rappelé"}</h2>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Fermer"
                        onclick={on_close}
                        disabled={is_submitting}
                    >
                        {"×"}
                    </button>
                </div>

                <form class="modal-form" onsubmit={onsubmit}>
                    <div>
                        <label for="callback-name">{"Nom *"}</label>
                        <input
                            type="text"
                            id="callback-name"
                            value={(*name).clone()}
                            oninput={on_name}
                            required=true
                            minlength="2"
                            maxlength="50"
                            placeholder="Votre nom"
                            disabled={is_submitting}
                        />
                    </div>

                    <div>
                        <label for="callback-phone">{"Numéro de téléphone *"}</label>
                        <input
                            type="tel"
                            id="callback-phone"
                            value={(*phone).clone()}
                            oninput={on_phone}
                            required=true
                            pattern="[0-9]{10}"
                            inputmode="numeric"
                            placeholder="0612345678"
                            disabled={is_submitting}
                        />
                        <p class="field-hint">{"Format: 10 chiffres (ex: 0612345678)"}</p>
                    </div>

                    <button type="submit" class="submit-button" disabled={is_submitting}>
                        {
                            if is_submitting {
                                html! {
                                    <>
                                        <span class="button-spinner"></span>
                                        {"Envoi en cours..."}
                                    </>
                                }
                            } else {
                                html! { {"Envoyer"} }
                            }
                        }
                    </button>

                    <p class="form-footnote">{"* Champs obligatoires"}</p>
                </form>
            </div>
        </div>
    }
}
