use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Error, message: message.into() }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationProps) -> Html {
    // Re-arm the dismiss timer whenever the notice changes; dropping the
    // previous handle cancels it.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |notice: &Option<Notice>| {
                let timeout = notice
                    .as_ref()
                    .map(|_| Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(())));
                move || drop(timeout)
            },
            props.notice.clone(),
        );
    }

    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let kind_class = match notice.kind {
        NoticeKind::Success => "toast-success",
        NoticeKind::Error => "toast-error",
    };

    html! {
        <div class={classes!("toast", kind_class)}>
            <style>
                {r#"
                .toast {
                    position: fixed;
                    top: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 100;
                    max-width: 420px;
                    padding: 0.75rem 1.25rem;
                    border-radius: 8px;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                    font-size: 0.95rem;
                    color: #fff;
                }
                .toast-success {
                    background: #16a34a;
                }
                .toast-error {
                    background: #dc2626;
                }
                "#}
            </style>
            { &notice.message }
        </div>
    }
}
