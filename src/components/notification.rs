use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: AttrValue,
    #[prop_or(NotificationKind::Success)]
    pub kind: NotificationKind,
    pub on_close: Callback<()>,
}

/// Toast that slides in from the corner and dismisses itself after a few
/// seconds, or immediately when clicked.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(4000, move || {
                    on_close.emit(());
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let class = match props.kind {
        NotificationKind::Success => "toast toast-success",
        NotificationKind::Error => "toast toast-error",
    };

    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div {class} {onclick} role="status">
            <span class="toast-icon">
                { if props.kind == NotificationKind::Success { "✓" } else { "!" } }
            </span>
            <span class="toast-message">{ props.message.clone() }</span>
        </div>
    }
}
