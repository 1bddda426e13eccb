use yew::prelude::*;

use crate::hooks::use_notifications::Notification;

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    pub notification: Option<Notification>,
    pub on_dismiss: Callback<()>,
}

/// Renders the single active notification, if any. Clicking the toast
/// dismisses it early; otherwise the owning hook clears it on its timer.
#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    let Some(notification) = props.notification.as_ref() else {
        return html! {};
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={notification.kind.css_class()} role="status" {onclick}>
            {&notification.message}
        </div>
    }
}
