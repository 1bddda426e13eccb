use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// A transient message shown to the user after an action completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Error => "notification error",
        }
    }
}

pub struct UseNotificationsResult {
    /// The notification currently on screen, if any.
    pub current: Option<Notification>,
    /// Show a message. A new call while one is showing replaces it.
    pub show: Callback<(String, NotificationKind)>,
    pub dismiss: Callback<()>,
}

/// Single-slot notification state with auto-dismiss.
///
/// Messages appear immediately and clear after `duration_ms` regardless of
/// kind. There is no queue: last write wins, and the generation counter
/// keeps a stale timer from dismissing a newer message.
#[hook]
pub fn use_notifications(duration_ms: u32) -> UseNotificationsResult {
    let current = use_state(|| Option::<Notification>::None);
    let generation = use_mut_ref(|| 0u64);

    let show = {
        let current = current.clone();
        let generation = generation.clone();

        use_callback(duration_ms, move |(message, kind): (String, NotificationKind), duration_ms| {
            *generation.borrow_mut() += 1;
            let my_generation = *generation.borrow();
            current.set(Some(Notification { message, kind }));

            let current = current.clone();
            let generation = generation.clone();
            let duration_ms = *duration_ms;
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                if *generation.borrow() == my_generation {
                    current.set(None);
                }
            });
        })
    };

    let dismiss = {
        let current = current.clone();
        let generation = generation.clone();

        use_callback((), move |_, _| {
            *generation.borrow_mut() += 1;
            current.set(None);
        })
    };

    UseNotificationsResult {
        current: (*current).clone(),
        show,
        dismiss,
    }
}
