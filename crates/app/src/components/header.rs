use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogContent, AlertDialogDescription,
    AlertDialogRoot, AlertDialogTitle, ToastOptions,
};

/// Title bar with the logout control.
///
/// Logout does not navigate or clear any local state afterwards — the
/// session lives in a backend cookie and invalidation happens there. Open
/// question for the product owner; kept as observed.
#[component]
pub fn Header() -> Element {
    let toast = use_toast();
    let mut logging_out = use_signal(|| false);
    let mut logout_error = use_signal(|| None::<String>);

    let handle_logout = move |_: MouseEvent| async move {
        logging_out.set(true);
        match server::api::user_logout().await {
            Ok(()) => {
                toast.success("Logged out successfully!".to_string(), ToastOptions::new());
            }
            Err(e) => {
                logout_error.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        logging_out.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./header.css") }

        div { class: "header-bar",
            div { class: "header-spacer" }
            div { class: "header-title", "Get RC" }
            div { class: "header-actions",
                button {
                    class: "header-logout",
                    onclick: handle_logout,
                    if logging_out() { "Logging out..." } else { "Logout" }
                }
            }
        }

        // Logout failures block, unlike every other error surface in the app.
        AlertDialogRoot {
            open: logout_error().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    logout_error.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Logout failed" }
                AlertDialogDescription {
                    {logout_error().unwrap_or_default()}
                }
                AlertDialogActions {
                    AlertDialogAction {
                        on_click: move |_| logout_error.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}
