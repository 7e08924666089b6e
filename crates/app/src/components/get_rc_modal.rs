use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    use_toast, Button, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    ToastOptions,
};

use crate::download;

/// Confirmation dialog for a single-RC purchase.
///
/// Owns its own backend call; reports the outcome to the dashboard through
/// `on_result` and signals `on_close` when dismissed.
#[component]
pub fn GetRcModal(
    vehicle_number: String,
    on_close: EventHandler<()>,
    on_result: EventHandler<bool>,
) -> Element {
    let toast = use_toast();
    let mut purchasing = use_signal(|| false);

    let vehicle_for_confirm = vehicle_number.clone();
    let handle_confirm = move |_: MouseEvent| {
        let vehicle = vehicle_for_confirm.clone();
        spawn(async move {
            purchasing.set(true);
            match server::api::get_rc(vehicle).await {
                Ok(doc) => {
                    download::save_file(
                        &format!("RC_{}.pdf", doc.vehicle_number),
                        "application/pdf",
                        &doc.document_base64,
                    );
                    toast.success("RC downloaded successfully!".to_string(), ToastOptions::new());
                    on_result.call(true);
                    on_close.call(());
                }
                Err(e) => {
                    toast.error(
                        format!(
                            "Failed to get RC: {}",
                            AppError::friendly_message(&e.to_string())
                        ),
                        ToastOptions::new(),
                    );
                    on_result.call(false);
                }
            }
            purchasing.set(false);
        });
    };

    rsx! {
        DialogRoot {
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Get RC for {vehicle_number}" }
                DialogDescription {
                    "This will debit your wallet for one RC lookup. Continue?"
                }
                div { class: "rc-modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        onclick: handle_confirm,
                        if purchasing() { "Fetching..." } else { "Confirm" }
                    }
                }
            }
        }
    }
}
