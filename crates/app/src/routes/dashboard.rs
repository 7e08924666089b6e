use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCar, LdMessageCircle};
use dioxus_free_icons::Icon;
use shared_types::{paging, AppError, Transaction, UserProfile};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, Card, CardContent, Input, Pagination, Skeleton,
    ToastOptions,
};

use crate::components::get_rc_modal::GetRcModal;
use crate::components::header::Header;
use crate::download;
use crate::format_helpers::{format_date_human, format_time_human};

const SAMPLE_CSV: Asset = asset!("/assets/sample-vrn.csv");

/// Fixed support contact — opens WhatsApp with a pre-filled top-up request.
const WHATSAPP_URL: &str = "https://api.whatsapp.com/send?phone=9269666646&text=Hello,%20Please%20add%20funds%20in%20my%20Wallet%20for%20RC";

/// A lookup may start once the trimmed input has at least 4 characters.
fn vehicle_number_ok(input: &str) -> bool {
    input.trim().len() >= 4
}

/// Message shown when the file picker closes without a selection.
const MISSING_FILE_MESSAGE: &str = "Please select a CSV file.";

/// First selected file, or the message to show when there is none. Runs
/// before any bytes are read or sent upstream.
fn first_selected<T>(mut files: Vec<T>) -> Result<T, &'static str> {
    if files.is_empty() {
        Err(MISSING_FILE_MESSAGE)
    } else {
        Ok(files.remove(0))
    }
}

/// Shared loading flag: a bulk upload in flight, or a dashboard fetch that
/// has not settled. Either fetch outcome counts as settled.
fn busy(uploading: bool, dashboard_settled: bool) -> bool {
    uploading || !dashboard_settled
}

/// Whether a finished single lookup refreshes the dashboard. Always true —
/// the wallet may have been debited even when the lookup errored.
fn refresh_after_lookup(_succeeded: bool) -> bool {
    true
}

/// Agent dashboard: profile summary, single and bulk RC lookup, and the
/// paginated transaction history.
///
/// The backend is the source of truth — `dashboard.restart()` is the single
/// refresh entry point, invoked after a completed single lookup and after a
/// completed bulk download. Pagination is pure client-side slicing.
#[component]
pub fn AgentDashboard() -> Element {
    let toast = use_toast();
    let mut vehicle_number = use_signal(String::new);
    let mut show_rc_modal = use_signal(|| false);
    let mut uploading = use_signal(|| false);
    let page = use_signal(|| 1usize);

    let mut dashboard =
        use_resource(move || async move { server::api::get_user_dashboard_data().await });

    // Advisory only — inputs stay enabled while a fetch is in flight.
    let loading = busy(uploading(), dashboard.read().is_some());

    let open_rc_modal = move |_: MouseEvent| {
        if !vehicle_number_ok(&vehicle_number.read()) {
            toast.error("Please enter vehicle number".to_string(), ToastOptions::new());
            return;
        }
        show_rc_modal.set(true);
    };

    let handle_bulk_upload = move |evt: FormEvent| async move {
        let file = match first_selected(evt.files()) {
            Ok(file) => file,
            Err(msg) => {
                toast.error(msg.to_string(), ToastOptions::new());
                return;
            }
        };

        uploading.set(true);
        match file.read_bytes().await {
            Ok(bytes) => {
                use base64::Engine as _;
                let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                match server::api::get_bulk_rc(file.name(), encoded).await {
                    Ok(archive) => {
                        let file_name =
                            format!("Bulk_RCs_{}.zip", chrono::Utc::now().timestamp_millis());
                        download::save_file(&file_name, "application/zip", &archive);
                        toast.success(
                            "Bulk RC Downloaded Successfully!".to_string(),
                            ToastOptions::new(),
                        );
                        dashboard.restart();
                    }
                    Err(e) => {
                        toast.error(
                            format!(
                                "Failed to download RC: {}",
                                AppError::friendly_message(&e.to_string())
                            ),
                            ToastOptions::new(),
                        );
                        // The backend saw the upload; wallet state may have
                        // moved even though the download failed.
                        dashboard.restart();
                    }
                }
            }
            Err(_) => {
                toast.error(
                    "Failed to read the selected file.".to_string(),
                    ToastOptions::new(),
                );
            }
        }
        uploading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            Header {}

            div { class: "dashboard-grid",
                match &*dashboard.read() {
                    Some(Ok(data)) => rsx! {
                        ProfileCard { profile: data.user_data.clone() }
                    },
                    Some(Err(_)) => rsx! {
                        ProfileCard { profile: None }
                    },
                    None => rsx! {
                        Card {
                            CardContent {
                                for _ in 0..3 {
                                    Skeleton { style: "height: 1.5rem; width: 100%;" }
                                }
                            }
                        }
                    },
                }

                Card {
                    CardContent {
                        div { class: "lookup-row",
                            Icon { icon: LdCar, width: 40, height: 40 }
                            Input {
                                placeholder: "Enter Vehicle Number",
                                value: vehicle_number(),
                                on_input: move |e: FormEvent| {
                                    vehicle_number.set(e.value().to_uppercase())
                                },
                            }
                            Button {
                                onclick: open_rc_modal,
                                if loading { "Loading..." } else { "Get RC" }
                            }
                        }
                        div { class: "bulk-row",
                            h3 { class: "bulk-title", "For Bulk RC" }
                            a {
                                class: "button",
                                "data-style": "secondary",
                                href: SAMPLE_CSV,
                                download: "sample-vrn.csv",
                                "Sample CSV"
                            }
                            label {
                                r#for: "bulk-rc-input",
                                class: "button bulk-upload-label",
                                "data-style": "primary",
                                "Upload CSV"
                            }
                            input {
                                id: "bulk-rc-input",
                                r#type: "file",
                                accept: ".csv",
                                class: "bulk-upload-input",
                                onchange: handle_bulk_upload,
                            }
                        }
                    }
                }
            }

            div { class: "transactions-section",
                h3 { class: "transactions-title", "Recent Transactions" }
                match &*dashboard.read() {
                    Some(Ok(data)) => rsx! {
                        TransactionList { transactions: data.transactions.clone(), page }
                    },
                    // Load failures leave the previous (empty) list in place;
                    // the next refresh replaces everything wholesale.
                    Some(Err(_)) => rsx! {
                        TransactionList { transactions: Vec::<Transaction>::new(), page }
                    },
                    None => rsx! {
                        for _ in 0..5 {
                            Skeleton { style: "height: 3rem; width: 100%; margin-bottom: 0.5rem;" }
                        }
                    },
                }
            }

            div { class: "whatsapp-fab",
                a {
                    href: WHATSAPP_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    Icon { icon: LdMessageCircle, width: 36, height: 36 }
                }
            }
        }

        if show_rc_modal() {
            GetRcModal {
                vehicle_number: vehicle_number.read().clone(),
                on_close: move |_| show_rc_modal.set(false),
                on_result: move |succeeded: bool| {
                    if refresh_after_lookup(succeeded) {
                        dashboard.restart();
                    }
                },
            }
        }
    }
}

/// Profile summary card. Missing fields degrade to "NA" (name, balance) or
/// blank (mobile) rather than hiding the card.
#[component]
fn ProfileCard(profile: Option<UserProfile>) -> Element {
    let name = profile
        .as_ref()
        .and_then(|p| p.full_name.clone())
        .unwrap_or_else(|| "NA".to_string());
    let mobile = profile
        .as_ref()
        .and_then(|p| p.mobile_number.clone())
        .unwrap_or_default();
    let balance = profile
        .as_ref()
        .and_then(|p| p.wallet_balance)
        .map(|b| b.to_string())
        .unwrap_or_else(|| "NA".to_string());

    rsx! {
        Card {
            CardContent {
                p { strong { "Name" } ": {name}" }
                p { strong { "Mob No." } ": +91-{mobile}" }
                p { strong { "Wallet Balance" } ": {balance} Rs" }
            }
        }
    }
}

/// One page of the wallet ledger plus the pager.
#[component]
fn TransactionList(transactions: Vec<Transaction>, page: Signal<usize>) -> Element {
    let total = paging::total_pages(transactions.len(), paging::ITEMS_PER_PAGE);
    // Clamp before slicing so the rows and the pager label agree when a
    // refetch shrinks the list below the current page.
    let current = (*page.read()).clamp(1, total.max(1));
    let visible: Vec<Transaction> =
        paging::page_slice(&transactions, current, paging::ITEMS_PER_PAGE).to_vec();

    rsx! {
        div { class: "transactions-list",
            for (i, txn) in visible.into_iter().enumerate() {
                TransactionRow { txn, striped: i % 2 == 0 }
            }
        }
        Pagination { total_pages: total, page }
    }
}

/// A single ledger row. Stripes alternate by position; debits get the red
/// border treatment.
#[component]
fn TransactionRow(txn: Transaction, striped: bool) -> Element {
    let is_debit = txn.transaction_type.is_debit();

    rsx! {
        div {
            class: "transaction-row",
            "data-striped": if striped { "true" } else { "false" },
            "data-debit": if is_debit { "true" } else { "false" },
            Icon { icon: LdCar, width: 20, height: 20 }
            div { class: "transaction-fields",
                div { class: "transaction-vehicle", "{txn.vehicle_number}" }
                div { class: "transaction-date", {format_date_human(&txn.created_at)} }
                div { class: "transaction-time", {format_time_human(&txn.created_at)} }
                div { class: "transaction-amount", "{txn.amount}" }
                Badge {
                    variant: if is_debit { BadgeVariant::Destructive } else { BadgeVariant::Primary },
                    {txn.transaction_type.label()}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::TransactionType;

    #[test]
    fn short_vehicle_numbers_are_rejected() {
        assert!(!vehicle_number_ok(""));
        assert!(!vehicle_number_ok("RJ1"));
        assert!(!vehicle_number_ok("  AB  "));
    }

    #[test]
    fn four_or_more_characters_pass() {
        assert!(vehicle_number_ok("RJ14"));
        assert!(vehicle_number_ok("RJ14AB1234"));
        assert!(vehicle_number_ok("  RJ14AB1234  "));
    }

    #[test]
    fn empty_selection_is_rejected_before_any_upload() {
        assert_eq!(first_selected(Vec::<u8>::new()), Err(MISSING_FILE_MESSAGE));
        assert_eq!(first_selected(vec![7u8, 8]), Ok(7));
    }

    #[test]
    fn loading_clears_once_upload_and_fetch_settle() {
        assert!(busy(true, true));
        assert!(busy(false, false));
        // Settled means Some(_) regardless of Ok or Err inside.
        assert!(!busy(false, true));
    }

    #[test]
    fn failed_lookups_still_refresh_the_dashboard() {
        assert!(refresh_after_lookup(false));
        assert!(refresh_after_lookup(true));
    }

    #[component]
    fn ShrunkenLedger() -> Element {
        // Page 3 of a list that now only fills one page.
        let page = use_signal(|| 3usize);
        let transactions: Vec<Transaction> = (0..5)
            .map(|i| Transaction {
                vehicle_number: format!("RJ14AB100{i}"),
                amount: 20.0,
                transaction_type: TransactionType::Debit,
                created_at: "2026-08-01T10:15:00Z".to_string(),
            })
            .collect();
        rsx! {
            TransactionList { transactions, page }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn out_of_range_page_falls_back_to_first() {
        let html = render(ShrunkenLedger);
        assert!(html.contains("RJ14AB1000"), "{html}");
        assert!(html.contains("Page 1 of 1"), "{html}");
    }
}
