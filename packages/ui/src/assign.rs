//! Government-authority assignment console: the authority feed plus a modal
//! that assigns a complaint to a field worker.

use api::{Complaint, ComplaintsApi, FieldWorker};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, ErrorBanner};
use crate::feed::{ComplaintCard, FeedKind, FeedSearchBar, FeedState};
use crate::modal::ModalOverlay;
use crate::session::use_api;

const WORKERS_ERROR: &str = "could not load field workers";
const ASSIGN_ERROR: &str = "could not assign complaint";

/// The modal's transient state, scoped to its open duration.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentModal {
    pub complaint_id: u32,
    pub workers: Vec<FieldWorker>,
    /// Pending `<select>` value; empty until the user picks a worker.
    pub selected: String,
    pub error: Option<String>,
}

/// Assignment state for the console. At most one modal at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignState {
    pub modal: Option<AssignmentModal>,
    pub error: Option<String>,
    pub loading: bool,
}

impl AssignState {
    /// Fetch the eligible workers for a complaint and open the modal.
    pub async fn open<C: ComplaintsApi>(&mut self, api: &C, complaint_id: u32) {
        self.error = None;
        match api.available_workers(Some(complaint_id)).await {
            Ok(workers) => {
                self.modal = Some(AssignmentModal {
                    complaint_id,
                    workers,
                    selected: String::new(),
                    error: None,
                });
            }
            Err(e) => {
                tracing::error!("worker list failed: {e}");
                self.error = Some(WORKERS_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    pub fn select(&mut self, worker_id: &str) {
        if let Some(modal) = &mut self.modal {
            modal.selected = worker_id.to_string();
        }
    }

    /// The confirm action stays disabled until a worker is picked.
    pub fn can_confirm(&self) -> bool {
        self.modal
            .as_ref()
            .is_some_and(|modal| !modal.selected.is_empty())
    }

    pub fn close(&mut self) {
        self.modal = None;
    }

    /// Post the assignment, then refetch the feed and close the modal whether
    /// or not the refetch succeeded. A failure in the assignment call itself
    /// keeps the modal open for retry.
    pub async fn confirm<C: ComplaintsApi>(&mut self, api: &C, feed: &mut FeedState) {
        let Some(modal) = &mut self.modal else {
            self.loading = false;
            return;
        };
        if modal.selected.is_empty() {
            self.loading = false;
            return;
        }
        match api.assign(modal.complaint_id, &modal.selected).await {
            Ok(()) => {
                feed.load(api).await;
                self.modal = None;
            }
            Err(e) => {
                tracing::error!("assignment failed: {e}");
                modal.error = Some(ASSIGN_ERROR.to_string());
            }
        }
        self.loading = false;
    }
}

/// The authority's complaint list with per-complaint assign buttons.
#[component]
pub fn AssignmentConsole() -> Element {
    let api = use_api();
    let mut feed = use_signal(|| FeedState::new(FeedKind::Authority));
    let mut assign = use_signal(AssignState::default);

    let loader_api = api.clone();
    let _ = use_resource(move || {
        let api = loader_api.clone();
        async move {
            feed.write().loading = true;
            let mut f = feed();
            f.load(&api).await;
            feed.set(f);
        }
    });

    let search_api = api.clone();
    let on_search = move |query: String| {
        let api = search_api.clone();
        spawn(async move {
            feed.write().loading = true;
            let mut f = feed();
            f.search(&api, &query).await;
            feed.set(f);
        });
    };

    let open_api = api.clone();
    // Copy handle, the row list hands it to every ConsoleRow.
    let on_open = use_callback(move |complaint_id: u32| {
        let api = open_api.clone();
        spawn(async move {
            assign.write().loading = true;
            let mut a = assign();
            a.open(&api, complaint_id).await;
            assign.set(a);
        });
    });

    let on_confirm = move |_| {
        let api = api.clone();
        spawn(async move {
            assign.write().loading = true;
            let mut a = assign();
            let mut f = feed();
            a.confirm(&api, &mut f).await;
            assign.set(a);
            feed.set(f);
        });
    };

    rsx! {
        section {
            class: "feed feed--console",
            FeedSearchBar { on_search: on_search }

            if let Some(err) = feed().error {
                ErrorBanner { message: err }
            }
            if let Some(err) = assign().error {
                ErrorBanner { message: err }
            }
            if feed().loading {
                p { class: "feed-status", "Loading complaints..." }
            }

            for complaint in feed().complaints {
                ConsoleRow {
                    key: "{complaint.id}",
                    complaint: complaint.clone(),
                    on_assign: on_open,
                }
            }
        }

        if let Some(modal) = assign().modal {
            ModalOverlay {
                on_close: move |_| assign.write().close(),
                div {
                    class: "p-6",
                    h2 { class: "modal-title", "Assign to field worker" }

                    if let Some(err) = modal.error.clone() {
                        ErrorBanner { message: err }
                    }

                    select {
                        class: "worker-select",
                        value: "{modal.selected}",
                        onchange: move |evt| assign.write().select(&evt.value()),
                        option { value: "", "Pick a field worker" }
                        for worker in &modal.workers {
                            option {
                                key: "{worker.id}",
                                value: "{worker.id}",
                                "{worker.username}"
                            }
                        }
                    }

                    div {
                        class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: !assign().can_confirm() || assign().loading,
                            onclick: on_confirm,
                            if assign().loading { "Assigning..." } else { "Assign" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| assign.write().close(),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConsoleRow(complaint: Complaint, on_assign: EventHandler<u32>) -> Element {
    let id = complaint.id;
    rsx! {
        div {
            class: "console-row",
            ComplaintCard { complaint: complaint.clone() }
            Button {
                variant: ButtonVariant::Primary,
                class: "console-assign",
                disabled: complaint.assigned_to.is_some(),
                onclick: move |_| on_assign.call(id),
                if complaint.assigned_to.is_some() { "Assigned" } else { "Assign" }
            }
        }
    }
}
