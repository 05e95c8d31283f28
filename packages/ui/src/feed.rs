//! Complaint feed: list, search, and the client-side upvote counter.

use api::{Complaint, ComplaintsApi};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, ErrorBanner, Input};
use crate::icons::{FaArrowUp, FaMagnifyingGlass};
use crate::session::use_api;
use crate::Icon;

const LOAD_ERROR: &str = "could not load complaints";

/// Which backend list a feed instance renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Citizen,
    Authority,
}

/// View state for one complaint list.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    pub kind: FeedKind,
    pub complaints: Vec<Complaint>,
    pub error: Option<String>,
    pub loading: bool,
}

impl FeedState {
    pub fn new(kind: FeedKind) -> Self {
        Self {
            kind,
            complaints: Vec::new(),
            error: None,
            loading: false,
        }
    }

    /// Load the full list. A failure leaves the list empty with a generic
    /// load error; there are no partial results and no automatic retry.
    pub async fn load<C: ComplaintsApi>(&mut self, api: &C) {
        let result = match self.kind {
            FeedKind::Citizen => api.feed().await,
            FeedKind::Authority => api.gov_feed().await,
        };
        match result {
            Ok(complaints) => {
                self.error = None;
                self.complaints = complaints;
            }
            Err(e) => {
                tracing::error!("feed load failed: {e}");
                self.complaints.clear();
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    /// Search by free-text query; an empty query reloads the full list.
    pub async fn search<C: ComplaintsApi>(&mut self, api: &C, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return self.load(api).await;
        }
        match api.search(query).await {
            Ok(complaints) => {
                self.error = None;
                self.complaints = complaints;
            }
            Err(e) => {
                tracing::error!("complaint search failed: {e}");
                self.complaints.clear();
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    /// Bump the local upvote counter. Deliberately not synchronized to the
    /// backend; a reload loses the increment.
    pub fn upvote(&mut self, complaint_id: u32) {
        if let Some(complaint) = self.complaints.iter_mut().find(|c| c.id == complaint_id) {
            complaint.upvotes += 1;
        }
    }

    /// The most upvoted complaints of the loaded list, local counters
    /// included. Complaints without a single upvote never trend.
    pub fn trending(&self, limit: usize) -> Vec<Complaint> {
        let mut ranked: Vec<Complaint> = self
            .complaints
            .iter()
            .filter(|c| c.upvotes > 0)
            .cloned()
            .collect();
        ranked.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
        ranked.truncate(limit);
        ranked
    }
}

/// Search box shared by the citizen feed and the assignment console.
#[component]
pub fn FeedSearchBar(on_search: EventHandler<String>) -> Element {
    let mut query = use_signal(String::new);

    rsx! {
        form {
            class: "feed-search",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_search.call(query());
            },
            Input {
                class: "feed-search-input",
                placeholder: "Search complaints",
                value: query(),
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
            Button {
                variant: ButtonVariant::Outline,
                r#type: "submit",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            }
        }
    }
}

/// One complaint card. The upvote control is only rendered when a handler is
/// supplied, so the authority console can reuse the card without it.
#[component]
pub fn ComplaintCard(
    complaint: Complaint,
    #[props(default)] on_upvote: Option<EventHandler<u32>>,
) -> Element {
    let id = complaint.id;
    rsx! {
        article {
            class: "complaint-card",
            header {
                class: "complaint-card-header",
                span { class: "complaint-author", "{complaint.author}" }
                span { class: "complaint-date", "{complaint.posted_at}" }
            }
            p { class: "complaint-content", "{complaint.content}" }
            footer {
                class: "complaint-card-footer",
                span { class: "complaint-address", "{complaint.address}" }
                if let Some(ref assigned) = complaint.assigned_to {
                    span { class: "complaint-assigned", "assigned to {assigned}" }
                }
                if let Some(handler) = on_upvote {
                    button {
                        class: "upvote-button",
                        title: "Upvote",
                        onclick: move |_| handler.call(id),
                        Icon { icon: FaArrowUp, width: 12, height: 12 }
                        span { " {complaint.upvotes}" }
                    }
                } else {
                    span { class: "upvote-count", "{complaint.upvotes} upvotes" }
                }
            }
        }
    }
}

/// The citizen complaint feed with search and local upvoting.
#[component]
pub fn ComplaintFeed() -> Element {
    let api = use_api();
    let mut feed = use_signal(|| FeedState::new(FeedKind::Citizen));

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

    let on_search = move |query: String| {
        let api = api.clone();
        spawn(async move {
            feed.write().loading = true;
            let mut f = feed();
            f.search(&api, &query).await;
            feed.set(f);
        });
    };

    let trending = feed().trending(3);

    rsx! {
        section {
            class: "feed",
            FeedSearchBar { on_search: on_search }

            if let Some(err) = feed().error {
                ErrorBanner { message: err }
            }

            if !trending.is_empty() {
                aside {
                    class: "trending",
                    h2 { class: "trending-title", "Trending" }
                    ol {
                        for complaint in trending {
                            li {
                                key: "{complaint.id}",
                                class: "trending-item",
                                span { "{complaint.content}" }
                                span { class: "trending-count", "{complaint.upvotes}" }
                            }
                        }
                    }
                }
            }
            if feed().loading {
                p { class: "feed-status", "Loading complaints..." }
            } else if feed().complaints.is_empty() && feed().error.is_none() {
                p { class: "feed-status", "No complaints yet." }
            }

            for complaint in feed().complaints {
                ComplaintCard {
                    key: "{complaint.id}",
                    complaint: complaint.clone(),
                    on_upvote: move |id: u32| feed.write().upvote(id),
                }
            }
        }
    }
}
