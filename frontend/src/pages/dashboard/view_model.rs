use crate::api::{ApiClient, ApiError, DashboardSummary};
use crate::pages::dashboard::repository;
use leptos::{ev::MouseEvent, *};

/// Resource key for the summary fetch. Bumping `token` re-runs the load; a
/// superseded in-flight fetch can no longer write its result over the newer
/// one because only the latest key's value is applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SummaryQuery {
    pub token: u32,
}

impl SummaryQuery {
    pub fn new() -> Self {
        Self { token: 0 }
    }

    pub fn refresh(self) -> Self {
        Self {
            token: self.token.wrapping_add(1),
        }
    }
}

impl Default for SummaryQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct DashboardViewModel {
    pub summary_query: RwSignal<SummaryQuery>,
    pub summary_resource: Resource<SummaryQuery, Result<DashboardSummary, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

        let summary_query = create_rw_signal(SummaryQuery::new());
        let summary_resource = create_resource(
            move || summary_query.get(),
            move |_query| {
                let api = api.clone();
                async move { repository::fetch_summary(&api).await }
            },
        );

        Self {
            summary_query,
            summary_resource,
        }
    }

    pub fn on_refresh(&self) -> impl Fn(MouseEvent) {
        let summary_query = self.summary_query;
        move |_ev| {
            summary_query.update(|query| *query = query.refresh());
        }
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
