use leptos::*;
use leptos_router::*;

use crate::{
    components::toast::ToastProvider,
    pages::{AttendancePage, DashboardPage, EmployeesPage},
};

pub const ROUTE_PATHS: &[&str] = &["/dashboard", "/employees", "/attendance"];

pub const DEFAULT_ROUTE: &str = "/dashboard";

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <ToastProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path=DEFAULT_ROUTE/> }/>
                    <Route path="/dashboard" view=DashboardPage/>
                    <Route path="/employees" view=EmployeesPage/>
                    <Route path="/attendance" view=AttendancePage/>
                    <Route path="/*any" view=|| view! { <Redirect path=DEFAULT_ROUTE/> }/>
                </Routes>
            </Router>
        </ToastProvider>
    }
}
