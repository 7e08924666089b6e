pub mod dashboard;
pub mod not_found;

use dioxus::prelude::*;

use dashboard::AgentDashboard;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    AgentDashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
