mod app;
mod auth;
mod config;
mod components;
mod page;
mod prelude;

pub mod model;
pub mod pager;
pub mod directory;
pub mod state;

pub use app::App;
pub use auth::Auth;
pub use config::Config;
pub use components::GroupMembersView;

use leptos_router::params::Params;

pub const NAME: &str = "groupadmin";

#[derive(Debug, Clone, PartialEq, leptos::Params)]
pub struct IdParam {
	id: Option<String>,
}
