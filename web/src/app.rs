use leptos::prelude::*;
use leptos_router::{components::{Route, Router, Routes}, path};
use leptos_use::{storage::use_local_storage, use_cookie};
use codee::string::{FromToStringCodec, JsonSerdeCodec};
use crate::prelude::*;

#[component]
pub fn App() -> impl IntoView {
	let (token, _set_token) = use_cookie::<String, FromToStringCodec>("token");
	let (config, _set_config, _) = use_local_storage::<crate::Config, JsonSerdeCodec>("config");

	provide_context(Auth { token });
	provide_context(config);

	if token.get_untracked().is_none() {
		tracing::warn!("no session token cookie, admin api calls will be unauthenticated");
	}

	view! {
		<nav class="w-100 mt-1 mb-1 pb-s">
			<code class="color ml-3" ><a class="app-title" href="/" >{crate::NAME}</a></code>
			<small class="ml-1 mr-1 hidden-on-tiny" >"user management :: groups"</small>
		</nav>
		<hr class="sep" />
		<div class="container mt-2 pt-2" >
			<Router>
				<main>
					<Routes fallback=move || view! {
						<div class="center">
							<h3>nothing to see here!</h3>
							<p><a href="/"><button type="button">back to root</button></a></p>
						</div>
					}>
						<Route path=path!("/") view=AboutPage />
						<Route path=path!("/admin_console/user_management/groups/:id") view=GroupDetailsPage />
					</Routes>
				</main>
			</Router>
		</div>
	}
}
