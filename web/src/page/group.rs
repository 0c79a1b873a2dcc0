use leptos::{either::Either, prelude::*};
use leptos_router::hooks::use_params;
use crate::prelude::*;

#[component]
pub fn GroupDetailsPage() -> impl IntoView {
	let params = use_params::<IdParam>();
	let auth = use_context::<Auth>().expect("missing auth context");
	let config = use_context::<Signal<Config>>().expect("missing config context");
	view! {
		<div>
			<Breadcrumb back="/">groups::members</Breadcrumb>
			{move || match params.get().ok().and_then(|x| x.id) {
				None => Either::Left(view! { <p class="center"><code>"missing group id"</code></p> }),
				Some(id) => {
					let directory = HttpDirectory::new(config.with_untracked(|c| c.api_base.clone()), auth);
					Either::Right(view! { <GroupMembersView group_id=id directory=directory /> })
				},
			}}
		</div>
	}
}
