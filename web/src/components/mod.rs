mod members;
pub use members::GroupMembersView;

mod row;
pub use row::GroupUsersRow;

mod navigation;
pub use navigation::Breadcrumb;

use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(into)] active: Signal<bool>) -> impl IntoView {
	view! {
		<div class="group-users-loading" class:active=move || active.get() >
			<i class="fa fa-spinner fa-pulse fa-2x"></i>
		</div>
	}
}
