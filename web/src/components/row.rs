use leptos::prelude::*;
use crate::prelude::*;

#[component]
pub fn GroupUsersRow(
	username: String,
	display_name: String,
	email: String,
	user_id: String,
	last_picture_update: i64,
) -> impl IntoView {
	let config = use_context::<Signal<Config>>().expect("missing config context");
	let avatar = config.with_untracked(|c| avatar_url(&c.api_base, &user_id, last_picture_update));
	view! {
		<div class="group-users-row">
			<table class="align w-100">
				<tr>
					<td rowspan="2" style="width: 3em">
						<img class="avatar avatar-circle" src={avatar} title={user_id} />
					</td>
					<td><b>{display_name}</b></td>
				</tr>
				<tr>
					<td class="top">
						<small>"@"{username}" - "{email}</small>
					</td>
				</tr>
			</table>
		</div>
	}
}
