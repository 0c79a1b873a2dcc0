use leptos::{either::Either, prelude::*};
use crate::prelude::*;

const LDAP_NOTICE : &str = "AD/LDAP Connector is configured to sync and manage this group and its users.";
const LDAP_LINK_LABEL : &str = "Click here to view";

/// what the pagination footer shows for the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterState {
	/// no rows: bare placeholder, no counter, no buttons
	Empty,
	Pager {
		counter: String,
		previous_disabled: bool,
		next_disabled: bool,
	},
}

impl FooterState {
	pub fn of(pager: &MembersPager) -> Self {
		if pager.members().is_empty() {
			return FooterState::Empty;
		}
		let window = pager.window();
		FooterState::Pager {
			counter: window.counter(),
			previous_disabled: window.first_page(),
			next_disabled: window.last_page(),
		}
	}
}

/// one page of a group's members, with previous/next navigation
#[component]
pub fn GroupMembersView<D>(
	group_id: String,
	directory: D,
) -> impl IntoView
where
	D: MemberDirectory + Clone + Send + Sync + 'static
{
	let config = use_context::<Signal<Config>>().expect("missing config context");
	let policy = config.with_untracked(|c| c.failure_policy);

	let (pager, first) = MembersPager::mount(policy);
	let state = RwSignal::new(pager);
	let target = StoredValue::new((group_id, directory));

	let load = move |request: PageRequest| {
		let (group_id, directory) = target.get_value();
		leptos::task::spawn_local(async move {
			let res = request.send(&group_id, &directory).await;
			// view may be gone by now, in which case there is nothing to update
			let _ = state.try_update(|s| s.complete(request, res));
		});
	};

	let navigate = move |step: fn(&mut MembersPager) -> Option<PageRequest>| {
		if let Some(request) = state.try_update(step).flatten() {
			load(request);
		}
	};

	load(first);

	view! {
		<div class="group-users">
			<div class="group-users--header">
				{LDAP_NOTICE}" "
				<a href=move || config.with(|c| c.ldap_settings_path.clone()) >{LDAP_LINK_LABEL}</a>
			</div>
			<div class="group-users--body">
				<Loader active=Signal::derive(move || state.with(|s| s.loading())) />
				{move || {
					let members = state.with(|s| s.members().to_vec());
					if members.is_empty() {
						return Either::Left(view! {
							<div class="group-users-empty">"No users found"</div>
						});
					}
					Either::Right(
						members
							.into_iter()
							.map(|m| view! {
								<GroupUsersRow
									username=m.username.clone()
									display_name=m.display_name()
									email=m.email.clone()
									user_id=m.id.clone()
									last_picture_update=m.last_picture_update
								/>
							})
							.collect_view()
					)
				}}
			</div>
			{move || state.with(|s| s.error().map(|e| e.to_string())).map(|e| view! {
				<p class="group-users-error center"><code class="color">{e}</code></p>
			})}
			{move || {
				let FooterState::Pager { counter, previous_disabled, next_disabled } = state.with(FooterState::of) else {
					return Either::Left(view! { <div class="group-users--footer empty"></div> });
				};
				Either::Right(view! {
					<div class="group-users--footer">
						<div class="counter">{counter}</div>
						<button
							type="button"
							class="btn btn-link prev"
							class:disabled=previous_disabled
							disabled=previous_disabled
							on:click=move |ev| {
								ev.prevent_default();
								if !previous_disabled { navigate(MembersPager::previous) }
							}
						>
							<i class="fa fa-chevron-left" title="Previous Icon"></i>
						</button>
						<button
							type="button"
							class="btn btn-link next"
							class:disabled=next_disabled
							disabled=next_disabled
							on:click=move |ev| {
								ev.prevent_default();
								if !next_disabled { navigate(MembersPager::next) }
							}
						>
							<i class="fa fa-chevron-right" title="Next Icon"></i>
						</button>
					</div>
				})
			}}
		</div>
	}
}
