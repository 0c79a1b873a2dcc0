use leptos::prelude::*;

#[component]
pub fn Breadcrumb(
	/// where the "<<" link leads, hidden when unset
	#[prop(optional, into)]
	back: Option<String>,
	children: Children,
) -> impl IntoView {
	view! {
		<div class="tl-header w-100 center" >
			{back.map(|href| view! {
				<a class="breadcrumb mr-1" href=href ><b>"<<"</b></a>
			})}
			<b>{crate::NAME}</b>" :: "{children()}
		</div>
	}
}
