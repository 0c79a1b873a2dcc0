use leptos::prelude::*;
use crate::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
	view! {
		<div>
			<Breadcrumb>about</Breadcrumb>
			<div class="mt-s mb-s" >
				<p><code>{crate::NAME}</code>" lists the members of groups synchronized from your AD/LDAP directory"</p>
				<p>"open "<code>"/admin_console/user_management/groups/<group id>"</code>" to browse a group, 20 members per page"</p>
			</div>
		</div>
	}
}
