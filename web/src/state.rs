use crate::{
	directory::{FetchError, MemberDirectory},
	model::{GroupMember, MembersPage},
	pager::{PageWindow, GROUP_MEMBERS_PAGE_SIZE},
};

/// what to do with the loading indicator when a page fails to load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
	/// clear loading and show the error
	#[default]
	Report,
	/// keep spinning forever, only log the error
	Stall,
}

/// a page fetch that was issued, tagged so late answers can be recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
	pub seq: u64,
	pub page: u32,
	pub per_page: u32,
}

impl PageRequest {
	pub async fn send<D: MemberDirectory>(&self, group_id: &str, directory: &D) -> Result<MembersPage, FetchError> {
		directory.fetch_page(group_id, self.page, self.per_page).await
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct MembersPager {
	page: u32,
	/// page the current members belong to
	loaded_page: u32,
	loading: bool,
	members: Vec<GroupMember>,
	total: u64,
	error: Option<FetchError>,
	issued: u64,
	policy: FailurePolicy,
}

impl MembersPager {
	pub fn new(policy: FailurePolicy) -> Self {
		MembersPager {
			page: 0,
			loaded_page: 0,
			loading: true,
			members: Vec::new(),
			total: 0,
			error: None,
			issued: 0,
			policy,
		}
	}

	pub fn page(&self) -> u32 {
		self.page
	}

	pub fn loading(&self) -> bool {
		self.loading
	}

	pub fn members(&self) -> &[GroupMember] {
		&self.members
	}

	pub fn total(&self) -> u64 {
		self.total
	}

	pub fn error(&self) -> Option<&FetchError> {
		self.error.as_ref()
	}

	pub fn window(&self) -> PageWindow {
		PageWindow::new(self.page, self.total)
	}

	fn request(&mut self, page: u32) -> PageRequest {
		self.issued += 1;
		self.page = page;
		self.loading = true;
		PageRequest { seq: self.issued, page, per_page: GROUP_MEMBERS_PAGE_SIZE }
	}

	pub fn initialize(&mut self) -> PageRequest {
		self.request(0)
	}

	/// fresh pager plus the single request a newly mounted view sends
	pub fn mount(policy: FailurePolicy) -> (Self, PageRequest) {
		let mut pager = MembersPager::new(policy);
		let first = pager.initialize();
		(pager, first)
	}

	pub fn previous(&mut self) -> Option<PageRequest> {
		if self.window().first_page() { return None }
		Some(self.request(self.page - 1))
	}

	pub fn next(&mut self) -> Option<PageRequest> {
		if self.window().last_page() { return None }
		Some(self.request(self.page + 1))
	}

	/// apply a finished fetch, returns false if a newer request superseded it
	pub fn complete(&mut self, request: PageRequest, result: Result<MembersPage, FetchError>) -> bool {
		if request.seq != self.issued {
			tracing::debug!("dropping stale members page {} (request #{}, latest #{})", request.page, request.seq, self.issued);
			return false;
		}

		match result {
			Ok(page) => {
				self.loaded_page = request.page;
				self.members = page.members;
				self.total = page.total;
				self.error = None;
				self.loading = false;
			},
			Err(e) => {
				tracing::error!("failed loading members page {}: {e}", request.page);
				if self.policy == FailurePolicy::Report {
					self.error = Some(e);
					// counter and buttons must keep describing the rows still on screen
					self.page = self.loaded_page;
					self.loading = false;
				}
			},
		}

		true
	}
}
