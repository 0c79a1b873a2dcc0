pub const GROUP_MEMBERS_PAGE_SIZE : u32 = 20;

/// the slice of a listing currently on screen, derived from page index and total count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
	pub page: u32,
	pub per_page: u32,
	pub total: u64,
}

impl PageWindow {
	pub fn new(page: u32, total: u64) -> Self {
		PageWindow { page, per_page: GROUP_MEMBERS_PAGE_SIZE, total }
	}

	fn offset(&self) -> u64 {
		self.page as u64 * self.per_page as u64
	}

	/// 1-based position of the first item on this page
	pub fn start_count(&self) -> u64 {
		self.offset() + 1
	}

	/// 1-based position of the last item on this page, clamped to total
	pub fn end_count(&self) -> u64 {
		std::cmp::min(self.offset() + self.per_page as u64, self.total)
	}

	pub fn first_page(&self) -> bool {
		self.page == 0
	}

	pub fn last_page(&self) -> bool {
		self.end_count() == self.total
	}

	pub fn counter(&self) -> String {
		format!("{} - {} of {}", self.start_count(), self.end_count(), self.total)
	}
}
