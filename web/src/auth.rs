use leptos::prelude::*;

/// session token as found in the `token` cookie, shared through context
#[derive(Debug, Clone, Copy)]
pub struct Auth {
	pub token: Signal<Option<String>>,
}

impl Auth {
	pub fn token(&self) -> String {
		self.token.get_untracked().unwrap_or_default()
	}

	pub fn present(&self) -> bool {
		self.token.get_untracked().is_some_and(|x| !x.is_empty())
	}
}
