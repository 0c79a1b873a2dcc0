use std::future::Future;

use crate::{model::MembersPage, Auth};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
	#[error("failed sending request: {0}")]
	Request(String),

	#[error("server replied with status {0}")]
	Status(u16),

	#[error("invalid response body: {0}")]
	Body(String),
}

// reqwest::Error is not Clone, so we flatten it before it reaches any signal
impl From<reqwest::Error> for FetchError {
	fn from(e: reqwest::Error) -> Self {
		if let Some(status) = e.status() {
			FetchError::Status(status.as_u16())
		} else if e.is_decode() {
			FetchError::Body(e.to_string())
		} else {
			FetchError::Request(e.to_string())
		}
	}
}

/// source of group member pages: asking for a page and reading it back are one call
pub trait MemberDirectory {
	fn fetch_page(&self, group_id: &str, page: u32, per_page: u32) -> impl Future<Output = Result<MembersPage, FetchError>>;
}

pub fn members_url(base: &str, group_id: &str, page: u32, per_page: u32) -> String {
	format!("{}/api/v4/groups/{group_id}/members?page={page}&per_page={per_page}", base.trim_end_matches('/'))
}

pub fn avatar_url(base: &str, user_id: &str, last_picture_update: i64) -> String {
	format!("{}/api/v4/users/{user_id}/image?_={last_picture_update}", base.trim_end_matches('/'))
}

pub struct Http;

impl Http {
	pub async fn fetch<T: serde::de::DeserializeOwned>(url: &str, auth: Auth) -> reqwest::Result<T> {
		let mut req = reqwest::Client::new()
			.get(url)
			.header("Accept", "application/json");

		if auth.present() {
			req = req.header("Authorization", format!("Bearer {}", auth.token()));
		}

		req.send()
			.await?
			.error_for_status()?
			.json::<T>()
			.await
	}
}

/// members endpoint of the admin api, authenticated with the session token cookie
#[derive(Debug, Clone)]
pub struct HttpDirectory {
	base: String,
	auth: Auth,
}

impl HttpDirectory {
	pub fn new(base: String, auth: Auth) -> Self {
		HttpDirectory { base, auth }
	}
}

impl MemberDirectory for HttpDirectory {
	async fn fetch_page(&self, group_id: &str, page: u32, per_page: u32) -> Result<MembersPage, FetchError> {
		let url = members_url(&self.base, group_id, page, per_page);
		tracing::debug!("fetching members page {page} of group {group_id}");
		Ok(Http::fetch::<MembersPage>(&url, self.auth).await?)
	}
}
