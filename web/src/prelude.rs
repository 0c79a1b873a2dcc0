pub use crate::{
	IdParam,
	auth::Auth,
	config::Config,
	components::*,
	page::*,
	directory::{avatar_url, HttpDirectory, MemberDirectory},
	state::{MembersPager, PageRequest},
};
