#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GroupMember {
	pub id: String,

	#[serde(default)]
	pub username: String,

	#[serde(default)]
	pub first_name: String,

	#[serde(default)]
	pub last_name: String,

	#[serde(default)]
	pub email: String,

	/// milliseconds timestamp, only used to bust the avatar cache
	#[serde(default)]
	pub last_picture_update: i64,
}

impl GroupMember {
	pub fn display_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}
}

/// one page of a group member listing, as returned by the members endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MembersPage {
	#[serde(default)]
	pub members: Vec<GroupMember>,

	#[serde(rename = "total_member_count", default)]
	pub total: u64,
}

#[cfg(test)]
mod test {
	use super::{GroupMember, MembersPage};

	#[test]
	fn members_page_decodes_server_payload() {
		let payload = serde_json::json!({
			"members": [
				{
					"id": "u1abc",
					"username": "alice",
					"first_name": "Alice",
					"last_name": "Liddell",
					"email": "alice@example.com",
					"last_picture_update": 1555000000000i64,
					"roles": "system_user",
				},
				{
					"id": "u2def",
					"username": "bob",
				},
			],
			"total_member_count": 45,
		});

		let page : MembersPage = serde_json::from_value(payload).expect("valid payload");

		assert_eq!(page.total, 45);
		assert_eq!(page.members.len(), 2);
		assert_eq!(page.members[0].display_name(), "Alice Liddell");
		assert_eq!(page.members[0].last_picture_update, 1555000000000);
		assert_eq!(page.members[1].email, "");
		assert_eq!(page.members[1].last_picture_update, 0);
	}

	#[test]
	fn members_page_without_members_key_is_empty() {
		let page : MembersPage = serde_json::from_value(serde_json::json!({ "total_member_count": 0 }))
			.expect("valid payload");
		assert!(page.members.is_empty());
		assert_eq!(page.total, 0);
	}

	#[test]
	fn display_name_keeps_separator_even_with_missing_parts() {
		let member = GroupMember {
			id: "x".into(),
			username: "nobody".into(),
			first_name: String::new(),
			last_name: "Solo".into(),
			email: String::new(),
			last_picture_update: 0,
		};
		assert_eq!(member.display_name(), " Solo");
	}
}
