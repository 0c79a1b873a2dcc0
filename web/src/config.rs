use crate::state::FailurePolicy;

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, serde_default::DefaultFromSerde)]
pub struct Config {
	/// api root, leave empty to talk to the same origin serving the console
	#[serde(default)]
	pub api_base: String,

	#[serde(default)]
	pub failure_policy: FailurePolicy,

	#[serde_inline_default("/admin_console/authentication/ldap".to_string())]
	pub ldap_settings_path: String,
}
