//! Events as produced by API Gateway's "method request passthrough" mapping template.
//!
//! The adapter forwards any event untouched; these types exist for callers that need to
//! build or inspect such events, like the local invoker.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GatewayRequest {
	#[serde(rename = "body-json", default)]
	pub body: Value,

	#[serde(default)]
	pub params: GatewayParams,

	#[serde(rename = "stage-variables", default)]
	pub stage_variables: IndexMap<String, String>,

	#[serde(default)]
	pub context: GatewayContext,
}

/// Request parameters, each keyed by name.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GatewayParams {
	#[serde(default)]
	pub path: IndexMap<String, String>,

	#[serde(rename = "querystring", default)]
	pub query: IndexMap<String, String>,

	#[serde(default)]
	pub header: IndexMap<String, String>,
}

/// Endpoint and caller information.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GatewayContext {
	#[serde(rename = "http-method", default)]
	pub method: String,

	#[serde(rename = "resource-path", default)]
	pub resource_path: String,

	#[serde(default)]
	pub stage: String,

	#[serde(rename = "source-ip", default)]
	pub source_ip: String,
}

impl GatewayRequest {
	/// Method and resource path joined the way the program's route table keys them, e.g. `GET/users`.
	pub fn route(&self) -> String {
		format!("{}{}", self.context.method, self.context.resource_path)
	}
}

#[cfg(test)]
mod tests {
	use expect_test::expect;
	use serde_json::json;

	use super::*;

	#[test]
	fn serializes_with_template_names() {
		let mut request = GatewayRequest {
			body: json!({"name": "ada"}),
			context: GatewayContext {
				method: "POST".into(),
				resource_path: "/users".into(),
				stage: "local".into(),
				source_ip: "127.0.0.1".into(),
			},
			..Default::default()
		};
		request.params.query.insert("dry-run".into(), "1".into());
		request
			.stage_variables
			.insert("DBName".into(), "users".into());

		expect![[r#"
            {
              "body-json": {
                "name": "ada"
              },
              "params": {
                "path": {},
                "querystring": {
                  "dry-run": "1"
                },
                "header": {}
              },
              "stage-variables": {
                "DBName": "users"
              },
              "context": {
                "http-method": "POST",
                "resource-path": "/users",
                "stage": "local",
                "source-ip": "127.0.0.1"
              }
            }"#]]
		.assert_eq(&serde_json::to_string_pretty(&request).unwrap());
		assert_eq!(request.route(), "POST/users");
	}

	#[test]
	fn missing_sections_default() {
		let request: GatewayRequest =
			serde_json::from_value(json!({"context": {"http-method": "GET"}})).unwrap();
		assert_eq!(request.body, Value::Null);
		assert!(request.params.header.is_empty());
		assert_eq!(request.route(), "GET");
	}
}
