use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The response object a status-aware program writes to stdout.
///
/// Only [`Self::status`] and [`Self::body`] decide the outcome.
/// The header map (`header` or `headers`) is never decoded: a successful outcome forwards the
/// program's raw JSON rather than this struct, so headers and any other fields pass through as written.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResponseEnvelope {
	pub status: i64,

	/// May be absent or null.
	#[serde(rename = "body-json", default)]
	pub body: Value,
}

impl ResponseEnvelope {
	/// Statuses 200 through 399 land in bucket 1.
	pub fn bucket(&self) -> i64 {
		self.status / 200
	}

	pub fn is_success(&self) -> bool {
		self.bucket() == 1
	}

	/// The body as it appears in an error message: strings verbatim, anything else as compact JSON.
	pub fn body_text(&self) -> String {
		match &self.body {
			Value::String(text) => text.clone(),
			other => other.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use expect_test::expect;
	use serde_json::json;

	use super::*;

	fn envelope(value: Value) -> ResponseEnvelope {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn bucket_boundaries() {
		let cases = [
			(-1, false),
			(0, false),
			(199, false),
			(200, true),
			(299, true),
			(302, true),
			(399, true),
			(400, false),
			(404, false),
			(500, false),
		];
		for (status, success) in cases {
			let env = envelope(json!({ "status": status }));
			assert_eq!(env.is_success(), success, "status {status}");
		}
	}

	#[test]
	fn headers_do_not_affect_decoding() {
		let plain = envelope(json!({"status": 302, "body-json": "moved"}));
		for extra in [
			json!({"header": {"Location": "/a"}}),
			json!({"headers": {"Location": "/a"}}),
			json!({"header": null}),
			json!({"header": {"X-Count": 3}}),
			json!({"header": {}, "headers": {"Location": "/a"}}),
		] {
			let mut response = json!({"status": 302, "body-json": "moved"});
			response
				.as_object_mut()
				.unwrap()
				.extend(extra.as_object().unwrap().clone());
			assert_eq!(envelope(response), plain);
		}
	}

	#[test]
	fn body_text_coercion() {
		let text = |body: Value| envelope(json!({"status": 500, "body-json": body})).body_text();

		expect!["not found"].assert_eq(&text(json!("not found")));
		expect!["42"].assert_eq(&text(json!(42)));
		expect!["null"].assert_eq(&text(Value::Null));
		expect![[r#"{"err":"boom","codes":[1,2]}"#]]
			.assert_eq(&text(json!({"err": "boom", "codes": [1, 2]})));
		expect!["null"].assert_eq(&envelope(json!({"status": 500})).body_text());
	}

	#[test]
	fn status_must_be_an_integer() {
		assert!(serde_json::from_value::<ResponseEnvelope>(json!({"status": "200"})).is_err());
		assert!(serde_json::from_value::<ResponseEnvelope>(json!({"status": 200.5})).is_err());
		assert!(serde_json::from_value::<ResponseEnvelope>(json!({"body-json": "x"})).is_err());
	}
}
