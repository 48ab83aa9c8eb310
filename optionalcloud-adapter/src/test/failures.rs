use std::collections::BTreeMap;
use std::io::ErrorKind;

use expect_test::expect;
use serde_json::json;

use crate::test::{invoke, program, testdata, unexecutable_program};
use crate::{Adapter, Convention, Error};

#[tokio::test]
async fn missing_program_fails_to_launch() {
	let invocation = invoke(testdata("missing.sh"), Convention::StatusAware, &json!({})).await;

	let err = invocation.outcome.unwrap_err();
	match &err {
		Error::LaunchFailed { cause, .. } => assert_eq!(cause.kind(), ErrorKind::NotFound),
		other => panic!("expected a launch failure, got {other:?}"),
	}
	assert!(err.to_string().starts_with("500:could not launch "));
	assert_eq!(err.status(), Some(500));
	// Nothing ran, so there is nothing to report from stderr either.
	assert_eq!(invocation.logs, "");
}

#[tokio::test]
async fn unexecutable_program_fails_to_launch() {
	let err = invoke(
		unexecutable_program("not_executable.sh"),
		Convention::PassThrough,
		&json!({}),
	)
	.await
	.outcome
	.unwrap_err();

	match &err {
		Error::LaunchFailed { cause, .. } => {
			assert_eq!(cause.kind(), ErrorKind::PermissionDenied)
		}
		other => panic!("expected a launch failure, got {other:?}"),
	}
}

#[tokio::test]
async fn non_zero_exit_ignores_output() {
	for convention in [Convention::StatusAware, Convention::PassThrough] {
		let path = program("exit_one.sh");
		let invocation = invoke(path.clone(), convention, &json!({"id": 1})).await;

		let err = invocation.outcome.unwrap_err();
		assert!(matches!(err, Error::NonZeroExit { .. }), "{err:?}");
		assert_eq!(
			err.to_string(),
			format!("500:{} exited unsuccessfully (exit status: 1)", path.display()),
		);
		assert_eq!(invocation.logs, "stderr: database unreachable\n");
	}
}

#[tokio::test]
async fn garbage_output_is_malformed() {
	let err = invoke(program("garbage.sh"), Convention::StatusAware, &json!({}))
		.await
		.outcome
		.unwrap_err();

	expect!["500:malformed output from external program: expected value at line 1 column 1"]
		.assert_eq(&err.to_string());
}

#[tokio::test]
async fn unserializable_event_is_an_error() {
	// JSON object keys must be strings.
	let event = BTreeMap::from([((1, 2), "tuple key")]);
	let adapter = Adapter::new(
		program("echo.sh"),
		Convention::PassThrough,
		optionalcloud_terminal::Logger::new_writer(tokio::io::sink()),
	);

	let err = adapter.invoke(&event).await.unwrap_err();

	assert!(matches!(err, Error::EventSerialization { .. }), "{err:?}");
	expect!["500:could not serialize event: key must be a string"].assert_eq(&err.to_string());
}

#[tokio::test]
async fn interrupted_feed_still_reports_stderr() {
	use std::os::unix::process::ExitStatusExt;
	use std::process::ExitStatus;
	use tokio::io::{duplex, AsyncReadExt};

	use crate::ProcessResult;

	let (writer, mut reader) = duplex(4096);
	let logger = optionalcloud_terminal::Logger::new_writer(writer);
	let adapter = Adapter::new(program("echo.sh"), Convention::StatusAware, logger.clone());
	let result = ProcessResult {
		status: ExitStatus::from_raw(0),
		stdout: br#"{"status":200,"body-json":"ok"}"#.to_vec(),
		stderr: b"read half of the event\n".to_vec(),
		feed_error: Some(std::io::Error::other("connection reset")),
	};

	let err = adapter.conclude(result).unwrap_err();
	logger.close().await.unwrap();
	let mut logs = String::new();
	reader.read_to_string(&mut logs).await.unwrap();

	expect!["500:failed to feed event to external program: connection reset"]
		.assert_eq(&err.to_string());
	assert_eq!(logs, "stderr: read half of the event\n");
}
