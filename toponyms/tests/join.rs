use predicates::str;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::fs;
use test_utilities::{get_temp_output, get_testdata, toponyms_cmd};

fn read_relations(path: &std::path::Path) -> Vec<Value> {
	fs::read_to_string(path)
		.unwrap()
		.lines()
		.map(|line| serde_json::from_str(line).unwrap())
		.collect()
}

fn relation(from: &str, to: &str) -> Value {
	json!({
		"type": "relation",
		"obj": {
			"from": format!("building-inspector/{from}"),
			"to": format!("building-inspector/{to}"),
			"type": "st:sameAs"
		}
	})
}

fn expected() -> Vec<Value> {
	vec![
		relation("t-100", "a4f1c2"),
		relation("t-101", "a4f1c3"),
		relation("t-101", "a4f1c4"),
		relation("t-103", "b7e210"),
	]
}

#[test]
fn join_testdata() {
	let (_dir, output) = get_temp_output("relations.ndjson");
	let input = get_testdata("building-inspector.objects.ndjson");

	toponyms_cmd()
		.args(["join", input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::is_empty())
		.stderr(str::contains("finished: 4 relations from 5 toponyms"));

	assert_eq!(read_relations(&output), expected());
}

#[test]
fn join_buffered_gives_the_same_relations() {
	let (_dir, output) = get_temp_output("relations.ndjson");
	let input = get_testdata("building-inspector.objects.ndjson");

	toponyms_cmd()
		.args(["join", "--buffered", input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.success();

	assert_eq!(read_relations(&output), expected());
}

#[test]
fn missing_index_is_logged_not_fatal() {
	let (_dir, output) = get_temp_output("relations.ndjson");
	let input = get_testdata("building-inspector.objects.ndjson");

	toponyms_cmd()
		.args(["join", "-v", input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.success()
		.stderr(str::contains("No geospatial index found for map layer nypl-1860"));
}

#[test]
fn missing_input_fails() {
	let (dir, output) = get_temp_output("relations.ndjson");
	let input = dir.path().join("missing.ndjson");

	toponyms_cmd()
		.args(["join", input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.failure()
		.stderr(str::contains("does not exist"));
}
