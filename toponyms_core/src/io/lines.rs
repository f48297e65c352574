use super::RecordStream;
use crate::JsonObject;
use anyhow::{Context, Result};
use futures::{StreamExt, stream};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Parses one line of a record source.
///
/// Blank lines, lines that are not JSON and JSON values that are not objects yield `None`.
pub fn parse_record_line(line: &[u8], line_number: usize) -> Option<JsonObject> {
	let line = line.trim_ascii();
	if line.is_empty() {
		return None;
	}
	match serde_json::from_slice::<Value>(line) {
		Ok(Value::Object(object)) => Some(object),
		Ok(_) => {
			log::trace!("skipping line {line_number}: not a JSON object");
			None
		}
		Err(err) => {
			log::trace!("skipping line {line_number}: {err}");
			None
		}
	}
}

/// Streams the records of a line-delimited JSON reader in line order.
///
/// Malformed lines are skipped. A failing read ends the stream with the error.
pub fn read_record_lines<'a, R>(reader: R, name: String) -> RecordStream<'a>
where
	R: AsyncBufRead + Unpin + Send + 'a,
{
	let segments = reader.split(b'\n');

	stream::unfold(Some((segments, 0usize)), move |state| {
		let name = name.clone();
		async move {
			let (mut segments, mut line_number) = state?;
			loop {
				line_number += 1;
				match segments.next_segment().await {
					Ok(Some(line)) => {
						if let Some(object) = parse_record_line(&line, line_number) {
							return Some((Ok(object), Some((segments, line_number))));
						}
					}
					Ok(None) => return None,
					Err(err) => {
						let result: Result<JsonObject> =
							Err(err).with_context(|| format!("failed to read line {line_number} of {name}"));
						return Some((result, None));
					}
				}
			}
		}
	})
	.boxed()
}
