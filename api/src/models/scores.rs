use {
	crate::{
		util::{optional_integer, optional_number, optional_text},
		Error, Result,
	},
	leaderboard_db::{Mode, NewScore},
	serde::{Deserialize, Serialize},
};

/// Longest name we store, in characters.
pub const MAX_NAME_LENGTH: usize = 16;

/// Stored instead of a name that is empty after trimming.
pub const FALLBACK_NAME: &str = "Hunter";

/// Body of `POST /api/scores`, exactly as the client sent it.
#[derive(Debug, Default, Deserialize)]
pub struct ScoreSubmission {
	#[serde(default, deserialize_with = "optional_text")]
	pub name: Option<String>,
	#[serde(default, deserialize_with = "optional_text")]
	pub mode: Option<String>,
	#[serde(default, deserialize_with = "optional_number")]
	pub time_ms: Option<f64>,
	#[serde(default, deserialize_with = "optional_text")]
	pub time_str: Option<String>,
	#[serde(default, deserialize_with = "optional_integer")]
	pub moves: Option<i32>,
}

/// Response of `POST /api/scores`.
#[derive(Debug, Serialize)]
pub struct CreatedScore {
	pub id: i32,
}

/// Trims, cuts to [`MAX_NAME_LENGTH`] characters and falls back to
/// [`FALLBACK_NAME`] if nothing is left.
pub fn normalize_name(name: &str) -> String {
	let name = name
		.trim()
		.chars()
		.take(MAX_NAME_LENGTH)
		.collect::<String>();

	if name.is_empty() {
		String::from(FALLBACK_NAME)
	} else {
		name
	}
}

/// Rounds to the nearest millisecond, halves going up.
pub fn normalize_time(time_ms: f64) -> Result<i64> {
	if !time_ms.is_finite() || time_ms < 0.0 || time_ms > i64::MAX as f64 {
		return Err(Error::InvalidTime);
	}

	Ok(time_ms.round() as i64)
}

fn non_empty(field: Option<String>) -> Option<String> {
	field.filter(|value| !value.is_empty())
}

impl TryFrom<ScoreSubmission> for NewScore {
	type Error = Error;

	fn try_from(value: ScoreSubmission) -> Result<Self> {
		let (Some(name), Some(mode), Some(time_ms), Some(time_str), Some(moves)) = (
			non_empty(value.name),
			non_empty(value.mode),
			value.time_ms,
			non_empty(value.time_str),
			value.moves,
		) else {
			return Err(Error::MissingFields);
		};

		Ok(Self {
			name: normalize_name(&name),
			mode: mode.parse::<Mode>()?,
			time_ms: normalize_time(time_ms)?,
			time_str,
			moves,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn submission() -> ScoreSubmission {
		ScoreSubmission {
			name: Some(String::from("  Ada Lovelace123456  ")),
			mode: Some(String::from("idol")),
			time_ms: Some(12345.6),
			time_str: Some(String::from("00:12.3")),
			moves: Some(7),
		}
	}

	#[test]
	fn normalizes_a_full_submission() {
		let score = NewScore::try_from(submission()).unwrap();
		assert_eq!(
			score,
			NewScore {
				name: String::from("Ada Lovelace1234"),
				mode: Mode::Idol,
				time_ms: 12346,
				time_str: String::from("00:12.3"),
				moves: 7,
			}
		);
	}

	#[test]
	fn every_field_is_required() {
		let cases: [fn(&mut ScoreSubmission); 5] = [
			|s| s.name = None,
			|s| s.mode = None,
			|s| s.time_ms = None,
			|s| s.time_str = None,
			|s| s.moves = None,
		];

		for clear in cases {
			let mut submission = submission();
			clear(&mut submission);
			assert_eq!(NewScore::try_from(submission), Err(Error::MissingFields));
		}
	}

	#[test]
	fn empty_strings_count_as_missing() {
		let cases: [fn(&mut ScoreSubmission); 3] = [
			|s| s.name = Some(String::new()),
			|s| s.mode = Some(String::new()),
			|s| s.time_str = Some(String::new()),
		];

		for clear in cases {
			let mut submission = submission();
			clear(&mut submission);
			assert_eq!(NewScore::try_from(submission), Err(Error::MissingFields));
		}
	}

	#[test]
	fn zero_counts_as_present() {
		let score = NewScore::try_from(ScoreSubmission {
			time_ms: Some(0.0),
			moves: Some(0),
			..submission()
		})
		.unwrap();

		assert_eq!(score.time_ms, 0);
		assert_eq!(score.moves, 0);
	}

	#[test]
	fn missing_wins_over_invalid_mode() {
		let result = NewScore::try_from(ScoreSubmission {
			mode: Some(String::from("nightmare")),
			moves: None,
			..submission()
		});
		assert_eq!(result, Err(Error::MissingFields));
	}

	#[test]
	fn rejects_unknown_modes() {
		let result = NewScore::try_from(ScoreSubmission {
			mode: Some(String::from("nightmare")),
			..submission()
		});
		assert_eq!(result, Err(Error::InvalidMode));
	}

	#[test]
	fn whitespace_names_fall_back() {
		assert_eq!(normalize_name(""), FALLBACK_NAME);
		assert_eq!(normalize_name(" \t\n "), FALLBACK_NAME);

		let score = NewScore::try_from(ScoreSubmission {
			name: Some(String::from("     ")),
			..submission()
		})
		.unwrap();
		assert_eq!(score.name, "Hunter");
	}

	#[test]
	fn names_are_trimmed_then_cut() {
		assert_eq!(normalize_name("  Ada  "), "Ada");
		assert_eq!(normalize_name("abcdefghijklmnopqrstuvwxyz"), "abcdefghijklmnop");
		assert_eq!(normalize_name("ÄÖÜäöüßÄÖÜäöüßÄÖÜ"), "ÄÖÜäöüßÄÖÜäöüßÄÖ");
		assert_eq!(normalize_name(&format!("a{}b", " ".repeat(15))), format!("a{}", " ".repeat(15)));
	}

	#[test]
	fn times_round_to_nearest() {
		assert_eq!(normalize_time(12345.6), Ok(12346));
		assert_eq!(normalize_time(12345.4), Ok(12345));
		assert_eq!(normalize_time(2.5), Ok(3));
		assert_eq!(normalize_time(0.0), Ok(0));
	}

	#[test]
	fn rejects_impossible_times() {
		for time in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300] {
			assert_eq!(normalize_time(time), Err(Error::InvalidTime));
		}
	}

	#[test]
	fn deserializes_loose_bodies() {
		let submission: ScoreSubmission = serde_json::from_str(
			r#"{ "name": 42, "mode": "legend", "time_ms": "1000.4", "time_str": "00:01.0", "moves": "3" }"#,
		)
		.unwrap();

		let score = NewScore::try_from(submission).unwrap();
		assert_eq!(score.name, "42");
		assert_eq!(score.mode, Mode::Legend);
		assert_eq!(score.time_ms, 1000);
		assert_eq!(score.moves, 3);
	}
}
