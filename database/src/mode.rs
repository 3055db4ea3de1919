use {
	serde::Serialize,
	std::{fmt::Display, str::FromStr},
};

/// Difficulty tier a run was completed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
	Trainee,
	Idol,
	Legend,
}

impl Mode {
	pub const ALL: [Self; 3] = [Self::Trainee, Self::Idol, Self::Legend];

	/// The value stored in the `mode` column.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Trainee => "trainee",
			Self::Idol => "idol",
			Self::Legend => "legend",
		}
	}
}

impl Display for Mode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl Display for UnknownMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "`{}` is not a valid mode.", self.0)
	}
}

impl std::error::Error for UnknownMode {}

impl FromStr for Mode {
	type Err = UnknownMode;

	/// Exact, case-sensitive match against the stored values.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|mode| mode.as_str() == s)
			.ok_or_else(|| UnknownMode(s.to_owned()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_known_modes() {
		assert_eq!("trainee".parse(), Ok(Mode::Trainee));
		assert_eq!("idol".parse(), Ok(Mode::Idol));
		assert_eq!("legend".parse(), Ok(Mode::Legend));
	}

	#[test]
	fn rejects_everything_else() {
		for input in ["", "unknown", "Legend", "IDOL", " idol", "trainee\n"] {
			assert_eq!(input.parse::<Mode>(), Err(UnknownMode(input.to_owned())));
		}
	}

	#[test]
	fn display_matches_column_value() {
		for mode in Mode::ALL {
			assert_eq!(mode.to_string(), mode.as_str());
			assert_eq!(mode.to_string().parse(), Ok(mode));
		}
	}

	#[test]
	fn serializes_lowercase() {
		assert_eq!(serde_json::to_string(&Mode::Idol).unwrap(), r#""idol""#);
	}
}
