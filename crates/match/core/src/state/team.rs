/// One of the two sides in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Completion checks walk sides in this order.
    pub const ALL: [Team; 2] = [Team::A, Team::B];
}

/// Display labels for both sides.
///
/// Names are stored trimmed and upper-cased; blank input falls back to the
/// side's default label.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamNames {
    a: String,
    b: String,
}

impl TeamNames {
    pub const DEFAULT_A: &'static str = "TIME A";
    pub const DEFAULT_B: &'static str = "TIME B";

    pub fn new(a: &str, b: &str) -> Self {
        Self {
            a: normalize(a, Self::DEFAULT_A),
            b: normalize(b, Self::DEFAULT_B),
        }
    }

    pub fn get(&self, team: Team) -> &str {
        match team {
            Team::A => &self.a,
            Team::B => &self.b,
        }
    }
}

impl Default for TeamNames {
    fn default() -> Self {
        Self {
            a: Self::DEFAULT_A.to_string(),
            b: Self::DEFAULT_B.to_string(),
        }
    }
}

fn normalize(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_fall_back_to_defaults() {
        let names = TeamNames::new("", "  ");
        assert_eq!(names.get(Team::A), "TIME A");
        assert_eq!(names.get(Team::B), "TIME B");
    }

    #[test]
    fn names_are_trimmed_and_upper_cased() {
        let names = TeamNames::new("  nós ", "eles");
        assert_eq!(names.get(Team::A), "NÓS");
        assert_eq!(names.get(Team::B), "ELES");
    }
}
