use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Industry categories a post can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Finance,
    Tech,
    Science,
    Startups,
    Consulting,
    Business,
    Management,
}

impl Topic {
    pub const ALL: [Topic; 7] = [
        Topic::Finance,
        Topic::Tech,
        Topic::Science,
        Topic::Startups,
        Topic::Consulting,
        Topic::Business,
        Topic::Management,
    ];

    /// The label used both in the news query and in user-facing output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Finance => "Finance",
            Topic::Tech => "Tech",
            Topic::Science => "Science",
            Topic::Startups => "Startups",
            Topic::Consulting => "Consulting",
            Topic::Business => "Business",
            Topic::Management => "Management",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown topic '{input}', expected one of: {expected}")]
pub struct UnknownTopic {
    input: String,
    expected: String,
}

impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        for topic in Topic::ALL {
            if topic.as_str().eq_ignore_ascii_case(wanted) {
                return Ok(topic);
            }
        }

        Err(UnknownTopic {
            input: wanted.to_string(),
            expected: Topic::ALL.map(|t| t.as_str()).join(", "),
        })
    }
}
