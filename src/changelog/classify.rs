use crate::config::NoiseRules;
use std::fmt;

/// Subjects this short (in characters, after trimming) are never reported.
pub const MIN_SUBJECT_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoiseReason {
    Empty,
    Exact(String),
    Prefix(String),
    Contains(String),
    Chore,
    NoLog,
    TooShort,
}

impl fmt::Display for NoiseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseReason::Empty => write!(f, "empty subject"),
            NoiseReason::Exact(s) => write!(f, "matches '{s}'"),
            NoiseReason::Prefix(p) => write!(f, "starts with '{p}'"),
            NoiseReason::Contains(c) => write!(f, "contains '{c}'"),
            NoiseReason::Chore => write!(f, "chore commit"),
            NoiseReason::NoLog => write!(f, "marked as no-log"),
            NoiseReason::TooShort => write!(f, "too short"),
        }
    }
}

/// The marker must be a whole commit type: `chore`, `chore:`, `chore(scope)` or `chore!`.
fn is_chore(lowered: &str, marker: &str) -> bool {
    match lowered.strip_prefix(marker) {
        Some(rest) => matches!(rest.chars().next(), None | Some(':' | '(' | '!')),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Noise(NoiseReason),
}

impl Verdict {
    pub fn is_noise(&self) -> bool {
        matches!(self, Verdict::Noise(_))
    }
}

impl NoiseRules {
    pub fn classify(&self, subject: &str) -> Verdict {
        let subject = subject.trim();
        if subject.is_empty() {
            return Verdict::Noise(NoiseReason::Empty);
        }

        if let Some(exact) = self.exact.iter().find(|e| e.as_str() == subject) {
            return Verdict::Noise(NoiseReason::Exact(exact.clone()));
        }

        if let Some(prefix) = self.prefixes.iter().find(|p| subject.starts_with(p.as_str())) {
            return Verdict::Noise(NoiseReason::Prefix(prefix.clone()));
        }

        let lowered = subject.to_lowercase();
        if let Some(needle) = self
            .contains
            .iter()
            .find(|c| lowered.contains(&c.to_lowercase()))
        {
            return Verdict::Noise(NoiseReason::Contains(needle.clone()));
        }

        if !self.chore_marker.is_empty() && is_chore(&lowered, &self.chore_marker.to_lowercase()) {
            return Verdict::Noise(NoiseReason::Chore);
        }

        if !self.no_log_marker.is_empty() && lowered.contains(&self.no_log_marker.to_lowercase()) {
            return Verdict::Noise(NoiseReason::NoLog);
        }

        if subject.chars().count() < MIN_SUBJECT_LEN {
            return Verdict::Noise(NoiseReason::TooShort);
        }

        Verdict::Keep
    }

    pub fn is_noise(&self, subject: &str) -> bool {
        self.classify(subject).is_noise()
    }
}
