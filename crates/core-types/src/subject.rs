use serde::Serialize;

/// The ordered, fixed set of subjects a gradebook records grades against.
///
/// Entries are trimmed on construction. Blank entries and repeats are dropped, the
/// first occurrence keeping its position. Lookups are exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubjectSet {
    subjects: Vec<String>,
}

impl SubjectSet {
    pub fn new<I, S>(subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for subject in subjects {
            let subject = subject.as_ref().trim();
            if subject.is_empty() || unique.iter().any(|s| s == subject) {
                continue;
            }
            unique.push(subject.to_string());
        }
        Self { subjects: unique }
    }

    pub fn contains(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Comma-separated listing, as shown next to subject prompts.
    pub fn joined(&self) -> String {
        self.subjects.join(", ")
    }
}

impl Default for SubjectSet {
    /// The three subjects every class starts with.
    fn default() -> Self {
        Self::new(["Math", "English", "Science"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_drops_duplicates() {
        let set = SubjectSet::new([" Math", "English", "Math", "  ", "Science "]);

        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Math", "English", "Science"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let set = SubjectSet::default();

        assert!(set.contains("Math"));
        assert!(!set.contains("math"));
        assert!(!set.contains("History"));
    }

    #[test]
    fn test_joined_listing() {
        assert_eq!(SubjectSet::default().joined(), "Math, English, Science");
    }
}
