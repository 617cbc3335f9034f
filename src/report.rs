pub const NO_NEW_STATUSES: &str = "No new statuses.";

/// What the user was last told, or would be told now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    pub output: String,
}

impl Report {
    pub fn new(name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output: output.into(),
        }
    }

    /// Report used when the API returns an empty homework list.
    pub fn no_new_statuses() -> Self {
        Self::new("", NO_NEW_STATUSES)
    }

    pub fn changed(&self, previous: &Report) -> bool {
        self != previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_field_difference_counts() {
        let base = Report::new("hw1", "approved");
        assert!(!base.changed(&base.clone()));
        assert!(base.changed(&Report::new("hw2", "approved")));
        assert!(base.changed(&Report::new("hw1", "rejected")));
    }

    #[test]
    fn sentinel_differs_from_startup_state() {
        assert!(Report::no_new_statuses().changed(&Report::default()));
    }
}
