use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Inclusive GPA scale.
pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct StudentRecord {
    #[tabled(rename = "ID")]
    pub id: u32,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "GPA", display_with = "format_gpa")]
    pub gpa: f64,
    #[tabled(rename = "Major")]
    pub major: String,
}

impl StudentRecord {
    pub fn new(id: u32, name: impl Into<String>, gpa: f64, major: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gpa,
            major: major.into(),
        }
    }
}

impl std::fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} | GPA: {:.2} | {}", self.id, self.name, self.gpa, self.major)
    }
}

fn format_gpa(gpa: &f64) -> String {
    format!("{gpa:.2}")
}

pub fn is_valid_gpa(gpa: f64) -> bool {
    (GPA_MIN..=GPA_MAX).contains(&gpa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let record = StudentRecord::new(1001, "Grace Hopper", 3.9, "Computer Science");
        assert_eq!(record.to_string(), "1001 | Grace Hopper | GPA: 3.90 | Computer Science");
    }

    #[test]
    fn test_gpa_bounds() {
        assert!(is_valid_gpa(0.0));
        assert!(is_valid_gpa(4.0));
        assert!(!is_valid_gpa(4.01));
        assert!(!is_valid_gpa(-0.1));
        assert!(!is_valid_gpa(f64::NAN));
    }
}
