//! Typed path parameter helpers.

use resumehub_core::error::AppError;
use resumehub_core::types::ResumeId;

/// Parses a resume id from a path segment.
pub fn parse_resume_id(s: &str) -> Result<ResumeId, AppError> {
    s.parse()
        .map_err(|_| AppError::invalid_field("id", format!("'{s}' is not a valid resume id")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumehub_core::error::ErrorKind;

    #[test]
    fn test_parse_resume_id() {
        let id = ResumeId::new();
        assert_eq!(parse_resume_id(&id.to_string()).expect("parse"), id);
        assert_eq!(
            parse_resume_id("abc").unwrap_err().kind,
            ErrorKind::Validation
        );
    }
}
