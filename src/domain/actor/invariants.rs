use crate::domain::{is_blank, ConstraintViolation, Validation};

/// The agent is optional, but must not be blank when given
pub fn check_agent(agent: Option<&str>) -> Validation {
    match agent {
        Some(a) if is_blank(a) => Err(ConstraintViolation::Range(
            "The agent must be a non-empty string!".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_optional() {
        assert!(check_agent(None).is_ok());
        assert!(check_agent(Some("John Doe")).is_ok());
        assert!(check_agent(Some("")).is_err());
    }
}
