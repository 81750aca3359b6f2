use crate::dto::types::OperationKind;

/// Member-level exclusion rules, parameterized by operation.
///
/// The rule set is a small closed convention rather than an expression
/// language: identifiers and soft-delete/activity flags are server-assigned
/// and must not be settable at creation time. Read and Update expose the
/// full eligible member list.
#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    /// Lowercased words that disqualify a member from Create output when
    /// they occur anywhere in its name
    create_exclusion_words: Vec<String>,
}

impl ExclusionPolicy {
    /// Create a policy from the configured exclusion words
    pub fn new(create_exclusion_words: &[String]) -> Self {
        Self {
            create_exclusion_words: create_exclusion_words
                .iter()
                .map(|word| word.to_ascii_lowercase())
                .collect(),
        }
    }

    /// Whether a member is excluded from the given operation's output
    pub fn excludes_member(&self, operation: OperationKind, member_name: &str) -> bool {
        if operation != OperationKind::Create {
            return false;
        }
        if member_name.eq_ignore_ascii_case("Id") {
            return true;
        }

        let lowered = member_name.to_ascii_lowercase();
        self.create_exclusion_words
            .iter()
            .any(|word| lowered.contains(word.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn default_policy() -> ExclusionPolicy {
        ExclusionPolicy::new(&["active".to_string(), "delete".to_string()])
    }

    #[test_case("Id"; "exact identifier")]
    #[test_case("ID"; "upper identifier")]
    #[test_case("id"; "lower identifier")]
    #[test_case("IsActive"; "activity flag")]
    #[test_case("DeletedAt"; "soft delete stamp")]
    #[test_case("LastActiveDate"; "word in the middle")]
    fn excluded_from_create(name: &str) {
        assert!(default_policy().excludes_member(OperationKind::Create, name));
    }

    #[test_case("Address"; "contains no exclusion word")]
    #[test_case("Name"; "plain member")]
    #[test_case("Identifier"; "identifier is not an equality match")]
    fn included_in_create(name: &str) {
        assert!(!default_policy().excludes_member(OperationKind::Create, name));
    }

    #[test_case(OperationKind::Read)]
    #[test_case(OperationKind::Update)]
    fn read_and_update_exclude_nothing(operation: OperationKind) {
        let policy = default_policy();
        assert!(!policy.excludes_member(operation, "Id"));
        assert!(!policy.excludes_member(operation, "IsActive"));
        assert!(!policy.excludes_member(operation, "DeletedAt"));
    }

    #[test]
    fn custom_words_take_effect() {
        let policy = ExclusionPolicy::new(&["secret".to_string()]);
        assert!(policy.excludes_member(OperationKind::Create, "SecretToken"));
        assert!(!policy.excludes_member(OperationKind::Create, "IsActive"));
    }
}
