//! Start-section questionnaire layout.
//!
//! The start section is a per-project marketing analysis form. Every field
//! is free text and nullable; saving the form replaces all fields at once.

/// Column names of the questionnaire fields, in form order.
pub const FIELDS: [&str; 22] = [
    "project_overview",
    "deliverables",
    "timeline",
    "ideal_client_demographics",
    "ideal_client_pain_points",
    "ideal_client_goals",
    "ideal_client_objections",
    "project_understanding_problem",
    "project_understanding_solution",
    "project_understanding_unique_value",
    "framework_what_core_product",
    "framework_what_key_features",
    "framework_what_unique_selling_points",
    "framework_who_target_audience",
    "framework_who_ideal_customer",
    "framework_who_decision_maker",
    "framework_why_problem_solved",
    "framework_why_benefits",
    "framework_why_emotional_hook",
    "framework_how_process",
    "framework_how_delivery_method",
    "framework_how_support_system",
];

/// Comma-separated column list for SQL statements.
pub fn column_list() -> String {
    FIELDS.join(", ")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn fields_are_unique_snake_case() {
        let unique: HashSet<_> = FIELDS.iter().collect();
        assert_eq!(unique.len(), FIELDS.len());
        for field in FIELDS {
            assert!(field.chars().all(|c| c.is_ascii_lowercase() || c == '_'), "{field}");
        }
    }

    #[test]
    fn column_list_joins_in_order() {
        let list = column_list();
        assert!(list.starts_with("project_overview, deliverables, timeline"));
        assert!(list.ends_with("framework_how_support_system"));
    }
}
