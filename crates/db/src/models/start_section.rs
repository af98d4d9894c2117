//! Start-section (marketing questionnaire) model and DTOs.

use blockcopy_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The 22 free-text answers of the questionnaire.
///
/// Field order matches [`blockcopy_core::start_section::FIELDS`]; see
/// [`StartSectionFields::values`].
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartSectionFields {
    pub project_overview: Option<String>,
    pub deliverables: Option<String>,
    pub timeline: Option<String>,
    pub ideal_client_demographics: Option<String>,
    pub ideal_client_pain_points: Option<String>,
    pub ideal_client_goals: Option<String>,
    pub ideal_client_objections: Option<String>,
    pub project_understanding_problem: Option<String>,
    pub project_understanding_solution: Option<String>,
    pub project_understanding_unique_value: Option<String>,
    pub framework_what_core_product: Option<String>,
    pub framework_what_key_features: Option<String>,
    pub framework_what_unique_selling_points: Option<String>,
    pub framework_who_target_audience: Option<String>,
    pub framework_who_ideal_customer: Option<String>,
    pub framework_who_decision_maker: Option<String>,
    pub framework_why_problem_solved: Option<String>,
    pub framework_why_benefits: Option<String>,
    pub framework_why_emotional_hook: Option<String>,
    pub framework_how_process: Option<String>,
    pub framework_how_delivery_method: Option<String>,
    pub framework_how_support_system: Option<String>,
}

impl StartSectionFields {
    /// Field values in column order, for binding to SQL statements.
    pub fn values(&self) -> [&Option<String>; 22] {
        [
            &self.project_overview,
            &self.deliverables,
            &self.timeline,
            &self.ideal_client_demographics,
            &self.ideal_client_pain_points,
            &self.ideal_client_goals,
            &self.ideal_client_objections,
            &self.project_understanding_problem,
            &self.project_understanding_solution,
            &self.project_understanding_unique_value,
            &self.framework_what_core_product,
            &self.framework_what_key_features,
            &self.framework_what_unique_selling_points,
            &self.framework_who_target_audience,
            &self.framework_who_ideal_customer,
            &self.framework_who_decision_maker,
            &self.framework_why_problem_solved,
            &self.framework_why_benefits,
            &self.framework_why_emotional_hook,
            &self.framework_how_process,
            &self.framework_how_delivery_method,
            &self.framework_how_support_system,
        ]
    }
}

/// A row from the `start_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSection {
    pub id: DbId,
    pub project_id: DbId,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub fields: StartSectionFields,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
