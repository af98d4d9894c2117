//! Project summary handed to the language model.

use blockcopy_core::prompt::{FileSummary, IdealClient, ProjectContext, Understanding};
use blockcopy_db::models::file::ProjectFile;
use blockcopy_db::models::project::Project;
use blockcopy_db::models::start_section::StartSection;
use blockcopy_db::repositories::{FileRepo, StartSectionRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// Load the start section and files of `project` and summarise them.
pub(crate) async fn load_project_context(
    state: &AppState,
    project: &Project,
) -> AppResult<ProjectContext> {
    let start_section = StartSectionRepo::find_for_project(&state.pool, project.id).await?;
    let files = FileRepo::list_for_project(&state.pool, project.id).await?;
    Ok(build_context(project, start_section.as_ref(), &files))
}

pub(crate) fn build_context(
    project: &Project,
    start_section: Option<&StartSection>,
    files: &[ProjectFile],
) -> ProjectContext {
    let fields = start_section.map(|s| &s.fields);
    ProjectContext {
        name: project.name.clone(),
        client_name: project.client_name.clone(),
        description: project.description.clone(),
        overview: fields.and_then(|f| f.project_overview.clone()),
        ideal_client: fields.map(|f| IdealClient {
            demographics: f.ideal_client_demographics.clone(),
            pain_points: f.ideal_client_pain_points.clone(),
            goals: f.ideal_client_goals.clone(),
        }),
        understanding: fields.map(|f| Understanding {
            problem: f.project_understanding_problem.clone(),
            solution: f.project_understanding_solution.clone(),
            unique_value: f.project_understanding_unique_value.clone(),
        }),
        files: files
            .iter()
            .map(|f| FileSummary {
                name: f.name.clone(),
                file_type: f.file_type.clone(),
                mime_type: f.mime_type.clone(),
                content: f.content.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use blockcopy_db::models::start_section::StartSectionFields;
    use chrono::Utc;

    use super::*;

    fn project() -> Project {
        Project {
            id: 1,
            user_id: 1,
            name: "Launch".into(),
            client_name: Some("Acme".into()),
            description: None,
            content: None,
            status: "active".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn without_start_section() {
        let ctx = build_context(&project(), None, &[]);
        assert_eq!(ctx.name, "Launch");
        assert_eq!(ctx.client_name.as_deref(), Some("Acme"));
        assert!(ctx.ideal_client.is_none());
        assert!(ctx.understanding.is_none());
        assert!(ctx.files.is_empty());
    }

    #[test]
    fn start_section_answers_are_carried() {
        let section = StartSection {
            id: 1,
            project_id: 1,
            fields: StartSectionFields {
                project_overview: Some("A course launch".into()),
                ideal_client_goals: Some("Grow revenue".into()),
                project_understanding_problem: Some("No leads".into()),
                ..Default::default()
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let ctx = build_context(&project(), Some(&section), &[]);
        assert_eq!(ctx.overview.as_deref(), Some("A course launch"));
        assert_eq!(
            ctx.ideal_client.and_then(|c| c.goals).as_deref(),
            Some("Grow revenue")
        );
        assert_eq!(
            ctx.understanding.and_then(|u| u.problem).as_deref(),
            Some("No leads")
        );
    }
}
