//! Command execution against the resume service.
//!
//! # Responsibility
//! - Route parsed commands to `ResumeService` use-cases.
//! - Run text edits through the editable-field commit rules so unchanged or
//!   whitespace-only edits never reach storage.
//!
//! # Invariants
//! - Role-scoped commands resolve the active role first, exactly like a
//!   render pass would.
//! - Errors are returned as human-readable strings.

use crate::cli::{CertAction, Commands, ItemAction, ItemEdit};
use intelliresume_core::{
    Confirmation, EditableField, EducationField, KeyValueStore, ProfileField, ProjectField,
    ResumeService, RoleTextField, SkillField,
};
use serde_json::json;
use std::io::{BufRead, Write};

/// Prompts on stdout and reads one line from stdin.
pub struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if std::io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

pub fn execute<S: KeyValueStore>(
    service: &mut ResumeService<S>,
    command: Commands,
) -> Result<(), String> {
    match command {
        Commands::Show => show(service),
        Commands::Roles => list_roles(service),
        Commands::Select { id } => {
            service.select_role(&id).map_err(|err| err.to_string())?;
            println!("active role: {id}");
            Ok(())
        }
        Commands::AddRole { name, copy_from } => {
            let id = service
                .add_role(&name, copy_from.as_deref())
                .map_err(|err| err.to_string())?;
            println!("created role {id}");
            Ok(())
        }
        Commands::DeleteRole { id } => {
            service.delete_role(&id).map_err(|err| err.to_string())?;
            println!("deleted role {id}");
            Ok(())
        }
        Commands::SetProfile { field, value } => {
            let field = ProfileField::parse(&field).map_err(|err| err.to_string())?;
            let current = service.shared_profile().field(field).to_string();
            let changed = match EditableField::edit_once(&current, &value) {
                Some(update) => service
                    .edit_profile_field(field, &update)
                    .map_err(|err| err.to_string())?,
                None => false,
            };
            report(changed);
            Ok(())
        }
        Commands::SetRole { field, value } => {
            let field = RoleTextField::parse(&field).map_err(|err| err.to_string())?;
            let current = active_role_text(service, field)?;
            let changed = match EditableField::edit_once(&current, &value) {
                Some(update) => service
                    .edit_role_text(field, &update)
                    .map_err(|err| err.to_string())?,
                None => false,
            };
            report(changed);
            Ok(())
        }
        Commands::Skill { action } => skill(service, action),
        Commands::Project { action } => project(service, action),
        Commands::Education { action } => education(service, action),
        Commands::Cert { action } => certification(service, action),
        Commands::Reset { yes } => {
            let confirmation: &dyn Confirmation = if yes { &AssumeYes } else { &StdinConfirmation };
            let reset = service
                .reset_to_demo(confirmation)
                .map_err(|err| err.to_string())?;
            println!("{}", if reset { "reset to demo data" } else { "reset cancelled" });
            Ok(())
        }
        Commands::Version => {
            println!("intelliresume_core ping={}", intelliresume_core::ping());
            println!("intelliresume_core version={}", intelliresume_core::core_version());
            Ok(())
        }
    }
}

fn show<S: KeyValueStore>(service: &mut ResumeService<S>) -> Result<(), String> {
    let active = service
        .ensure_active_role()
        .map_err(|err| err.to_string())?
        .clone();
    let document = json!({
        "sharedProfile": service.shared_profile(),
        "activeRole": active,
    });
    let rendered = serde_json::to_string_pretty(&document).map_err(|err| err.to_string())?;
    println!("{rendered}");
    Ok(())
}

fn list_roles<S: KeyValueStore>(service: &mut ResumeService<S>) -> Result<(), String> {
    let active_id = service
        .ensure_active_role()
        .map_err(|err| err.to_string())?
        .id
        .clone();
    for role in service.roles() {
        let marker = if role.id == active_id { '*' } else { ' ' };
        println!("{marker} {}\t{}", role.id, role.role_name);
    }
    Ok(())
}

fn active_role_text<S: KeyValueStore>(
    service: &mut ResumeService<S>,
    field: RoleTextField,
) -> Result<String, String> {
    let role = service.ensure_active_role().map_err(|err| err.to_string())?;
    Ok(role.text(field).to_string())
}

fn skill<S: KeyValueStore>(service: &mut ResumeService<S>, action: ItemAction) -> Result<(), String> {
    let role = service
        .ensure_active_role()
        .map_err(|err| err.to_string())?
        .clone();
    match action {
        ItemAction::Add => {
            let id = service.add_skill().map_err(|err| err.to_string())?;
            report_added(id);
        }
        ItemAction::Edit(ItemEdit {
            index,
            field,
            value,
        }) => {
            let field = SkillField::parse(&field).map_err(|err| err.to_string())?;
            let current = role.skills.get(index).map(|skill| match field {
                SkillField::Category => skill.category.clone(),
                SkillField::List => skill.list.clone(),
            });
            let changed = match committed_update(current, &value) {
                Some(update) => service
                    .edit_skill(index, field, &update)
                    .map_err(|err| err.to_string())?,
                None => false,
            };
            report(changed);
        }
        ItemAction::Delete { index } => {
            let removed = service.delete_skill(index).map_err(|err| err.to_string())?;
            report(removed);
        }
    }
    Ok(())
}

fn project<S: KeyValueStore>(
    service: &mut ResumeService<S>,
    action: ItemAction,
) -> Result<(), String> {
    let role = service
        .ensure_active_role()
        .map_err(|err| err.to_string())?
        .clone();
    match action {
        ItemAction::Add => {
            let id = service.add_project().map_err(|err| err.to_string())?;
            report_added(id);
        }
        ItemAction::Edit(ItemEdit {
            index,
            field,
            value,
        }) => {
            let field = ProjectField::parse(&field).map_err(|err| err.to_string())?;
            let current = role.projects.get(index).map(|project| match field {
                ProjectField::Name => project.name.clone(),
                ProjectField::Description => project.description.clone(),
                ProjectField::Technologies => project.technologies.clone(),
            });
            let changed = match committed_update(current, &value) {
                Some(update) => service
                    .edit_project(index, field, &update)
                    .map_err(|err| err.to_string())?,
                None => false,
            };
            report(changed);
        }
        ItemAction::Delete { index } => {
            let removed = service
                .delete_project(index)
                .map_err(|err| err.to_string())?;
            report(removed);
        }
    }
    Ok(())
}

fn education<S: KeyValueStore>(
    service: &mut ResumeService<S>,
    action: ItemAction,
) -> Result<(), String> {
    match action {
        ItemAction::Add => {
            let id = service.add_education().map_err(|err| err.to_string())?;
            report_added(Some(id));
        }
        ItemAction::Edit(ItemEdit {
            index,
            field,
            value,
        }) => {
            let field = EducationField::parse(&field).map_err(|err| err.to_string())?;
            let current = service
                .shared_profile()
                .education
                .get(index)
                .map(|entry| entry.field(field).to_string());
            let changed = match committed_update(current, &value) {
                Some(update) => service
                    .edit_education(index, field, &update)
                    .map_err(|err| err.to_string())?,
                None => false,
            };
            report(changed);
        }
        ItemAction::Delete { index } => {
            let removed = service
                .delete_education(index)
                .map_err(|err| err.to_string())?;
            report(removed);
        }
    }
    Ok(())
}

fn certification<S: KeyValueStore>(
    service: &mut ResumeService<S>,
    action: CertAction,
) -> Result<(), String> {
    let role = service
        .ensure_active_role()
        .map_err(|err| err.to_string())?
        .clone();
    let changed = match action {
        CertAction::Add { text } => service
            .add_certification(&text)
            .map_err(|err| err.to_string())?,
        CertAction::Edit { index, value } => {
            let current = role.certifications.get(index).cloned();
            match committed_update(current, &value) {
                Some(update) => service
                    .edit_certification(index, &update)
                    .map_err(|err| err.to_string())?,
                None => false,
            }
        }
        CertAction::Delete { index } => service
            .delete_certification(index)
            .map_err(|err| err.to_string())?,
    };
    report(changed);
    Ok(())
}

/// `None` when there is no item at the index or the edit is a no-op.
fn committed_update(current: Option<String>, value: &str) -> Option<String> {
    EditableField::edit_once(&current?, value)
}

fn report(changed: bool) {
    println!("{}", if changed { "updated" } else { "no change" });
}

fn report_added(id: Option<String>) {
    match id {
        Some(id) => println!("added {id}"),
        None => println!("no change"),
    }
}

#[cfg(test)]
mod tests {
    use super::committed_update;

    #[test]
    fn committed_update_requires_existing_item() {
        assert_eq!(committed_update(None, "x"), None);
        assert_eq!(committed_update(Some("x".to_string()), " x "), None);
        assert_eq!(
            committed_update(Some("x".to_string()), " y ").as_deref(),
            Some("y")
        );
    }
}
