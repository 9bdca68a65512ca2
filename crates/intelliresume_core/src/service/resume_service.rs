//! Resume state controller.
//!
//! # Responsibility
//! - Own the Shared Profile, the role collection and the active role id.
//! - Route every edit through merge helpers and persist the touched
//!   aggregate right after the change.
//! - Keep the active role id pointing at an existing role.
//!
//! # Invariants
//! - Unchanged edits never write to the store.
//! - The active role id is persisted only while it names an existing role.
//! - Aggregates are written independently (profile, then roles, then active
//!   id); there is no cross-key transaction.
//! - Role `id` and `role_name` never change after creation.

use crate::editing::list::{remove_at, set_certification, update_at};
use crate::model::demo::{demo_roles, demo_shared_profile, DEMO_ACTIVE_ROLE_ID};
use crate::model::id::{
    IdGenerator, TimestampIdGenerator, EDUCATION_ID_PREFIX, PROJECT_ID_PREFIX, ROLE_ID_PREFIX,
    SKILL_ID_PREFIX,
};
use crate::model::profile::{
    EducationEntry, EducationField, ProfileField, SharedProfile, SharedProfileUpdate,
};
use crate::model::role::{
    Project, ProjectField, RoleId, RoleTextField, RoleUpdate, RoleVariant, SkillCategory,
    SkillField,
};
use crate::repo::kv_repo::{KeyValueStore, StoreError};
use crate::repo::resume_repo::{
    clear_all, load_active_role_id, load_or_default, save_json, ACTIVE_ROLE_ID_KEY, ROLES_KEY,
    SHARED_PROFILE_KEY,
};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Prompt shown before reset-to-demo.
pub const RESET_PROMPT: &str =
    "Are you sure you want to reset all data to the original demo? All your changes will be lost.";

pub type ResumeResult<T> = Result<T, ResumeServiceError>;

/// Service error for resume use-cases.
#[derive(Debug)]
pub enum ResumeServiceError {
    /// Role name is empty after trimming.
    EmptyRoleName,
    /// No role with this id exists.
    RoleNotFound(String),
    /// Persistence-layer failure. In-memory state already holds the change.
    Store(StoreError),
}

impl Display for ResumeServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRoleName => write!(f, "role name must not be empty"),
            Self::RoleNotFound(id) => write!(f, "role not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ResumeServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ResumeServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Blocking yes/no prompt used to gate destructive actions.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Full in-memory application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeState {
    pub shared: SharedProfile,
    pub roles: Vec<RoleVariant>,
    /// May dangle transiently; see [`ResumeService::reconcile`].
    pub active_role_id: RoleId,
}

impl ResumeState {
    /// Bundled demo state with the first demo role active.
    pub fn demo() -> Self {
        Self {
            shared: demo_shared_profile(),
            roles: demo_roles(),
            active_role_id: DEMO_ACTIVE_ROLE_ID.to_string(),
        }
    }

    fn has_role(&self, id: &str) -> bool {
        self.roles.iter().any(|role| role.id == id)
    }
}

/// Controller over [`ResumeState`] and a persistence port.
pub struct ResumeService<S: KeyValueStore> {
    store: S,
    ids: Box<dyn IdGenerator>,
    state: ResumeState,
}

impl<S: KeyValueStore> ResumeService<S> {
    /// Loads state from `store` with time-based identifiers.
    pub fn load(store: S) -> Self {
        Self::load_with_ids(store, Box::new(TimestampIdGenerator::new()))
    }

    /// Loads state from `store`, falling back to demo data per aggregate.
    ///
    /// Nothing is written during load.
    pub fn load_with_ids(store: S, ids: Box<dyn IdGenerator>) -> Self {
        let shared = load_or_default(&store, SHARED_PROFILE_KEY, demo_shared_profile());
        let roles: Vec<RoleVariant> = load_or_default(&store, ROLES_KEY, demo_roles());
        let saved_active = load_active_role_id(&store);
        let active_role_id = initial_active_role_id(&roles, saved_active.as_deref());

        info!(
            "event=state_load module=service status=ok roles={} active_role_id={}",
            roles.len(),
            active_role_id
        );

        Self {
            store,
            ids,
            state: ResumeState {
                shared,
                roles,
                active_role_id,
            },
        }
    }

    pub fn state(&self) -> &ResumeState {
        &self.state
    }

    pub fn shared_profile(&self) -> &SharedProfile {
        &self.state.shared
    }

    pub fn roles(&self) -> &[RoleVariant] {
        &self.state.roles
    }

    /// Raw active role id; may dangle until the next reconciliation.
    pub fn active_role_id(&self) -> &str {
        &self.state.active_role_id
    }

    /// Role to display: the active one, else the first role.
    pub fn active_role(&self) -> Option<&RoleVariant> {
        self.state
            .roles
            .iter()
            .find(|role| role.id == self.state.active_role_id)
            .or_else(|| self.state.roles.first())
    }

    /// Repairs a dangling active id to the first role.
    ///
    /// Returns `true` when the id changed. With no roles the id is left
    /// untouched.
    pub fn reconcile(&mut self) -> ResumeResult<bool> {
        if self.state.has_role(&self.state.active_role_id) {
            return Ok(false);
        }
        let Some(first) = self.state.roles.first() else {
            return Ok(false);
        };
        debug!(
            "event=active_reconcile module=service status=ok from={} to={}",
            self.state.active_role_id, first.id
        );
        self.state.active_role_id = first.id.clone();
        self.persist_active_role_id()?;
        Ok(true)
    }

    /// Resolves the role to display, synthesizing a placeholder role when the
    /// collection is empty.
    pub fn ensure_active_role(&mut self) -> ResumeResult<&RoleVariant> {
        if self.state.roles.is_empty() {
            let id = self.ids.next_id(ROLE_ID_PREFIX);
            info!("event=role_placeholder module=service status=ok role_id={id}");
            self.state.roles.push(RoleVariant::placeholder(id.clone()));
            self.state.active_role_id = id;
            self.persist_roles()?;
        } else {
            self.reconcile()?;
        }

        let index = self
            .state
            .roles
            .iter()
            .position(|role| role.id == self.state.active_role_id)
            .unwrap_or(0);
        Ok(&self.state.roles[index])
    }

    /// Switches the active role.
    pub fn select_role(&mut self, id: &str) -> ResumeResult<()> {
        if !self.state.has_role(id) {
            return Err(ResumeServiceError::RoleNotFound(id.to_string()));
        }
        if self.state.active_role_id == id {
            return Ok(());
        }
        self.state.active_role_id = id.to_string();
        self.persist_active_role_id()?;
        Ok(())
    }

    /// Appends a new role and makes it active.
    ///
    /// When `copy_from` names an existing role its content is cloned;
    /// otherwise the new role starts blank.
    pub fn add_role(&mut self, role_name: &str, copy_from: Option<&str>) -> ResumeResult<RoleId> {
        let role_name = role_name.trim();
        if role_name.is_empty() {
            return Err(ResumeServiceError::EmptyRoleName);
        }

        let id = self.ids.next_id(ROLE_ID_PREFIX);
        let source = copy_from.and_then(|source_id| {
            let found = self.state.roles.iter().find(|role| role.id == source_id);
            if found.is_none() {
                warn!("event=role_add module=service status=fallback source_role_id={source_id} reason=source_missing");
            }
            found
        });
        let role = match source {
            Some(source) => source.duplicate_as(id.clone(), role_name),
            None => RoleVariant::blank(id.clone(), role_name),
        };

        info!(
            "event=role_add module=service status=ok role_id={} copied={}",
            id,
            source.is_some()
        );
        self.state.roles.push(role);
        self.state.active_role_id = id.clone();
        self.persist_roles()?;
        Ok(id)
    }

    /// Removes a role and repairs the active id if it pointed at it.
    ///
    /// Removing the last role leaves the collection empty.
    pub fn delete_role(&mut self, id: &str) -> ResumeResult<()> {
        let Some(index) = self.state.roles.iter().position(|role| role.id == id) else {
            return Err(ResumeServiceError::RoleNotFound(id.to_string()));
        };
        self.state.roles.remove(index);
        info!(
            "event=role_delete module=service status=ok role_id={} remaining={}",
            id,
            self.state.roles.len()
        );
        self.persist_roles()?;
        self.reconcile()?;
        Ok(())
    }

    /// Shallow-merges `update` into the active role only.
    ///
    /// Returns `false` (and writes nothing) when no role matches the active
    /// id or nothing changed.
    pub fn update_active_role(&mut self, update: RoleUpdate) -> ResumeResult<bool> {
        self.modify_active_role(|role| role.apply(update))
    }

    /// Shallow-merges `update` into the Shared Profile.
    pub fn update_shared_profile(&mut self, update: SharedProfileUpdate) -> ResumeResult<bool> {
        self.modify_shared(|shared| shared.apply(update))
    }

    pub fn edit_profile_field(&mut self, field: ProfileField, value: &str) -> ResumeResult<bool> {
        self.modify_shared(|shared| shared.set_field(field, value))
    }

    pub fn edit_role_text(&mut self, field: RoleTextField, value: &str) -> ResumeResult<bool> {
        let update = match field {
            RoleTextField::Summary => RoleUpdate {
                summary: Some(value.to_string()),
                ..RoleUpdate::default()
            },
            RoleTextField::Hobbies => RoleUpdate {
                hobbies: Some(value.to_string()),
                ..RoleUpdate::default()
            },
        };
        self.update_active_role(update)
    }

    /// Appends a placeholder education entry; returns its id.
    pub fn add_education(&mut self) -> ResumeResult<String> {
        let id = self.ids.next_id(EDUCATION_ID_PREFIX);
        let entry = EducationEntry::placeholder(id.clone());
        self.modify_shared(|shared| {
            shared.education.push(entry);
            true
        })?;
        Ok(id)
    }

    pub fn edit_education(
        &mut self,
        index: usize,
        field: EducationField,
        value: &str,
    ) -> ResumeResult<bool> {
        self.modify_shared(|shared| {
            update_at(&mut shared.education, index, |entry| entry.set_field(field, value))
        })
    }

    pub fn delete_education(&mut self, index: usize) -> ResumeResult<bool> {
        self.modify_shared(|shared| remove_at(&mut shared.education, index))
    }

    /// Appends a placeholder skill category to the active role.
    ///
    /// Returns `None` when no role matches the active id.
    pub fn add_skill(&mut self) -> ResumeResult<Option<String>> {
        let id = self.ids.next_id(SKILL_ID_PREFIX);
        let skill = SkillCategory::placeholder(id.clone());
        let added = self.modify_active_role(|role| {
            role.skills.push(skill);
            true
        })?;
        Ok(added.then_some(id))
    }

    pub fn edit_skill(&mut self, index: usize, field: SkillField, value: &str) -> ResumeResult<bool> {
        self.modify_active_role(|role| {
            update_at(&mut role.skills, index, |skill| skill.set_field(field, value))
        })
    }

    pub fn delete_skill(&mut self, index: usize) -> ResumeResult<bool> {
        self.modify_active_role(|role| remove_at(&mut role.skills, index))
    }

    /// Appends a placeholder project to the active role.
    pub fn add_project(&mut self) -> ResumeResult<Option<String>> {
        let id = self.ids.next_id(PROJECT_ID_PREFIX);
        let project = Project::placeholder(id.clone());
        let added = self.modify_active_role(|role| {
            role.projects.push(project);
            true
        })?;
        Ok(added.then_some(id))
    }

    pub fn edit_project(
        &mut self,
        index: usize,
        field: ProjectField,
        value: &str,
    ) -> ResumeResult<bool> {
        self.modify_active_role(|role| {
            update_at(&mut role.projects, index, |project| {
                project.set_field(field, value)
            })
        })
    }

    pub fn delete_project(&mut self, index: usize) -> ResumeResult<bool> {
        self.modify_active_role(|role| remove_at(&mut role.projects, index))
    }

    /// Appends a trimmed certification; blank text adds nothing.
    pub fn add_certification(&mut self, text: &str) -> ResumeResult<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        self.modify_active_role(|role| {
            role.certifications.push(text.to_string());
            true
        })
    }

    /// Replaces one certification; a blank value removes the entry.
    pub fn edit_certification(&mut self, index: usize, value: &str) -> ResumeResult<bool> {
        self.modify_active_role(|role| set_certification(&mut role.certifications, index, value))
    }

    pub fn delete_certification(&mut self, index: usize) -> ResumeResult<bool> {
        self.modify_active_role(|role| remove_at(&mut role.certifications, index))
    }

    /// Clears all persisted keys and restores demo state, after confirmation.
    ///
    /// Returns `false` when the user declined.
    pub fn reset_to_demo(&mut self, confirmation: &dyn Confirmation) -> ResumeResult<bool> {
        if !confirmation.confirm(RESET_PROMPT) {
            info!("event=state_reset module=service status=cancelled");
            return Ok(false);
        }
        clear_all(&self.store)?;
        self.state = ResumeState::demo();
        info!("event=state_reset module=service status=ok");
        Ok(true)
    }

    fn modify_shared(&mut self, edit: impl FnOnce(&mut SharedProfile) -> bool) -> ResumeResult<bool> {
        if !edit(&mut self.state.shared) {
            return Ok(false);
        }
        self.persist_shared()?;
        Ok(true)
    }

    fn modify_active_role(
        &mut self,
        edit: impl FnOnce(&mut RoleVariant) -> bool,
    ) -> ResumeResult<bool> {
        let active_id = self.state.active_role_id.as_str();
        let Some(role) = self.state.roles.iter_mut().find(|role| role.id == active_id) else {
            debug!("event=role_update module=service status=skipped reason=no_active_role active_role_id={active_id}");
            return Ok(false);
        };
        if !edit(role) {
            return Ok(false);
        }
        self.persist_roles()?;
        Ok(true)
    }

    fn persist_shared(&self) -> ResumeResult<()> {
        save_json(&self.store, SHARED_PROFILE_KEY, &self.state.shared)?;
        debug!("event=state_save module=service status=ok key={SHARED_PROFILE_KEY}");
        Ok(())
    }

    /// Writes the role collection, then re-checks the active id against it.
    fn persist_roles(&self) -> ResumeResult<()> {
        save_json(&self.store, ROLES_KEY, &self.state.roles)?;
        debug!(
            "event=state_save module=service status=ok key={ROLES_KEY} roles={}",
            self.state.roles.len()
        );
        self.persist_active_role_id()
    }

    fn persist_active_role_id(&self) -> ResumeResult<()> {
        if !self.state.has_role(&self.state.active_role_id) {
            debug!(
                "event=state_save module=service status=skipped key={ACTIVE_ROLE_ID_KEY} reason=dangling_id active_role_id={}",
                self.state.active_role_id
            );
            return Ok(());
        }
        save_json(&self.store, ACTIVE_ROLE_ID_KEY, &self.state.active_role_id)?;
        Ok(())
    }
}

fn initial_active_role_id(roles: &[RoleVariant], saved: Option<&str>) -> RoleId {
    if let Some(saved) = saved {
        if roles.iter().any(|role| role.id == saved) {
            return saved.to_string();
        }
    }
    roles
        .first()
        .map(|role| role.id.clone())
        .unwrap_or_else(|| DEMO_ACTIVE_ROLE_ID.to_string())
}

#[cfg(test)]
mod tests {
    use super::{initial_active_role_id, ResumeState};
    use crate::model::role::RoleVariant;

    fn roles(ids: &[&str]) -> Vec<RoleVariant> {
        ids.iter().map(|id| RoleVariant::blank(*id, *id)).collect()
    }

    #[test]
    fn initial_active_id_prefers_saved_when_present() {
        assert_eq!(initial_active_role_id(&roles(&["a", "b"]), Some("b")), "b");
    }

    #[test]
    fn initial_active_id_falls_back_to_first_role() {
        assert_eq!(initial_active_role_id(&roles(&["a", "b"]), Some("zz")), "a");
        assert_eq!(initial_active_role_id(&roles(&["a"]), None), "a");
    }

    #[test]
    fn initial_active_id_falls_back_to_demo_when_empty() {
        assert_eq!(initial_active_role_id(&[], Some("x")), "role_1");
    }

    #[test]
    fn demo_state_is_consistent() {
        let state = ResumeState::demo();
        assert!(state.has_role(&state.active_role_id));
    }
}
