use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use utoipa::ToSchema;
use uuid::Uuid;

/// Fixed role vocabulary for team membership.
///
/// Every team record carries all of these roles; membership sets start
/// empty and are filled in by collaborators outside this core.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
pub enum Role {
    #[serde(rename = "Project Manager")]
    #[strum(serialize = "Project Manager")]
    ProjectManager,
    #[serde(rename = "UX Team")]
    #[strum(serialize = "UX Team")]
    UxTeam,
    #[serde(rename = "UI Team")]
    #[strum(serialize = "UI Team")]
    UiTeam,
    #[serde(rename = "API Team")]
    #[strum(serialize = "API Team")]
    ApiTeam,
    #[serde(rename = "DevOps")]
    #[strum(serialize = "DevOps")]
    DevOps,
    #[serde(rename = "Testing")]
    #[strum(serialize = "Testing")]
    Testing,
    #[serde(rename = "Marketing")]
    #[strum(serialize = "Marketing")]
    Marketing,
}

impl Role {
    /// The full role vocabulary, in canonical order.
    pub fn all() -> Vec<Role> {
        Role::iter().collect()
    }
}

/// Mapping from role to the set of member user ids holding it.
pub type RoleUsersMap = BTreeMap<Role, BTreeSet<Uuid>>;

/// Team entity - the role/member structure attached to one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Team {
    /// Owning project (1:1)
    pub project_id: Uuid,
    /// Unique team identifier
    pub team_id: Uuid,
    /// Role to member-set mapping
    #[schema(value_type = BTreeMap<Role, BTreeSet<Uuid>>)]
    pub members: RoleUsersMap,
    /// Provisioning timestamp
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Create an empty team with every given role present and no members.
    pub fn provisioned(project_id: Uuid, team_id: Uuid, roles: &[Role]) -> Self {
        let members = roles.iter().map(|r| (*r, BTreeSet::new())).collect();
        Self {
            project_id,
            team_id,
            members,
            created_at: Utc::now(),
        }
    }

    /// Flatten the role → member-set mapping into a deduplicated member list.
    ///
    /// A user holding several roles appears exactly once. The output order
    /// is the user-id order, which keeps the result deterministic.
    pub fn flatten_members(&self) -> Vec<Uuid> {
        let unique: BTreeSet<Uuid> = self.members.values().flatten().copied().collect();
        unique.into_iter().collect()
    }
}
