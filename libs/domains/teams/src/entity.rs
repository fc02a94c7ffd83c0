use crate::models::{RoleUsersMap, Team};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the teams table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_id: Uuid,
    #[sea_orm(unique)]
    pub project_id: Uuid,
    pub members: Json, // role -> member-set mapping, JSONB
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Team {
    fn from(model: Model) -> Self {
        // a corrupt members column must show up in the logs, not read as an
        // empty roster with no trace
        let members: RoleUsersMap = match serde_json::from_value(model.members.clone()) {
            Ok(members) => members,
            Err(err) => {
                tracing::error!(
                    team_id = %model.team_id,
                    project_id = %model.project_id,
                    error = %err,
                    "Corrupt members column in team record, falling back to an empty roster"
                );
                RoleUsersMap::default()
            }
        };

        Self {
            project_id: model.project_id,
            team_id: model.team_id,
            members,
            created_at: model.created_at.into(),
        }
    }
}

impl From<Team> for ActiveModel {
    fn from(team: Team) -> Self {
        let members_json = match serde_json::to_value(&team.members) {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(
                    team_id = %team.team_id,
                    project_id = %team.project_id,
                    error = %err,
                    "Failed to serialize team roster, persisting an empty object"
                );
                Json::Object(Default::default())
            }
        };

        ActiveModel {
            team_id: Set(team.team_id),
            project_id: Set(team.project_id),
            members: Set(members_json),
            created_at: Set(team.created_at.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use chrono::Utc;

    fn model_with_members(members: Json) -> Model {
        Model {
            team_id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            members,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn test_valid_members_column_round_trips() {
        let mut roster = crate::models::RoleUsersMap::default();
        roster
            .entry(Role::DevOps)
            .or_default()
            .insert(Uuid::new_v4());
        let model = model_with_members(serde_json::to_value(&roster).unwrap());

        let team: Team = model.into();
        assert_eq!(team.members, roster);
    }

    #[test]
    fn test_corrupt_members_column_reads_as_empty_roster() {
        let model = model_with_members(serde_json::json!({"Nonsense Role": "not-a-set"}));

        let team: Team = model.into();
        assert!(team.members.is_empty());
    }
}
