use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create project_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(ProjectStatus::Enum)
                    .values([ProjectStatus::Pending, ProjectStatus::Completed])
                    .to_owned(),
            )
            .await?;

        // Create projects table
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_uuid(Projects::Id))
                    .col(string(Projects::Name))
                    .col(text_null(Projects::Description))
                    .col(
                        ColumnDef::new(Projects::Status)
                            .enumeration(
                                ProjectStatus::Enum,
                                [ProjectStatus::Pending, ProjectStatus::Completed],
                            )
                            .not_null()
                            .default("pending"),
                    )
                    .col(date(Projects::StartDate))
                    .col(date_null(Projects::EndDate))
                    .col(uuid(Projects::TeamId))
                    .col(
                        timestamp_with_time_zone(Projects::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Name lookup path for the create-time uniqueness check
        manager
            .create_index(
                Index::create()
                    .name("idx_projects_name")
                    .table(Projects::Table)
                    .col(Projects::Name)
                    .to_owned(),
            )
            .await?;

        // Status-partitioned listing index; (created_at, id) is the keyset
        manager
            .create_index(
                Index::create()
                    .name("idx_projects_status_created_at_id")
                    .table(Projects::Table)
                    .col(Projects::Status)
                    .col(Projects::CreatedAt)
                    .col(Projects::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(ProjectStatus::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Name,
    Description,
    Status,
    StartDate,
    EndDate,
    TeamId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProjectStatus {
    #[sea_orm(iden = "project_status")]
    Enum,
    #[sea_orm(iden = "pending")]
    Pending,
    #[sea_orm(iden = "completed")]
    Completed,
}
