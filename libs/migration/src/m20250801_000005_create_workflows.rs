use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workflows::Table)
                    .if_not_exists()
                    .col(pk_uuid(Workflows::Id))
                    .col(uuid(Workflows::ProjectId))
                    .col(string(Workflows::Name))
                    .col(text_null(Workflows::Description))
                    .col(
                        timestamp_with_time_zone(Workflows::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // By-project access path for the per-project workflow listing
        manager
            .create_index(
                Index::create()
                    .name("idx_workflows_project_id")
                    .table(Workflows::Table)
                    .col(Workflows::ProjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workflows::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Workflows {
    Table,
    Id,
    ProjectId,
    Name,
    Description,
    CreatedAt,
}
