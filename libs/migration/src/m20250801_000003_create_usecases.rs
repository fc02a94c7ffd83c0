use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usecases::Table)
                    .if_not_exists()
                    .col(pk_uuid(Usecases::Id))
                    .col(uuid(Usecases::ProjectId))
                    .col(string(Usecases::Name))
                    .col(text_null(Usecases::Description))
                    .col(
                        timestamp_with_time_zone(Usecases::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // By-project access path; the listing pipeline counts through it
        manager
            .create_index(
                Index::create()
                    .name("idx_usecases_project_id")
                    .table(Usecases::Table)
                    .col(Usecases::ProjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usecases::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Usecases {
    Table,
    Id,
    ProjectId,
    Name,
    Description,
    CreatedAt,
}
