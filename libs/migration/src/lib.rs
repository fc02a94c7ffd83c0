pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_projects;
mod m20250801_000002_create_teams;
mod m20250801_000003_create_usecases;
mod m20250801_000004_create_users;
mod m20250801_000005_create_workflows;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_projects::Migration),
            Box::new(m20250801_000002_create_teams::Migration),
            Box::new(m20250801_000003_create_usecases::Migration),
            Box::new(m20250801_000004_create_users::Migration),
            Box::new(m20250801_000005_create_workflows::Migration),
        ]
    }
}
