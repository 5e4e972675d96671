use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{EntityTrait, Schema};

use crate::entity::{Characters, Favorites, Planets, Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // favorites last: it carries foreign keys into the other three.
        create(manager, &schema, Users).await?;
        create(manager, &schema, Characters).await?;
        create(manager, &schema, Planets).await?;
        create(manager, &schema, Favorites).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Characters).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

async fn create<E: EntityTrait>(
    manager: &SchemaManager<'_>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    manager
        .create_table(
            schema
                .create_table_from_entity(entity)
                .if_not_exists()
                .to_owned(),
        )
        .await
}
