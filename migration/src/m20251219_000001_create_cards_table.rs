use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cards::Table)
                    .if_not_exists()
                    .col(pk_auto(Cards::Id))
                    .col(integer(Cards::UserId))
                    .col(string(Cards::Word))
                    .col(string(Cards::Transcription))
                    .col(string(Cards::Translation))
                    .col(timestamp_with_time_zone(Cards::CreatedAt))
                    .col(timestamp_with_time_zone(Cards::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cards_user_id")
                    .table(Cards::Table)
                    .col(Cards::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cards::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cards {
    Table,
    Id,
    UserId,
    Word,
    Transcription,
    Translation,
    CreatedAt,
    UpdatedAt,
}
