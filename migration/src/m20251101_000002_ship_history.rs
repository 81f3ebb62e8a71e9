use sea_orm_migration::{prelude::*, schema::*};

static IDX_SHIP_HISTORY_CHARACTER_ID: &str = "idx-ship_history-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShipHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(ShipHistory::Id))
                    .col(big_integer(ShipHistory::CharacterId))
                    .col(big_integer(ShipHistory::ShipItemId))
                    .col(big_integer(ShipHistory::ShipTypeId))
                    .col(string(ShipHistory::ShipName))
                    .col(timestamp(ShipHistory::FirstSeenAt))
                    .col(timestamp(ShipHistory::LastSeenAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHIP_HISTORY_CHARACTER_ID)
                    .table(ShipHistory::Table)
                    .col(ShipHistory::CharacterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHIP_HISTORY_CHARACTER_ID)
                    .table(ShipHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShipHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ShipHistory {
    Table,
    Id,
    CharacterId,
    ShipItemId,
    ShipTypeId,
    ShipName,
    FirstSeenAt,
    LastSeenAt,
}
