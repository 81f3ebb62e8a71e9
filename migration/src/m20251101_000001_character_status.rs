use sea_orm_migration::{prelude::*, schema::*};

static IDX_CHARACTER_STATUS_EVENT_QUEUED_AT: &str = "idx-character_status-event_queued_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacterStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(CharacterStatus::Id))
                    .col(big_integer_uniq(CharacterStatus::CharacterId))
                    .col(big_integer_null(CharacterStatus::SolarsystemId))
                    .col(big_integer_null(CharacterStatus::StationId))
                    .col(big_integer_null(CharacterStatus::StructureId))
                    .col(string_null(CharacterStatus::ShipName))
                    .col(big_integer_null(CharacterStatus::ShipTypeId))
                    .col(big_integer_null(CharacterStatus::ShipItemId))
                    .col(timestamp_null(CharacterStatus::EventQueuedAt))
                    .col(timestamp(CharacterStatus::CreatedAt))
                    .col(timestamp(CharacterStatus::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Notifier polls for records with a queued event
        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_STATUS_EVENT_QUEUED_AT)
                    .table(CharacterStatus::Table)
                    .col(CharacterStatus::EventQueuedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_STATUS_EVENT_QUEUED_AT)
                    .table(CharacterStatus::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CharacterStatus::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CharacterStatus {
    Table,
    Id,
    CharacterId,
    SolarsystemId,
    StationId,
    StructureId,
    ShipName,
    ShipTypeId,
    ShipItemId,
    EventQueuedAt,
    CreatedAt,
    UpdatedAt,
}
