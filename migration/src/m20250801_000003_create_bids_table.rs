use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `bids` table and its columns.
#[derive(DeriveIden)]
enum Bids {
    Table,
    Id,
    GigId,
    FreelancerId,
    Message,
    Price,
    Status,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Gigs {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bids::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bids::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Bids::GigId).uuid().not_null())
                    .col(ColumnDef::new(Bids::FreelancerId).uuid().not_null())
                    .col(ColumnDef::new(Bids::Message).text().not_null())
                    .col(ColumnDef::new(Bids::Price).double().not_null())
                    .col(ColumnDef::new(Bids::Status).string().not_null())
                    .col(
                        ColumnDef::new(Bids::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bids_gig_id")
                            .from(Bids::Table, Bids::GigId)
                            .to(Gigs::Table, Gigs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bids_freelancer_id")
                            .from(Bids::Table, Bids::FreelancerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One bid per (gig, freelancer) pair — enforced at the schema level
        // so a duplicate slipping past the pre-insert check still fails.
        manager
            .create_index(
                Index::create()
                    .name("idx_bids_gig_freelancer_unique")
                    .table(Bids::Table)
                    .col(Bids::GigId)
                    .col(Bids::FreelancerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bids::Table).to_owned())
            .await
    }
}
