use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Bids {
    Table,
    GigId,
    FreelancerId,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Gigs {
    Table,
    Status,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Covers the reject-other-pending-bids update and the per-gig listing.
        manager
            .create_index(
                Index::create()
                    .name("idx_bids_gig_status")
                    .table(Bids::Table)
                    .col(Bids::GigId)
                    .col(Bids::Status)
                    .to_owned(),
            )
            .await?;

        // Covers the my-bids listing (newest first).
        manager
            .create_index(
                Index::create()
                    .name("idx_bids_freelancer_created")
                    .table(Bids::Table)
                    .col(Bids::FreelancerId)
                    .col(Bids::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Covers the open-gigs listing.
        manager
            .create_index(
                Index::create()
                    .name("idx_gigs_status_created")
                    .table(Gigs::Table)
                    .col(Gigs::Status)
                    .col(Gigs::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_bids_gig_status")
                    .table(Bids::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_bids_freelancer_created")
                    .table(Bids::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_gigs_status_created")
                    .table(Gigs::Table)
                    .to_owned(),
            )
            .await
    }
}
