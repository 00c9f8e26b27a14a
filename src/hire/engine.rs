use std::sync::Arc;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::db::bids as bid_db;
use crate::db::gigs as gig_db;
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::hire::guard;
use crate::models::bids::{BidStatus, HiredBid};
use crate::models::gigs::GigStatus;
use crate::notify::{BidHiredEvent, EventSink};

/// How the engine applies the three hire mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxMode {
    /// All three mutations inside one all-or-nothing transaction.
    Transactional,
    /// Degraded: the same mutations, same order, no rollback. A crash
    /// mid-sequence can leave the gig assigned with bids still pending.
    Sequential,
}

/// Executes the hire transition: gig open→assigned, the target bid
/// pending→hired, every other pending bid on the gig →rejected.
///
/// Both execution modes run the exact same precondition checks and mutation
/// sequence ([`execute_hire`], generic over the connection); the mode only
/// decides whether a transaction wraps them.
#[derive(Clone)]
pub struct HireEngine {
    db: DatabaseConnection,
    sink: Arc<dyn EventSink>,
    mode: TxMode,
}

impl HireEngine {
    /// Build an engine, probing once whether the backend can open
    /// transactions. If it cannot, the engine is pinned to sequential mode
    /// for its lifetime and says so in the log.
    pub async fn connect(db: DatabaseConnection, sink: Arc<dyn EventSink>) -> Self {
        let mode = match db.begin().await {
            Ok(probe) => {
                let _ = probe.rollback().await;
                TxMode::Transactional
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "store does not support transactions; hire will run in degraded sequential mode"
                );
                TxMode::Sequential
            }
        };

        Self { db, sink, mode }
    }

    /// Build an engine with a fixed execution mode. Used by tests and by
    /// deployments that want to skip the probe.
    pub fn with_mode(db: DatabaseConnection, sink: Arc<dyn EventSink>, mode: TxMode) -> Self {
        Self { db, sink, mode }
    }

    pub fn mode(&self) -> TxMode {
        self.mode
    }

    /// Execute the hire transition for `bid_id` on behalf of `caller`.
    ///
    /// On success the `bidHired` event is emitted exactly once, after the
    /// mutations are durable. On any precondition failure nothing is mutated
    /// and no event fires.
    pub async fn hire(&self, caller: Uuid, bid_id: Uuid) -> Result<HiredBid, ApiError> {
        let outcome = match self.mode {
            TxMode::Transactional => match self.db.begin().await {
                Ok(txn) => match execute_hire(&txn, caller, bid_id).await {
                    Ok(outcome) => {
                        txn.commit().await?;
                        Ok(outcome)
                    }
                    Err(err) => {
                        if let Err(rollback_err) = txn.rollback().await {
                            tracing::error!(error = %rollback_err, "hire rollback failed");
                        }
                        Err(err)
                    }
                },
                // Transient: the store refused to open a transaction right
                // now. Not a client error — fall back for this request.
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        %bid_id,
                        "could not begin hire transaction; executing sequentially without rollback"
                    );
                    execute_hire(&self.db, caller, bid_id).await
                }
            },
            TxMode::Sequential => {
                tracing::warn!(
                    %bid_id,
                    "hire executing in degraded sequential mode (no multi-record atomicity)"
                );
                execute_hire(&self.db, caller, bid_id).await
            }
        }?;

        tracing::info!(
            bid_id = %outcome.bid.id,
            gig_id = %outcome.bid.gig_id,
            freelancer_id = %outcome.freelancer_id,
            rejected = outcome.rejected,
            "freelancer hired"
        );

        // Best-effort, fire-and-forget: delivery failure never unwinds the
        // committed hire.
        self.sink.bid_hired(BidHiredEvent {
            bid_id: outcome.bid.id,
            freelancer_id: outcome.freelancer_id,
            gig_title: outcome.bid.gig_title.clone(),
            message: format!("You have been hired for {}!", outcome.bid.gig_title),
        });

        Ok(outcome.bid)
    }
}

struct HireOutcome {
    bid: HiredBid,
    freelancer_id: Uuid,
    rejected: u64,
}

/// The hire transition itself: precondition checks against current persisted
/// state, then the three mutations in fixed order.
///
/// Generic over [`ConnectionTrait`] so the identical code path runs inside a
/// transaction or directly against the pool. Each mutation carries its
/// precondition in its WHERE clause; zero rows affected means a concurrent
/// hire won the race, and the attempt fails before any further step.
async fn execute_hire<C: ConnectionTrait>(
    conn: &C,
    caller: Uuid,
    bid_id: Uuid,
) -> Result<HireOutcome, ApiError> {
    // Preconditions, in the order the API reports them.
    let bid = bid_db::get_bid_by_id(conn, bid_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Bid not found".to_string()))?;

    let gig = gig_db::get_gig_by_id(conn, bid.gig_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Gig not found".to_string()))?;

    guard::check_hire(&gig, caller)?;

    if gig.status != GigStatus::Open {
        return Err(ApiError::InvalidState("Gig is no longer open".to_string()));
    }

    if bid.status != BidStatus::Pending {
        return Err(ApiError::InvalidState(
            "Bid is no longer pending".to_string(),
        ));
    }

    // Mutations. The conditional updates re-validate the lifecycle state at
    // mutation time, which is what keeps two racing hires from both
    // committing.
    if gig_db::assign_gig_if_open(conn, gig.id).await? == 0 {
        return Err(ApiError::InvalidState("Gig is no longer open".to_string()));
    }

    if bid_db::mark_bid_hired_if_pending(conn, bid.id).await? == 0 {
        return Err(ApiError::InvalidState(
            "Bid is no longer pending".to_string(),
        ));
    }

    let rejected = bid_db::reject_other_pending_bids(conn, gig.id, bid.id).await?;

    // Resolve display fields for the response.
    let freelancer = user_db::get_user_by_id(conn, bid.freelancer_id).await?;

    Ok(HireOutcome {
        freelancer_id: bid.freelancer_id,
        rejected,
        bid: HiredBid {
            id: bid.id,
            gig_id: gig.id,
            gig_title: gig.title,
            freelancer: freelancer.map(Into::into),
            message: bid.message,
            price: bid.price,
            status: BidStatus::Hired,
            created_at: bid.created_at,
        },
    })
}
