use uuid::Uuid;

use crate::error::ApiError;
use crate::models::gigs::{self, GigStatus};

/// Pure authorization decisions over already-fetched entity state.
///
/// Callers are responsible for fetching the gig (and reporting NotFound if it
/// is absent) before asking; these functions never touch the store.

/// May `caller` submit a bid on `gig`?
///
/// `already_bid` is the result of the caller's duplicate lookup for the
/// (gig, caller) pair.
pub fn check_submit_bid(gig: &gigs::Model, caller: Uuid, already_bid: bool) -> Result<(), ApiError> {
    if gig.status != GigStatus::Open {
        return Err(ApiError::InvalidState(
            "Gig is no longer open for bidding".to_string(),
        ));
    }

    if gig.owner_id == caller {
        return Err(ApiError::InvalidState(
            "You cannot bid on your own gig".to_string(),
        ));
    }

    if already_bid {
        return Err(ApiError::Conflict(
            "You have already bid on this gig".to_string(),
        ));
    }

    Ok(())
}

/// May `caller` view the bids on `gig`? Owner only.
pub fn check_view_bids(gig: &gigs::Model, caller: Uuid) -> Result<(), ApiError> {
    if gig.owner_id != caller {
        return Err(ApiError::Forbidden(
            "Only the gig owner can view bids".to_string(),
        ));
    }

    Ok(())
}

/// May `caller` hire a bidder on `gig`? Owner only.
pub fn check_hire(gig: &gigs::Model, caller: Uuid) -> Result<(), ApiError> {
    if gig.owner_id != caller {
        return Err(ApiError::Forbidden(
            "Only the gig owner can hire freelancers".to_string(),
        ));
    }

    Ok(())
}
