use chrono::NaiveDate;

use crate::classify;
use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketFilter {
    Available,
    Rented,
    Overdue,
    Returned,
    All,
}

#[derive(Debug, Clone)]
pub struct ListFilter {
    pub bucket: BucketFilter,
    pub search: Option<String>,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            bucket: BucketFilter::Available,
            search: None,
        }
    }
}

/// List one catalog view. The name filter runs before classification, so
/// the same term narrows every bucket consistently; each bucket then keeps
/// its own ordering.
pub fn run<S: CatalogStore>(store: &S, filter: ListFilter, today: NaiveDate) -> Result<CmdResult> {
    let suits = helpers::load_catalog(store, today)?;

    let suits = match &filter.search {
        Some(term) => classify::filter_by_name(&suits, term),
        None => suits,
    };

    let listed = match filter.bucket {
        BucketFilter::All => suits,
        bucket => {
            let views = classify::classify(&suits, today);
            match bucket {
                BucketFilter::Available => views.available,
                BucketFilter::Rented => views.rented_active,
                BucketFilter::Overdue => views.overdue,
                BucketFilter::Returned => views.returned,
                BucketFilter::All => unreachable!(),
            }
        }
    };

    Ok(CmdResult::default().with_listed_suits(listed))
}
