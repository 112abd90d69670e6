use crate::charts::ChartSet;
use crate::error::FetchFailure;
use crate::summary::DashboardSummary;
use api_client::AnalyticsApi;
use core_types::AnalyticsAggregate;
use std::sync::Arc;
use tokio::sync::watch;

/// Fetches all five reports concurrently and joins them.
///
/// Resolves only once every request has resolved, or as soon as one fails.
/// There is no retry and no partial result: any failure becomes `FetchFailure`.
pub async fn fetch_aggregate<A>(api: &A) -> Result<AnalyticsAggregate, FetchFailure>
where
    A: AnalyticsApi + ?Sized,
{
    let joined = tokio::try_join!(
        api.revenue(),
        api.orders(),
        api.products(),
        api.customers(),
        api.conversion()
    );

    match joined {
        Ok((revenue, orders, products, customers, conversion)) => Ok(AnalyticsAggregate {
            revenue,
            orders,
            products,
            customers,
            conversion,
        }),
        Err(error) => {
            tracing::warn!(error = %error, "Error fetching analytics.");
            Err(FetchFailure)
        }
    }
}

/// What the dashboard shows. `Ready` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Ready(Arc<AnalyticsAggregate>),
    Failed,
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn aggregate(&self) -> Option<&AnalyticsAggregate> {
        match self {
            DashboardState::Ready(aggregate) => Some(aggregate.as_ref()),
            _ => None,
        }
    }

    /// Chart input for the current state. Recomputed on every call; nothing
    /// is produced unless the aggregate is ready.
    pub fn charts(&self) -> Option<ChartSet> {
        self.aggregate().map(ChartSet::from_aggregate)
    }

    pub fn summary(&self) -> Option<DashboardSummary> {
        self.aggregate().map(DashboardSummary::from_aggregate)
    }
}

/// A mounted analytics dashboard.
///
/// Mounting starts exactly one fetch cycle. Dropping the dashboard before the
/// cycle resolves unmounts it: the fetch runs to completion and its result is
/// discarded. To fetch again, mount a new dashboard.
#[derive(Debug)]
pub struct Dashboard {
    state: watch::Receiver<DashboardState>,
}

impl Dashboard {
    /// Must be called from within a Tokio runtime.
    pub fn mount(api: Arc<dyn AnalyticsApi>) -> Self {
        let (state_tx, state_rx) = watch::channel(DashboardState::Loading);

        tokio::spawn(async move {
            let next = match fetch_aggregate(api.as_ref()).await {
                Ok(aggregate) => DashboardState::Ready(Arc::new(aggregate)),
                Err(FetchFailure) => DashboardState::Failed,
            };
            if state_tx.send(next).is_err() {
                tracing::debug!("Dashboard unmounted before analytics resolved; result discarded.");
            }
        });

        Self { state: state_rx }
    }

    /// The current state, without waiting.
    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Waits until the fetch cycle has resolved and returns the terminal state.
    pub async fn settled(&mut self) -> DashboardState {
        match self.state.wait_for(DashboardState::is_terminal).await {
            Ok(state) => DashboardState::clone(&state),
            // The fetch task ended without publishing, e.g. it panicked.
            Err(_) => DashboardState::Failed,
        }
    }
}
