use tokio::{
    sync::oneshot::{self, error::TryRecvError},
    task::JoinHandle,
};
use tracing::{debug, info};

use crate::{
    api::{FetchFailure, HoldingsApi},
    models::Holding,
};

pub type LoadResult = Result<Vec<Holding>, FetchFailure>;

#[derive(Debug)]
pub enum LoadPoll {
    Pending,
    Ready(LoadResult),
    Closed,
}

/// The single background fetch issued when the screen starts.
///
/// Dropping the loader aborts the fetch. A result that still arrives after
/// that has no receiver and is discarded.
#[derive(Debug)]
pub struct HoldingsLoader {
    receiver: oneshot::Receiver<LoadResult>,
    task: JoinHandle<()>,
}

impl HoldingsLoader {
    pub fn spawn(api: HoldingsApi) -> Self {
        let (sender, receiver) = oneshot::channel();

        let task = tokio::spawn(async move {
            info!(url = api.url(), "fetching holdings");
            let result = api.fetch_holdings().await;
            if sender.send(result).is_err() {
                debug!("holdings screen closed before fetch completed, discarding result");
            }
        });

        Self { receiver, task }
    }

    pub fn poll(&mut self) -> LoadPoll {
        match self.receiver.try_recv() {
            Ok(result) => LoadPoll::Ready(result),
            Err(TryRecvError::Empty) => LoadPoll::Pending,
            Err(TryRecvError::Closed) => LoadPoll::Closed,
        }
    }

    #[cfg(test)]
    pub(crate) fn abort_handle(&self) -> tokio::task::AbortHandle {
        self.task.abort_handle()
    }
}

impl Drop for HoldingsLoader {
    fn drop(&mut self) {
        self.task.abort();
    }
}
