use std::sync::Arc;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::ArtworkFetcher;
use crate::domain::models::Action;
use crate::domain::models::BanList;
use crate::domain::models::Event;

async fn fetch_artwork(
    fetcher: &ArtworkFetcher,
    generation: u64,
    ban_list: BanList,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let mut rng = StdRng::from_entropy();
    let event = match fetcher.fetch(&ban_list, &mut rng).await {
        Ok(artwork) => {
            tracing::info!(generation = generation, artwork_id = artwork.id, "artwork selected");
            Event::ArtworkLoaded {
                generation,
                artwork,
            }
        }
        Err(error) => Event::FetchFailed { generation, error },
    };

    event_tx.send(event)?;
    Ok(())
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs fetches requested by the UI, one at a time. A new request aborts
    /// the worker of the previous one. Returns when the action channel closes.
    pub async fn start(
        fetcher: ArtworkFetcher,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let fetcher_arc = Arc::new(fetcher);

        let mut worker: JoinHandle<Result<()>> = tokio::spawn(async { Ok(()) });

        while let Some(action) = rx.recv().await {
            match action {
                Action::FetchAbort => {
                    worker.abort();
                }
                Action::FetchArtwork {
                    generation,
                    ban_list,
                } => {
                    worker.abort();

                    tracing::debug!(generation = generation, bans = ban_list.len(), "fetch requested");
                    let fetcher_worker = fetcher_arc.clone();
                    let worker_event_tx = event_tx.clone();
                    worker = tokio::spawn(async move {
                        fetch_artwork(&fetcher_worker, generation, ban_list, &worker_event_tx).await
                    });
                }
            }
        }

        worker.abort();
        Ok(())
    }
}
