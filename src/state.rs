use crate::analytics::group::group_by_strategy;
use crate::config::AppConfig;
use crate::record::Record;
use portable_atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

// ── Messages OUT to dashboard clients ──

#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type")]
pub enum WsMessage {
    #[serde(rename = "dataset_replaced")]
    DatasetReplaced {
        rows: usize,
        strategies: usize,
        source: String,
        timestamp: String,
    },
}

// ── Performance counters (lock-free) ──

pub struct PerfCounters {
    pub uploads_accepted: AtomicU64,
    pub uploads_rejected: AtomicU64,
    pub rows_ingested: AtomicU64,
    pub stories_served: AtomicU64,
    pub ws_messages_sent: AtomicU64,
}

impl PerfCounters {
    pub fn new() -> Self {
        Self {
            uploads_accepted: AtomicU64::new(0),
            uploads_rejected: AtomicU64::new(0),
            rows_ingested: AtomicU64::new(0),
            stories_served: AtomicU64::new(0),
            ws_messages_sent: AtomicU64::new(0),
        }
    }
}

// ── Application shared state (channels, not locks) ──

pub struct AppState {
    pub config: AppConfig,

    // Upload -> views: latest dataset (watch = single producer, multi consumer)
    pub dataset_tx: watch::Sender<Arc<Vec<Record>>>,
    pub dataset_rx: watch::Receiver<Arc<Vec<Record>>>,

    // Upload -> dashboard clients: refresh events (broadcast for WS)
    pub ws_tx: broadcast::Sender<WsMessage>,

    // Lock-free performance counters
    pub counters: PerfCounters,
}

impl AppState {
    pub fn new(config: AppConfig, initial: Vec<Record>) -> Arc<Self> {
        let (ws_tx, _) = broadcast::channel(64);
        let (dataset_tx, dataset_rx) = watch::channel(Arc::new(initial));

        Arc::new(Self {
            config,
            dataset_tx,
            dataset_rx,
            ws_tx,
            counters: PerfCounters::new(),
        })
    }

    /// Latest dataset: a cheap Arc clone off the watch channel.
    pub fn dataset(&self) -> Arc<Vec<Record>> {
        self.dataset_rx.borrow().clone()
    }

    /// Replace the dataset and notify connected dashboards.
    /// Returns the (rows, strategies) summary for the upload response.
    pub fn replace_dataset(&self, records: Vec<Record>, source: &str) -> (usize, usize) {
        let rows = records.len();
        let strategies = group_by_strategy(&records).len();

        self.counters.rows_ingested.fetch_add(rows as u64, Ordering::Relaxed);
        let _ = self.dataset_tx.send(Arc::new(records));

        self.broadcast(WsMessage::DatasetReplaced {
            rows,
            strategies,
            source: source.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        });

        (rows, strategies)
    }

    /// Summary of the current dataset, sent to each WS client on connect.
    pub fn dataset_summary(&self) -> WsMessage {
        let dataset = self.dataset();
        WsMessage::DatasetReplaced {
            rows: dataset.len(),
            strategies: group_by_strategy(&dataset).len(),
            source: "current".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    #[inline]
    pub fn broadcast(&self, msg: WsMessage) {
        self.counters.ws_messages_sent.fetch_add(1, Ordering::Relaxed);
        let _ = self.ws_tx.send(msg);
    }
}
