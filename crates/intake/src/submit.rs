use crate::Lead;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Acknowledgement from the lead submission boundary.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    /// Opaque identifier assigned by the receiving system.
    pub id: String,
}

/// External boundary accepting leads.
///
/// Selected via dependency injection: the CLI wires up `HttpSubmitter`
/// when an intake endpoint is configured, `AcceptAllSubmitter` otherwise,
/// and tests script outcomes with `ScriptedSubmitter`.
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    async fn submit(&self, lead: &Lead) -> anyhow::Result<SubmissionReceipt>;
}

/// Production implementation: POSTs the lead as JSON to the configured
/// endpoint and expects a 2xx response.
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

/// Endpoint acknowledgement body; the id is optional so simple CRM
/// webhooks that return an empty body still count as accepted.
#[derive(Debug, Deserialize)]
struct ReceiptBody {
    id: Option<String>,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpSubmitter {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl LeadSubmitter for HttpSubmitter {
    async fn submit(&self, lead: &Lead) -> anyhow::Result<SubmissionReceipt> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(lead)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Intake endpoint returned {}", status);
        }

        let id = response
            .json::<ReceiptBody>()
            .await
            .ok()
            .and_then(|body| body.id)
            .unwrap_or_else(|| "accepted".to_string());

        Ok(SubmissionReceipt { id })
    }
}

/// Development implementation: accepts every lead and assigns a local
/// sequential id. Used by the preview server when no endpoint is set.
#[derive(Default)]
pub struct AcceptAllSubmitter {
    counter: AtomicU64,
}

impl AcceptAllSubmitter {
    pub fn new() -> Self {
        AcceptAllSubmitter::default()
    }
}

#[async_trait]
impl LeadSubmitter for AcceptAllSubmitter {
    async fn submit(&self, _lead: &Lead) -> anyhow::Result<SubmissionReceipt> {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(SubmissionReceipt {
            id: format!("preview-{}", n),
        })
    }
}

/// Test double: records every submitted lead and replays scripted
/// outcomes in order. With nothing scripted it acks unconditionally.
#[derive(Default)]
pub struct ScriptedSubmitter {
    outcomes: Mutex<VecDeque<Result<SubmissionReceipt, String>>>,
    submitted: Mutex<Vec<Lead>>,
}

impl ScriptedSubmitter {
    pub fn new() -> Self {
        ScriptedSubmitter::default()
    }

    pub fn script_ok(&self, id: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(SubmissionReceipt { id: id.to_string() }));
    }

    pub fn script_err(&self, msg: &str) {
        self.outcomes.lock().unwrap().push_back(Err(msg.to_string()));
    }

    /// Leads that actually reached the boundary.
    pub fn submitted(&self) -> Vec<Lead> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl LeadSubmitter for ScriptedSubmitter {
    async fn submit(&self, lead: &Lead) -> anyhow::Result<SubmissionReceipt> {
        self.submitted.lock().unwrap().push(lead.clone());
        match self.outcomes.lock().unwrap().pop_front() {
            Some(Ok(receipt)) => Ok(receipt),
            Some(Err(msg)) => Err(anyhow::anyhow!(msg)),
            None => Ok(SubmissionReceipt {
                id: "scripted".to_string(),
            }),
        }
    }
}
