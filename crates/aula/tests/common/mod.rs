//! Scripted in-memory provider for gateway and tracker tests.

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::mpsc;

use aula_core::auth::{AuthEvent, AuthSubscription, AuthUser};
use aula_core::error::{ApiError, Error};
use aula_core::record::DocumentRecord;
use aula_core::traits::{DocumentStore, IdentityProvider};
use aula_core::types::{CollectionId, FieldFilter, SortDirection, SortKey};
use aula_core::Result;

#[derive(Default)]
struct Script {
    sign_in_outcomes: Mutex<VecDeque<Result<AuthUser>>>,
    sign_out_outcomes: Mutex<VecDeque<Result<()>>>,
    reset_outcomes: Mutex<VecDeque<Result<()>>>,
    query_faults: Mutex<VecDeque<Error>>,
    records: Mutex<HashMap<String, Vec<DocumentRecord>>>,
    listeners: Mutex<Vec<mpsc::UnboundedSender<AuthEvent>>>,
}

/// An in-memory provider driven by the test.
///
/// A cheap handle (like the real provider), so one instance can be
/// scripted by the test while clones serve the gateway and tracker.
/// Auth operations pop scripted outcomes; queries run against fixture
/// records with local filtering and sorting, unless a fault has been
/// queued. Auth-state events are emitted explicitly via `emit_*`.
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    script: Arc<Script>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_sign_in(&self, outcome: Result<AuthUser>) {
        self.script
            .sign_in_outcomes
            .lock()
            .unwrap()
            .push_back(outcome);
    }

    pub fn push_sign_out(&self, outcome: Result<()>) {
        self.script
            .sign_out_outcomes
            .lock()
            .unwrap()
            .push_back(outcome);
    }

    pub fn push_reset(&self, outcome: Result<()>) {
        self.script.reset_outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn push_query_fault(&self, err: Error) {
        self.script.query_faults.lock().unwrap().push_back(err);
    }

    pub fn insert_records(&self, collection: &str, records: Vec<DocumentRecord>) {
        self.script
            .records
            .lock()
            .unwrap()
            .insert(collection.to_string(), records);
    }

    /// Deliver a change notification to every registered listener.
    pub fn emit_changed(&self, user: Option<AuthUser>) {
        let mut listeners = self.script.listeners.lock().unwrap();
        listeners.retain(|tx| tx.send(AuthEvent::Changed(user.clone())).is_ok());
    }

    /// Deliver a fault notification to every registered listener.
    pub fn emit_failed(&self, code: &str, message: &str) {
        let mut listeners = self.script.listeners.lock().unwrap();
        listeners.retain(|tx| {
            let err = Error::Api(ApiError::new(
                503,
                Some(code.to_string()),
                Some(message.to_string()),
            ));
            tx.send(AuthEvent::Failed(err)).is_ok()
        });
    }

    pub fn listener_count(&self) -> usize {
        self.script.listeners.lock().unwrap().len()
    }
}

#[async_trait]
impl IdentityProvider for ScriptedProvider {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<AuthUser> {
        self.script
            .sign_in_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted sign-in outcome")
    }

    async fn sign_out(&self) -> Result<()> {
        self.script
            .sign_out_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted sign-out outcome")
    }

    async fn send_password_reset(&self, _email: &str) -> Result<()> {
        self.script
            .reset_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reset outcome")
    }

    fn subscribe(&self) -> AuthSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        self.script.listeners.lock().unwrap().push(tx);

        AuthSubscription::new(futures_util::stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|event| (event, rx))
        }))
    }
}

#[async_trait]
impl DocumentStore for ScriptedProvider {
    async fn query(
        &self,
        collection: &CollectionId,
        filter: Option<&FieldFilter>,
        order: &SortKey,
    ) -> Result<Vec<DocumentRecord>> {
        if let Some(err) = self.script.query_faults.lock().unwrap().pop_front() {
            return Err(err);
        }

        let mut records: Vec<DocumentRecord> = self
            .script
            .records
            .lock()
            .unwrap()
            .get(collection.as_str())
            .cloned()
            .unwrap_or_default();

        if let Some(filter) = filter {
            records.retain(|r| r.field(&filter.field) == Some(&filter.equals));
        }

        records.sort_by(|a, b| {
            let ordering = compare_values(a.field(&order.field), b.field(&order.field));
            match order.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        Ok(records)
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => a
                .as_f64()
                .partial_cmp(&b.as_f64())
                .unwrap_or(Ordering::Equal),
            _ => a.to_string().cmp(&b.to_string()),
        },
    }
}

/// A class record fixture.
pub fn class_record(id: &str, title: &str, category: &str) -> DocumentRecord {
    let fields = json!({ "title": title, "category": category });
    match fields {
        Value::Object(map) => DocumentRecord::new(id, map),
        _ => unreachable!(),
    }
}

/// A seminar record fixture.
pub fn seminar_record(id: &str, topic: &str, date: &str) -> DocumentRecord {
    let fields = json!({ "topic": topic, "date": date });
    match fields {
        Value::Object(map) => DocumentRecord::new(id, map),
        _ => unreachable!(),
    }
}
