#![allow(dead_code)]

//! Shared test support: a scripted in-memory driver.

use loquent::prelude::*;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A driver double that replays scripted results and records every
/// statement it receives.
type Reply = std::result::Result<ExecResult, DriverError>;

#[derive(Default)]
pub struct ScriptedExec {
    script: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl ScriptedExec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result carrying rows.
    pub fn push_rows(&self, rows: Vec<Row>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(ExecResult::with_rows(rows)));
    }

    /// Queue a result reporting affected rows.
    pub fn push_affected(&self, n: u64) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(ExecResult::with_affected(n)));
    }

    /// Queue a result reporting a generated insert id.
    pub fn push_insert_id(&self, id: i64) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(ExecResult::with_insert_id(id)));
    }

    /// Queue a driver failure.
    pub fn push_error(&self, message: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(DriverError::new(message)));
    }

    /// Every `(sql, params)` pair dispatched so far, in order.
    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of statements dispatched so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Executor for ScriptedExec {
    fn execute(
        &self,
        _cx: &Cx,
        sql: &str,
        params: &[Value],
    ) -> impl Future<Output = Outcome<ExecResult, DriverError>> + Send {
        self.calls
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        let reply = self.script.lock().unwrap().pop_front();
        async move {
            match reply {
                Some(Ok(result)) => Outcome::Ok(result),
                Some(Err(e)) => Outcome::Err(e),
                // An unscripted statement succeeds with an empty result.
                None => Outcome::Ok(ExecResult::default()),
            }
        }
    }
}

/// Unwrap an `Outcome`, panicking with context on anything but `Ok`.
pub fn unwrap_outcome<T>(outcome: Outcome<T, Error>) -> T {
    match outcome {
        Outcome::Ok(v) => v,
        Outcome::Err(e) => panic!("unexpected error: {e}"),
        Outcome::Cancelled(r) => panic!("cancelled: {r:?}"),
        Outcome::Panicked(p) => panic!("panicked: {p:?}"),
    }
}

/// Build a result row from `(column, value)` pairs.
pub fn row(pairs: &[(&str, Value)]) -> Row {
    Row::new(
        pairs.iter().map(|(name, _)| (*name).to_string()).collect(),
        pairs.iter().map(|(_, value)| value.clone()).collect(),
    )
}
