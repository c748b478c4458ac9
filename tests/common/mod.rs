// Shared test doubles for the router and API tests
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use async_trait::async_trait;
use lulimi::{InferenceAdapter, InferenceError, LanguageCode};
use std::sync::Mutex;
use std::time::Duration;

/// One observed adapter call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub text: String,
    pub source: String,
    pub target: String,
}

/// Adapter that records every call and answers with `[SRC>TGT] text`.
/// Can be told to fail on a given call number (1-based) or to sleep.
#[derive(Default)]
pub struct RecordingAdapter {
    calls: Mutex<Vec<Call>>,
    fail_on_call: Option<usize>,
    latency: Duration,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceAdapter for RecordingAdapter {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, InferenceError> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(Call {
                text: text.to_string(),
                source: source.to_string(),
                target: target.to_string(),
            });
            calls.len()
        };

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.fail_on_call == Some(call_number) {
            return Err(InferenceError::Unavailable(format!("call {} failed", call_number)));
        }

        Ok(format!("[{}>{}] {}", source, target, text))
    }
}
