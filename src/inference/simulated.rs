// Deterministic stand-in for the translation model
// Author: kelexine (https://github.com/kelexine)

use super::{InferenceAdapter, InferenceError};
use crate::languages::{LanguageCode, LanguageRegistry};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Returns fixed phrases describing the requested direction after a
/// constant delay. Output depends only on the inputs, which makes it
/// suitable for tests and demos.
pub struct SimulatedAdapter {
    registry: Arc<LanguageRegistry>,
    latency: Duration,
}

impl SimulatedAdapter {
    pub fn new(registry: Arc<LanguageRegistry>, latency: Duration) -> Self {
        Self { registry, latency }
    }

    fn name_of<'a>(&'a self, code: &'a LanguageCode) -> &'a str {
        self.registry.display_name(code).unwrap_or(code.as_str())
    }
}

#[async_trait]
impl InferenceAdapter for SimulatedAdapter {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, InferenceError> {
        debug!("Simulating {} -> {} inference ({}ms)", source, target, self.latency.as_millis());

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let pivot = self.registry.pivot();
        let output = if source == target {
            text.to_string()
        } else if target == pivot {
            format!("The {} meaning of '{}' is understood here.", self.name_of(pivot), text)
        } else if source == pivot {
            format!("'{}' is successfully localized to {}.", text, self.name_of(target))
        } else {
            format!(
                "Pivot: '{}' was converted to {} then to {}.",
                text,
                self.name_of(pivot),
                self.name_of(target)
            )
        };

        Ok(output)
    }
}
