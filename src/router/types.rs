// Request, result and route types for the translation router
// Author: kelexine (https://github.com/kelexine)

use crate::languages::LanguageCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a language pair is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// One inference call; one side of the pair is the pivot language.
    Direct,
    /// Two chained inference calls through the pivot language.
    Pivot,
}

impl Route {
    /// Pure function of the pair. Assumes `source != target`.
    pub fn select(source: &LanguageCode, target: &LanguageCode, pivot: &LanguageCode) -> Self {
        if source == pivot || target == pivot {
            Route::Direct
        } else {
            Route::Pivot
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Direct => "direct",
            Route::Pivot => "pivot",
        }
    }

    /// Number of inference calls this route makes.
    pub fn hop_count(&self) -> usize {
        match self {
            Route::Direct => 1,
            Route::Pivot => 2,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered inference calls for one language pair. Each hop's output is the
/// next hop's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    route: Route,
    hops: Vec<(LanguageCode, LanguageCode)>,
}

impl RoutePlan {
    /// Plan a validated pair. Assumes `source != target`.
    pub fn new(source: &LanguageCode, target: &LanguageCode, pivot: &LanguageCode) -> Self {
        let route = Route::select(source, target, pivot);
        let mut hops = Vec::with_capacity(route.hop_count());

        match route {
            Route::Direct => hops.push((source.clone(), target.clone())),
            Route::Pivot => {
                hops.push((source.clone(), pivot.clone()));
                hops.push((pivot.clone(), target.clone()));
            }
        }

        Self { route, hops }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// `(source, target)` of each call, in execution order.
    pub fn hops(&self) -> &[(LanguageCode, LanguageCode)] {
        &self.hops
    }
}

/// Raw translation input as received from a client. Language codes are
/// unvalidated until the router canonicalizes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
    #[serde(alias = "source_lang")]
    pub source_lang: String,
    #[serde(alias = "target_lang")]
    pub target_lang: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// Outcome of one successful translation. Built once by the router and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    translated_text: String,
    source_lang: LanguageCode,
    target_lang: LanguageCode,
    route: Route,
    elapsed_millis: f64,
}

impl TranslationResult {
    pub(crate) fn new(
        translated_text: String,
        source_lang: LanguageCode,
        target_lang: LanguageCode,
        route: Route,
        elapsed_millis: f64,
    ) -> Self {
        Self {
            translated_text,
            source_lang,
            target_lang,
            route,
            elapsed_millis,
        }
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn source_lang(&self) -> &LanguageCode {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &LanguageCode {
        &self.target_lang
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Wall-clock time in milliseconds, rounded to two decimals.
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed_millis
    }
}

/// Fixed service status snapshot. Not derived from live health checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalStatus {
    pub status: &'static str,
    pub api_version: &'static str,
    pub models_loaded: bool,
    pub pivot_strategy_active: bool,
}

impl Default for OperationalStatus {
    fn default() -> Self {
        Self {
            status: "Operational",
            api_version: "v1",
            models_loaded: true,
            pivot_strategy_active: true,
        }
    }
}
