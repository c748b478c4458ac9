// Property tests for route selection and validation
// Author: kelexine (https://github.com/kelexine)

mod common;

use common::RecordingAdapter;
use lulimi::{LanguageRegistry, LulimiError, Route, TranslationRequest, TranslationRouter};
use proptest::prelude::*;
use std::sync::Arc;

const CODES: [&str; 5] = ["NY", "BM", "TO", "LO", "EN"];

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

/// Randomize the case of an ASCII code.
fn mixed_case(code: &str, mask: u8) -> String {
    code.chars()
        .enumerate()
        .map(|(i, c)| if mask & (1 << i) != 0 { c.to_ascii_lowercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn prop_route_and_call_sequence(
        source in 0usize..5,
        target in 0usize..5,
        mask in any::<u8>(),
        text in "[A-Za-z][A-Za-z ]{0,20}",
    ) {
        prop_assume!(source != target);
        let (source, target) = (CODES[source], CODES[target]);

        let adapter = Arc::new(RecordingAdapter::new());
        let router = TranslationRouter::new(Arc::new(LanguageRegistry::zambian()), adapter.clone());
        let request = TranslationRequest::new(text.clone(), mixed_case(source, mask), mixed_case(target, mask >> 2));

        let result = runtime().block_on(router.translate(request)).unwrap();
        let calls = adapter.calls();

        if source == "EN" || target == "EN" {
            prop_assert_eq!(result.route(), Route::Direct);
            prop_assert_eq!(calls.len(), 1);
            prop_assert_eq!(&calls[0].source, source);
            prop_assert_eq!(&calls[0].target, target);
        } else {
            prop_assert_eq!(result.route(), Route::Pivot);
            prop_assert_eq!(calls.len(), 2);
            prop_assert_eq!((calls[0].source.as_str(), calls[0].target.as_str()), (source, "EN"));
            prop_assert_eq!((calls[1].source.as_str(), calls[1].target.as_str()), ("EN", target));
        }
        prop_assert_eq!(calls[0].text.as_str(), text.trim());
        prop_assert!(result.elapsed_millis() >= 0.0);
        prop_assert_eq!(router.route_for(source, target).unwrap(), result.route());
    }

    #[test]
    fn prop_identical_languages_never_reach_adapter(code in 0usize..5, mask in any::<u8>()) {
        let adapter = Arc::new(RecordingAdapter::new());
        let router = TranslationRouter::new(Arc::new(LanguageRegistry::zambian()), adapter.clone());
        let request = TranslationRequest::new("Hi", mixed_case(CODES[code], mask), CODES[code]);

        let err = runtime().block_on(router.translate(request)).unwrap_err();
        prop_assert!(matches!(err, LulimiError::IdenticalLanguages(_)));
        prop_assert_eq!(adapter.call_count(), 0);
    }

    #[test]
    fn prop_unregistered_codes_rejected(code in "[A-Z]{1,3}", target in 0usize..5) {
        prop_assume!(!CODES.contains(&code.as_str()));

        let adapter = Arc::new(RecordingAdapter::new());
        let router = TranslationRouter::new(Arc::new(LanguageRegistry::zambian()), adapter.clone());
        let request = TranslationRequest::new("Hi", code, CODES[target]);

        let err = runtime().block_on(router.translate(request)).unwrap_err();
        prop_assert!(matches!(err, LulimiError::UnknownLanguage(_)));
        prop_assert_eq!(adapter.call_count(), 0);
    }

    #[test]
    fn prop_blank_text_rejected(text in "[ \t\n\r]{0,12}") {
        let adapter = Arc::new(RecordingAdapter::new());
        let router = TranslationRouter::new(Arc::new(LanguageRegistry::zambian()), adapter.clone());

        let err = runtime()
            .block_on(router.translate(TranslationRequest::new(text, "EN", "TO")))
            .unwrap_err();
        prop_assert!(matches!(err, LulimiError::EmptyInput));
        prop_assert_eq!(adapter.call_count(), 0);
    }
}
