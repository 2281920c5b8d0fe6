//! Last prediction result, shared between the Predict and Results pages.

use dioxus::prelude::*;

use crate::app::api::PredictionResponse;

#[derive(Clone, Copy)]
pub struct PredictionContext {
    last: Signal<Option<PredictionResponse>>,
}

impl PredictionContext {
    /// The most recent response, if any
    pub fn result(&self) -> Option<PredictionResponse> {
        self.last.read().clone()
    }

    pub fn store(&self, response: PredictionResponse) {
        let mut last = self.last;
        last.set(Some(response));
    }

    pub fn clear(&self) {
        let mut last = self.last;
        last.set(None);
    }
}

/// Initialize the prediction context provider - call once at app root
pub fn use_prediction_provider() {
    let last = use_signal(|| None);
    use_context_provider(|| PredictionContext { last });
}

/// Access the prediction context from any component
pub fn use_prediction() -> PredictionContext {
    use_context::<PredictionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static CONTEXT: Cell<Option<PredictionContext>> = const { Cell::new(None) };
    }

    #[component]
    fn ContextHost() -> Element {
        use_prediction_provider();
        CONTEXT.with(|c| c.set(Some(use_prediction())));
        rsx! {}
    }

    #[test]
    fn test_store_then_clear() {
        let mut dom = VirtualDom::new(ContextHost);
        dom.rebuild_in_place();
        let ctx = CONTEXT.with(|c| c.get()).expect("host rendered");

        assert_eq!(dom.in_runtime(|| ctx.result()), None);

        let response = PredictionResponse {
            probability: 0.4,
            ..Default::default()
        };
        dom.in_runtime(|| ctx.store(response.clone()));
        assert_eq!(dom.in_runtime(|| ctx.result()), Some(response));

        dom.in_runtime(|| ctx.clear());
        assert_eq!(dom.in_runtime(|| ctx.result()), None);
    }
}
