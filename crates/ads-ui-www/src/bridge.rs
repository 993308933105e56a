//! Actor resolution and rendering through the host page's `candidUi` global.
//!
//! Host contract:
//!
//! ```text
//! candidUi.fetchActor(canisterId: string): Promise<Actor>
//! candidUi.render(canisterId: string, actor: Actor): void
//! ```
//!
//! Both calls take the canister id as *text*, not a `Principal` object. The
//! JS side owns `Principal` construction for its own agent, so a bundle whose
//! `fetchActor`/`render` expect a `Principal` needs a thin wrapper calling
//! `Principal.fromText(canisterId)` before being exposed as `candidUi`.

use ads_ui::{ActorResolver, ExternalError, Principal, Renderer};
use async_trait::async_trait;
use wasm_bindgen::{JsCast, prelude::*};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = candidUi, js_name = fetchActor, catch)]
    async fn fetch_actor(canister_id: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = candidUi, js_name = render, catch)]
    fn render_actor(canister_id: &str, actor: &JsValue) -> Result<(), JsValue>;
}

///
/// JsActorResolver
///

pub struct JsActorResolver;

#[async_trait(?Send)]
impl ActorResolver for JsActorResolver {
    type Actor = JsValue;

    async fn resolve(&self, canister_id: &Principal) -> Result<JsValue, ExternalError> {
        fetch_actor(&canister_id.to_text())
            .await
            .map_err(|err| external_error(&err))
    }
}

///
/// JsRenderer
///

pub struct JsRenderer;

impl Renderer<JsValue> for JsRenderer {
    fn render(&self, canister_id: &Principal, actor: &JsValue) -> Result<(), ExternalError> {
        render_actor(&canister_id.to_text(), actor).map_err(|err| external_error(&err))
    }
}

/// Convert a thrown JS value, keeping `Error.stack` when there is one.
#[must_use]
pub fn external_error(value: &JsValue) -> ExternalError {
    let Some(err) = value.dyn_ref::<js_sys::Error>() else {
        return ExternalError::new(value.as_string().unwrap_or_else(|| format!("{value:?}")));
    };

    let external = ExternalError::new(String::from(err.message()));
    match js_sys::Reflect::get(value, &JsValue::from_str("stack"))
        .ok()
        .and_then(|stack| stack.as_string())
    {
        Some(stack) => external.with_stack(stack),
        None => external,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn js_error_keeps_message_and_stack() {
        let err = external_error(&js_sys::Error::new("x").into());

        assert_eq!(err.message(), "x");
        assert!(err.stack().is_some_and(|stack| !stack.is_empty()));
    }

    #[wasm_bindgen_test]
    fn thrown_string_becomes_message() {
        let err = external_error(&JsValue::from_str("boom"));

        assert_eq!(err.message(), "boom");
        assert_eq!(err.stack(), None);
    }

    #[wasm_bindgen_test]
    fn thrown_object_is_debug_formatted() {
        let err = external_error(&js_sys::Object::new().into());

        assert!(!err.message().is_empty());
        assert_eq!(err.stack(), None);
    }
}
