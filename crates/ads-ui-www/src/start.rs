use crate::{
    bridge::{JsActorResolver, JsRenderer},
    bundled,
    dom::DomPage,
};
use ads_ui::{Bootstrap, BootstrapError, PageMarkers, Session, log, log::Topic, report};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

// the actor lives as long as the page does
thread_local! {
    static SESSION: RefCell<Option<Session<JsValue>>> = const { RefCell::new(None) };
}

///
/// start
///
/// Runs once when the module is instantiated. A failure has already been
/// shown in the page; the rejected promise lets the host see it too.
///

#[cfg_attr(not(test), wasm_bindgen(start))]
#[allow(
    clippy::future_not_send,
    reason = "browser futures (`JsFuture`) are not `Send`; the start task never leaves the page thread"
)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    log!(Topic::Init, Info, "{} v{}", ads_ui::CRATE_NAME, ads_ui::VERSION);

    let page = DomPage::from_window().map_err(|err| to_js_error(&err.into()))?;

    let config = match bundled::config() {
        Ok(config) => config,
        Err(err) => {
            let err = BootstrapError::from(err);
            report(&page, &PageMarkers::default(), &err);

            return Err(to_js_error(&err));
        }
    };

    let session = Bootstrap::new(&config, &page, &JsActorResolver, &JsRenderer)
        .run()
        .await
        .map_err(|err| to_js_error(&err))?;

    SESSION.with(|slot| *slot.borrow_mut() = Some(session));

    Ok(())
}

fn to_js_error(err: &BootstrapError) -> JsValue {
    let js_err = js_sys::Error::new(&err.to_string());
    js_err.set_name(&err.kind().to_string());

    match js_sys::Reflect::set(
        &js_err,
        &JsValue::from_str("stack"),
        &JsValue::from_str(&err.trace()),
    ) {
        Ok(true) => {}
        Ok(false) | Err(_) => {
            log!(Topic::Init, Warn, "could not attach trace to js error; host sees its own stack");
        }
    }

    js_err.into()
}

///
/// TESTS
///
