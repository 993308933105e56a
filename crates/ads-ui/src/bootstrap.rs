//!
//! Bootstrap sequencer.
//!
//! config → principal → actor (the one `.await`) → render → reveal.
//! Any failure short-circuits into [`report`], which shows the error in the
//! page, drops the loading indicator, and hands the error back to the caller.
//!

use crate::{
    collab::{ActorResolver, Renderer},
    config::BootstrapConfig,
    error::BootstrapError,
    log,
    log::Topic,
    page::{Display, ErrorNotice, Page, PageMarkers},
};
use candid::Principal;

///
/// Session
/// The canister and actor handle a successful bootstrap ends with.
///

#[derive(Debug)]
pub struct Session<A> {
    pub canister_id: Principal,
    pub actor: A,
}

///
/// Bootstrap
///

pub struct Bootstrap<'a, P, R, V> {
    config: &'a BootstrapConfig,
    page: &'a P,
    resolver: &'a R,
    renderer: &'a V,
}

impl<'a, P, R, V> Bootstrap<'a, P, R, V>
where
    P: Page,
    R: ActorResolver,
    V: Renderer<R::Actor>,
{
    pub const fn new(
        config: &'a BootstrapConfig,
        page: &'a P,
        resolver: &'a R,
        renderer: &'a V,
    ) -> Self {
        Self {
            config,
            page,
            resolver,
            renderer,
        }
    }

    /// Run the sequence once. On failure the error has already been shown in
    /// the page by the time it is returned.
    #[allow(
        clippy::future_not_send,
        reason = "resolvers are `?Send` so browser futures can back them"
    )]
    pub async fn run(&self) -> Result<Session<R::Actor>, BootstrapError> {
        match self.boot().await {
            Ok(session) => {
                log!(Topic::Init, Ok, "candid ui ready for {}", session.canister_id);
                Ok(session)
            }
            Err(err) => {
                report(self.page, &self.config.markers, &err);
                Err(err)
            }
        }
    }

    #[allow(
        clippy::future_not_send,
        reason = "resolvers are `?Send` so browser futures can back them"
    )]
    async fn boot(&self) -> Result<Session<R::Actor>, BootstrapError> {
        let text = self.config.canister_id_text()?;

        let canister_id =
            Principal::from_text(text).map_err(|source| BootstrapError::IdentifierParse {
                text: text.to_string(),
                source,
            })?;

        log!(Topic::Actor, Info, "resolving actor for {canister_id}");
        let actor = self
            .resolver
            .resolve(&canister_id)
            .await
            .map_err(BootstrapError::ActorResolution)?;

        self.renderer
            .render(&canister_id, &actor)
            .map_err(BootstrapError::Render)?;
        log!(Topic::Render, Debug, "rendered interface for {canister_id}");

        let markers = &self.config.markers;
        self.page.remove_element(&markers.progress);
        self.page.set_display(&markers.app, Display::Block)?;

        Ok(Session { canister_id, actor })
    }
}

///
/// report
/// Show `err` in the page and drop the loading indicator. Also used by entry
/// points for failures that happen before a `Bootstrap` exists.
///

pub fn report(page: &impl Page, markers: &PageMarkers, err: &BootstrapError) {
    log!(Topic::Init, Error, "{}: {err}", err.kind());

    let notice = ErrorNotice::new(err.trace());
    if let Err(page_err) = page.append_error_notice(&notice) {
        log!(Topic::Page, Warn, "could not show error notice: {page_err}");
    }

    if !page.remove_element(&markers.progress) {
        log!(Topic::Page, Debug, "#{} already removed", markers.progress);
    }
}
