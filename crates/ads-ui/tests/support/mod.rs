use ads_ui::{
    ActorResolver, Display, ErrorNotice, ExternalError, Page, PageError, Principal, Renderer,
};
use async_trait::async_trait;
use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
};

///
/// FakePage
/// In-memory document: element ids with their `display`, plus appended notices.
///

pub struct FakePage {
    pub elements: RefCell<BTreeMap<String, Option<Display>>>,
    pub removals: RefCell<Vec<String>>,
    pub notices: RefCell<Vec<ErrorNotice>>,
    pub fail_append: bool,
}

impl FakePage {
    /// Skeleton with `#app` hidden and `#progress` visible.
    pub fn skeleton() -> Self {
        Self::with_elements(&[("app", Some(Display::None)), ("progress", None)])
    }

    pub fn with_elements(elements: &[(&str, Option<Display>)]) -> Self {
        Self {
            elements: RefCell::new(
                elements
                    .iter()
                    .map(|(id, display)| ((*id).to_string(), *display))
                    .collect(),
            ),
            removals: RefCell::new(Vec::new()),
            notices: RefCell::new(Vec::new()),
            fail_append: false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    pub fn display(&self, id: &str) -> Option<Display> {
        self.elements.borrow().get(id).copied().flatten()
    }

    pub fn removal_count(&self, id: &str) -> usize {
        self.removals.borrow().iter().filter(|r| *r == id).count()
    }
}

impl Page for FakePage {
    fn remove_element(&self, id: &str) -> bool {
        let removed = self.elements.borrow_mut().remove(id).is_some();
        if removed {
            self.removals.borrow_mut().push(id.to_string());
        }

        removed
    }

    fn set_display(&self, id: &str, display: Display) -> Result<(), PageError> {
        match self.elements.borrow_mut().get_mut(id) {
            Some(slot) => {
                *slot = Some(display);
                Ok(())
            }
            None => Err(PageError::MissingElement(id.to_string())),
        }
    }

    fn append_error_notice(&self, notice: &ErrorNotice) -> Result<(), PageError> {
        if self.fail_append {
            return Err(PageError::MissingBody);
        }
        self.notices.borrow_mut().push(notice.clone());

        Ok(())
    }
}

///
/// StubActor
///

#[derive(Debug, Eq, PartialEq)]
pub struct StubActor(pub Principal);

///
/// FakeResolver
/// Counts calls; resolves to a `StubActor` unless given an error.
///

#[derive(Default)]
pub struct FakeResolver {
    pub calls: Cell<usize>,
    pub fail_with: Option<ExternalError>,
}

impl FakeResolver {
    pub const fn failing(err: ExternalError) -> Self {
        Self {
            calls: Cell::new(0),
            fail_with: Some(err),
        }
    }
}

#[async_trait(?Send)]
impl ActorResolver for FakeResolver {
    type Actor = StubActor;

    #[allow(
        clippy::future_not_send,
        reason = "resolvers are `?Send` so browser futures can back them"
    )]
    async fn resolve(&self, canister_id: &Principal) -> Result<StubActor, ExternalError> {
        self.calls.set(self.calls.get() + 1);

        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(StubActor(*canister_id)),
        }
    }
}

///
/// FakeRenderer
/// Records what it was asked to render.
///

#[derive(Default)]
pub struct FakeRenderer {
    pub rendered: RefCell<Vec<Principal>>,
    pub fail_with: Option<ExternalError>,
}

impl Renderer<StubActor> for FakeRenderer {
    fn render(&self, canister_id: &Principal, actor: &StubActor) -> Result<(), ExternalError> {
        assert_eq!(&actor.0, canister_id);

        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.rendered.borrow_mut().push(*canister_id);

        Ok(())
    }
}
