use async_trait::async_trait;
use candid::Principal;
use thiserror::Error as ThisError;

///
/// ExternalError
///
/// Failure reported by a collaborator outside this crate (the agent or the
/// Candid UI renderer). Browser collaborators hand over `Error.stack`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct ExternalError {
    message: String,
    stack: Option<String>,
}

impl ExternalError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        let stack = stack.into();
        self.stack = (!stack.trim().is_empty()).then_some(stack);
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }
}

///
/// ActorResolver
///
/// Produces an actor handle bound to one canister. Browser futures are not
/// `Send`, so neither is this trait.
///

#[async_trait(?Send)]
pub trait ActorResolver {
    type Actor;

    async fn resolve(&self, canister_id: &Principal) -> Result<Self::Actor, ExternalError>;
}

///
/// Renderer
///
/// Populates the app region for `actor`. Any async work it kicks off is its
/// own business; only a synchronous failure is observed.
///

pub trait Renderer<A> {
    fn render(&self, canister_id: &Principal, actor: &A) -> Result<(), ExternalError>;
}
