use crate::{collab::ExternalError, config::ConfigError, page::PageError};
use candid::types::principal::PrincipalError;
use derive_more::Display;
use std::{error::Error as StdError, fmt::Write};
use thiserror::Error as ThisError;

///
/// BootstrapError
///
/// Everything that can end a bootstrap attempt. None of these are recovered
/// from; all reach the single reporting path in `bootstrap`.
///

#[derive(Debug, ThisError)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid canister id `{text}`: {source}")]
    IdentifierParse {
        text: String,
        #[source]
        source: PrincipalError,
    },

    #[error("actor resolution failed: {0}")]
    ActorResolution(#[source] ExternalError),

    #[error("render failed: {0}")]
    Render(#[source] ExternalError),

    #[error(transparent)]
    Page(#[from] PageError),
}

///
/// ErrorKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorKind {
    #[display("ConfigurationError")]
    Configuration,

    #[display("IdentifierParseError")]
    IdentifierParse,

    #[display("ActorResolutionError")]
    ActorResolution,

    #[display("RenderError")]
    Render,

    #[display("PageError")]
    Page,
}

impl BootstrapError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Configuration,
            Self::IdentifierParse { .. } => ErrorKind::IdentifierParse,
            Self::ActorResolution(_) => ErrorKind::ActorResolution,
            Self::Render(_) => ErrorKind::Render,
            Self::Page(_) => ErrorKind::Page,
        }
    }

    /// Stack captured by an external collaborator, if any.
    #[must_use]
    pub fn external_stack(&self) -> Option<&str> {
        match self {
            Self::ActorResolution(err) | Self::Render(err) => err.stack(),
            _ => None,
        }
    }

    ///
    /// trace
    /// Text for the `pre` block. A collaborator's own stack wins; otherwise
    /// `Kind: message` followed by the source chain. Never empty.
    ///

    #[must_use]
    pub fn trace(&self) -> String {
        if let Some(stack) = self.external_stack() {
            return stack.to_string();
        }

        let mut trace = format!("{}: {self}", self.kind());

        // transparent variants already print their inner error as `self`
        let mut source = match self {
            Self::Config(_) | Self::Page(_) => None,
            _ => self.source(),
        };
        while let Some(err) = source {
            let _ = write!(trace, "\n    caused by: {err}");
            source = err.source();
        }

        trace
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Network;
    use candid::Principal;

    #[test]
    fn config_trace_leads_with_kind() {
        let err = BootstrapError::from(ConfigError::MissingCanisterId {
            canister: "ads_ledger".to_string(),
            network: Network::Ic,
        });

        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err.trace(),
            "ConfigurationError: Ensure canister_ids.json specifies an `ads_ledger` canister ID on the ic network"
        );
    }

    #[test]
    fn parse_trace_includes_cause() {
        let source = Principal::from_text("not a principal").unwrap_err();
        let err = BootstrapError::IdentifierParse {
            text: "not a principal".to_string(),
            source,
        };

        let trace = err.trace();
        assert!(trace.starts_with("IdentifierParseError: invalid canister id `not a principal`"));
        assert!(trace.contains("\n    caused by: "));
    }

    #[test]
    fn external_stack_is_used_verbatim() {
        let err = BootstrapError::ActorResolution(
            ExternalError::new("fetch failed").with_stack("Error: fetch failed\n    at fetchActor"),
        );

        assert_eq!(err.trace(), "Error: fetch failed\n    at fetchActor");
    }

    #[test]
    fn external_without_stack_falls_back_to_chain() {
        let err = BootstrapError::Render(ExternalError::new("no methods"));

        assert_eq!(
            err.trace(),
            "RenderError: render failed: no methods\n    caused by: no methods"
        );
    }

    #[test]
    fn blank_stack_is_ignored() {
        let err = BootstrapError::ActorResolution(ExternalError::new("x").with_stack("   "));

        assert_eq!(err.external_stack(), None);
        assert!(err.trace().starts_with("ActorResolutionError: "));
    }
}
