//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every route pattern compiles
//! - Check router options and runtime values
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: AppConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::{AppConfig, RouteAction, RouteConfig};
use crate::routing::{Pattern, RouterError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("router.index must start with '/', got {0:?}")]
    IndexNotAbsolute(String),

    #[error("router.prefix must not contain '#', got {0:?}")]
    PrefixContainsHash(String),

    #[error("runtime.poll_interval_ms must be greater than zero")]
    ZeroPollInterval,

    #[error("route {route:?}: {reason}")]
    InvalidPattern { route: String, reason: String },

    #[error("route {0:?}: redirect target is empty")]
    EmptyTarget(String),
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.router.index.starts_with('/') {
        errors.push(ValidationError::IndexNotAbsolute(config.router.index.clone()));
    }
    if config.router.prefix.contains('#') {
        errors.push(ValidationError::PrefixContainsHash(config.router.prefix.clone()));
    }
    if config.runtime.poll_interval_ms == 0 {
        errors.push(ValidationError::ZeroPollInterval);
    }

    for route in &config.routes {
        if let Err(e) = route_pattern(route).and_then(|p| p.compile()) {
            let RouterError::InvalidPattern { reason, .. } = e;
            errors.push(ValidationError::InvalidPattern {
                route: route.label().to_string(),
                reason,
            });
        }

        let target = match &route.action {
            RouteAction::Log => None,
            RouteAction::Redirect { to } => Some(to),
            RouteAction::External { url } => Some(url),
        };
        if target.is_some_and(|t| t.is_empty()) {
            errors.push(ValidationError::EmptyTarget(route.label().to_string()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The pattern a route entry describes.
pub fn route_pattern(route: &RouteConfig) -> Result<Pattern, RouterError> {
    if route.raw {
        Pattern::raw(&route.pattern)
    } else {
        Ok(Pattern::from(route.pattern.as_str()))
    }
}
