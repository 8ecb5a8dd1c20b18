//! The authorization gate.
//!
//! A gate allows a principal when its role is in the gate's blanket role set,
//! or when the gate's ownership predicate holds for the specific resource.
//! Everything else is denied with `"Not authorized to {action}"`. An inactive
//! principal is denied before either rule is consulted.
//!
//! Gates are plain data and are declared as constants in [`crate::policies`].
//!
//! # Example
//!
//! ```ignore
//! const READ_NOTIFICATION: AuthorizationGate<Notification> = AuthorizationGate::new(
//!     "notification.read",
//!     "access this notification",
//!     RoleSet::EMPTY,
//!     |resolver, principal, notification| resolver.is_owner(principal, notification),
//! );
//!
//! READ_NOTIFICATION.authorize(&principal, &notification, &resolver)?;
//! ```

use crate::ownership::OwnershipResolver;
use academia_core::RoleSet;
use academia_models::Principal;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Relationship predicate evaluated when the blanket grant does not apply.
pub type OwnershipPredicate<R> = fn(&OwnershipResolver<'_>, &Principal, &R) -> bool;

/// Why a request was allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grant {
    /// The principal's role is in the gate's blanket set.
    Blanket,
    /// The ownership predicate held for this resource.
    Ownership,
}

impl Grant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Grant::Blanket => "blanket",
            Grant::Ownership => "ownership",
        }
    }
}

/// A denied request, carrying the message to surface to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct Denied {
    pub reason: String,
}

/// Outcome of one gate evaluation.
///
/// `reason` is present exactly when `allowed` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationDecision {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant: Option<Grant>,
}

impl AuthorizationDecision {
    pub fn allow(grant: Grant) -> Self {
        Self {
            allowed: true,
            reason: None,
            grant: Some(grant),
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
            grant: None,
        }
    }

    pub fn into_result(self) -> Result<Grant, Denied> {
        match (self.allowed, self.grant) {
            (true, Some(grant)) => Ok(grant),
            _ => Err(Denied {
                reason: self.reason.unwrap_or_default(),
            }),
        }
    }
}

/// Static description of a gate, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct GateInfo {
    pub name: &'static str,
    pub action: &'static str,
    pub blanket: Vec<academia_core::Role>,
    pub ownership: bool,
}

pub struct AuthorizationGate<R: ?Sized> {
    name: &'static str,
    action: &'static str,
    blanket: RoleSet,
    ownership: Option<OwnershipPredicate<R>>,
}

/// A gate that never looks at a resource.
pub type RoleGate = AuthorizationGate<()>;

impl<R: ?Sized> AuthorizationGate<R> {
    /// A gate with a blanket role set and an ownership predicate.
    pub const fn new(
        name: &'static str,
        action: &'static str,
        blanket: RoleSet,
        ownership: OwnershipPredicate<R>,
    ) -> Self {
        Self {
            name,
            action,
            blanket,
            ownership: Some(ownership),
        }
    }

    /// A gate granted by role alone.
    pub const fn role_only(name: &'static str, action: &'static str, blanket: RoleSet) -> Self {
        Self {
            name,
            action,
            blanket,
            ownership: None,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn action(&self) -> &'static str {
        self.action
    }

    pub const fn blanket(&self) -> RoleSet {
        self.blanket
    }

    /// The message attached to every denial from this gate.
    pub fn denial_reason(&self) -> String {
        format!("Not authorized to {}", self.action)
    }

    pub fn info(&self) -> GateInfo {
        GateInfo {
            name: self.name,
            action: self.action,
            blanket: self.blanket.iter().collect(),
            ownership: self.ownership.is_some(),
        }
    }

    pub fn evaluate(
        &self,
        principal: &Principal,
        resource: &R,
        resolver: &OwnershipResolver<'_>,
    ) -> AuthorizationDecision {
        let decision = if !principal.is_active() {
            AuthorizationDecision::deny(self.denial_reason())
        } else if self.blanket.contains(principal.role) {
            AuthorizationDecision::allow(Grant::Blanket)
        } else if self
            .ownership
            .is_some_and(|holds| holds(resolver, principal, resource))
        {
            AuthorizationDecision::allow(Grant::Ownership)
        } else {
            AuthorizationDecision::deny(self.denial_reason())
        };

        self.record(principal, &decision);
        decision
    }

    /// Evaluate and convert to a `Result`, for use with `?`.
    pub fn authorize(
        &self,
        principal: &Principal,
        resource: &R,
        resolver: &OwnershipResolver<'_>,
    ) -> Result<Grant, Denied> {
        self.evaluate(principal, resource, resolver).into_result()
    }

    fn record(&self, principal: &Principal, decision: &AuthorizationDecision) {
        let outcome = if decision.allowed { "allowed" } else { "denied" };
        let basis = match decision.grant {
            Some(grant) => grant.as_str(),
            None if !principal.is_active() => "inactive",
            None => "none",
        };

        if !decision.allowed {
            debug!(
                gate = self.name,
                user_id = %principal.id,
                role = %principal.role,
                basis,
                "Authorization denied"
            );
        }

        metrics::counter!(
            "authz_decisions_total",
            "gate" => self.name,
            "outcome" => outcome,
            "basis" => basis
        )
        .increment(1);
    }
}

impl RoleGate {
    /// Evaluate a gate that has no resource to inspect.
    pub fn check(&self, principal: &Principal) -> AuthorizationDecision {
        self.evaluate(principal, &(), &OwnershipResolver::empty())
    }

    pub fn require(&self, principal: &Principal) -> Result<Grant, Denied> {
        self.check(principal).into_result()
    }
}

impl<R: ?Sized> Clone for AuthorizationGate<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for AuthorizationGate<R> {}

impl<R: ?Sized> std::fmt::Debug for AuthorizationGate<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationGate")
            .field("name", &self.name)
            .field("action", &self.action)
            .field("blanket", &self.blanket)
            .field("ownership", &self.ownership.is_some())
            .finish()
    }
}
