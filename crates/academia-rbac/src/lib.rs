//! # Academia RBAC
//!
//! The authorization core: a role→permission table, stateless evaluators over
//! it, relationship facts about a principal and a resource, and the gate that
//! combines both into one allow/deny decision.
//!
//! - [`table`]: [`RolePermissionMap`], built once and shared read-only
//! - [`evaluator`]: [`PolicyEvaluator`], permission membership questions
//! - [`capabilities`]: named role capabilities on top of the evaluator
//! - [`ownership`]: [`OwnershipResolver`], self-ownership and guardianship
//! - [`gate`]: [`AuthorizationGate`], blanket role grant or ownership grant
//! - [`policies`]: the gate for every guarded operation
//!
//! Nothing in this crate performs I/O during a decision. Relationship records
//! are fetched by the caller and lent to the resolver.
//!
//! # Example
//!
//! ```ignore
//! use academia_rbac::{OwnershipResolver, PolicyEvaluator, RolePermissionMap, policies};
//!
//! let table = RolePermissionMap::builtin();
//! let evaluator = PolicyEvaluator::new(&table);
//! assert!(evaluator.has_permission(Role::Teacher, Permission::ManageGrades));
//!
//! let links = store.parent_links_for_user(principal.id).await?;
//! let resolver = OwnershipResolver::new(&links);
//! let decision = policies::finance::STUDENT_FEE_PAYMENTS.evaluate(&principal, &student_id, &resolver);
//! ```

pub mod capabilities;
pub mod evaluator;
pub mod gate;
pub mod ownership;
pub mod policies;
pub mod table;

pub use evaluator::PolicyEvaluator;
pub use gate::{AuthorizationDecision, AuthorizationGate, Denied, GateInfo, Grant, RoleGate};
pub use ownership::{Owned, OwnershipResolver, StudentScoped};
pub use table::{RolePermissionMap, TableError};
