//! Game content layered on the engine: pawn kinds, sigil tables, and overlap
//! rules.
//!
//! Everything here is data plus behavior components; the engine never
//! branches on a pawn kind. A flavor is a row in a [`PawnCatalog`] combined
//! with the component set [`PawnTemplate::spawn`] wires up.
pub mod components;
pub mod overlap;
pub mod sigil;
pub mod template;

pub use components::{StatTweakComponent, TweakBinding};
pub use overlap::{CRITICAL_DAMAGE, OverlapEffects, OverlapOutcome};
pub use sigil::{SigilComponent, SigilSet};
pub use template::{PawnCatalog, PawnKind, PawnTemplate, TemplateError};
