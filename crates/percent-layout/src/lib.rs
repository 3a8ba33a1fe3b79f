#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_let_else)]
//! Percent layout resolution for container children.
//!
//! Children declare sizes, margins, padding, text size and min/max bounds as
//! percent expressions (`50%`, `10%sw`, `2a`, ...) relative to the container,
//! the screen, or a design reference. A container drives one cycle per layout:
//!
//! 1. **Resolve**: [`PercentLayoutHelper::apply_all`] turns expressions into
//!    pixels and snapshots the authored width, height and margins
//! 2. **Measure**: the host measures its children
//! 3. **Converge**: [`PercentLayoutHelper::needs_second_pass`] relaxes clamped
//!    wrap-content axes; the host measures once more if it returns `true`
//! 4. **Layout**: the host places its children
//! 5. **Restore**: [`PercentLayoutHelper::restore_all`] writes the snapshot back
//!
//! [`PercentContainer`] runs the whole cycle around any [`HostLayout`].
//!
//! Attributes come from any [`AttributeSource`], including maps and YAML via
//! [`PercentAttributes`].

mod attributes;
mod child;
mod container;
mod convergence;
mod engine;
mod error;
mod info;
mod parser;
mod resolver;

pub use attributes::{names, AttributeSource, PercentAttributes};
pub use child::{Capability, PercentChild, PercentHost, PercentLayoutParams};
pub use container::{HostLayout, PercentContainer, ScrollParent};
pub use engine::{CyclePhase, PercentLayoutHelper, ResolvedValues};
pub use error::PercentError;
pub use info::{LayoutInfo, PreservedParams};
pub use parser::{parse_percent, BaseReference, PercentValue};
pub use resolver::{resolve_base, DesignReference, ResolveContext};
