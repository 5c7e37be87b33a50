//! Render surface module - The live view the user edits.
//!
//! The surface is modelled as the catalog's declaration order joined with
//! the store's current values. Presentation is out of scope; what matters
//! here is the materialized node sequence the export pipeline reads.

mod render_surface;

pub use render_surface::{RenderSurface, RenderedDocument, RenderedNode};
