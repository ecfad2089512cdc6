//! SEO metadata for the ShapeFitness web application.
//!
//! Exposes a single read-only record ([`SEO`]) with the site description,
//! canonical link, document title, and social preview image URL. Rendering
//! code injects these into the page `<head>`; this crate only defines them.

pub mod seo;

pub use seo::{SEO, SeoConfig};
