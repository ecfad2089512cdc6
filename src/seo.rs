//! Site-wide SEO metadata.
//!
//! Pure data for `<head>` templating. Meta tag injection is handled by the
//! rendering layer, not here.

use serde::{Deserialize, Serialize};

/// SEO metadata consumed by `<head>` templating and link-preview crawlers.
///
/// Serializes with camelCase field names (`imageLink`) to match the
/// frontend contract. Exactly these four fields; unknown fields are
/// rejected on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeoConfig<'a> {
    /// Summary shown in search results and social previews.
    pub description: &'a str,
    /// Canonical URL of the deployed site.
    pub link: &'a str,
    /// Document title.
    pub title: &'a str,
    /// Social preview image (Open Graph / Twitter Card).
    pub image_link: &'a str,
}

/// Fixed at build time. Rendering code reads this; nothing writes it.
pub const SEO: SeoConfig<'static> = SeoConfig {
    description: "A small web application to create workouts based on your \
                  available equipment and the muscles you want to train.",
    link: "https://shapefitness.vercel.app",
    title: "ShapeFitness | The easiest way to create a workout routine",
    image_link: "https://shapefitness.vercel.app/og.jpg",
};
