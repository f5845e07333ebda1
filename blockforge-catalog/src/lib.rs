//! Built-in block definitions.
//!
//! Each module exposes one `definition()`; [`definitions`] lists them in menu
//! order and [`standard_registry`] assembles them into a [`BlockRegistry`].

mod contact_centered;
mod contact_form;
mod faq;
mod features;
mod footer;
mod form_contact;
mod form_newsletter;
mod form_single_column;
mod gallery;
mod gallery_masonry;
mod hero_carousel;
mod hero_reviews;
mod pricing;
mod testimonials;
mod testimonials_carousel;

use blockforge_model::{BlockDefinition, Props};
use blockforge_registry::{BlockRegistry, RegistryConfig, RegistryResult};
use serde_json::Value;

pub use contact_centered::CONTACT_CENTERED;
pub use contact_form::CONTACT_WITH_FORM;
pub use faq::FAQ_CENTERED_CARDS;
pub use features::FEATURES_SECTION;
pub use footer::FOOTER_CENTERED_SOCIALS;
pub use form_contact::FORM_CONTACT_SIMPLE;
pub use form_newsletter::FORM_NEWSLETTER_SIGNUP;
pub use form_single_column::FORM_SINGLE_COLUMN;
pub use gallery::GALLERY_GRID;
pub use gallery_masonry::GALLERY_MASONRY;
pub use hero_carousel::HERO_CAROUSEL;
pub use hero_reviews::HERO_WITH_IMAGE_REVIEWS;
pub use pricing::{PRICING_CARDS_TOGGLE, PricingValidator};
pub use testimonials::TESTIMONIALS_QUOTE_STYLE;
pub use testimonials_carousel::TESTIMONIALS_CAROUSEL;

/// All built-in definitions, in menu order.
pub fn definitions() -> Vec<BlockDefinition> {
    vec![
        features::definition(),
        hero_carousel::definition(),
        hero_reviews::definition(),
        pricing::definition(),
        faq::definition(),
        testimonials_carousel::definition(),
        testimonials::definition(),
        gallery::definition(),
        gallery_masonry::definition(),
        form_single_column::definition(),
        form_contact::definition(),
        form_newsletter::definition(),
        footer::definition(),
        contact_centered::definition(),
        contact_form::definition(),
    ]
}

/// Registry of the built-in definitions.
pub fn standard_registry() -> BlockRegistry {
    BlockRegistry::build(definitions())
}

/// Registry of the built-in definitions, honoring `config`.
pub fn standard_registry_with(config: &RegistryConfig) -> RegistryResult<BlockRegistry> {
    BlockRegistry::from_config(definitions(), config)
}

/// Unwraps a `json!({...})` literal into props.
pub(crate) fn object(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        _ => Props::new(),
    }
}

/// Shared v1 migration: every built-in block is still on its first shape.
pub(crate) fn keep_props(props: Props, _from_version: u32) -> Props {
    props
}
