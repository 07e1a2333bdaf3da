//! Brand logo and the introduction ("hero") block.

use crate::util::present;
use mguide_dom::Document;
use mguide_domain::constants::{
    BRAND_LOGO_ID, DEFAULT_EYEBROW, DEFAULT_INTRO_TITLE, HERO_IMAGE_ID, INTRO_EYEBROW_ID,
    INTRO_LEAD_ID, INTRO_TITLE_ID,
};
use mguide_domain::page::{Brand, Hero};

pub fn apply_brand(doc: &mut Document, brand: &Brand) {
    if let Some(logo) = present(brand.logo.as_deref())
        && let Some(img) = doc.get_element_by_id(BRAND_LOGO_ID)
    {
        doc.set_attr(img, "src", logo);
    }
}

/// Rewrites the introduction texts. Once a hero fragment is present, empty fields fall back
/// to the generic defaults rather than keeping the static copy.
pub fn apply(doc: &mut Document, hero: &Hero) {
    let texts = [
        (INTRO_EYEBROW_ID, present(hero.eyebrow.as_deref()).unwrap_or(DEFAULT_EYEBROW)),
        (INTRO_TITLE_ID, present(hero.title.as_deref()).unwrap_or(DEFAULT_INTRO_TITLE)),
        (INTRO_LEAD_ID, hero.lead.as_deref().unwrap_or_default()),
    ];
    for (id, text) in texts {
        if let Some(node) = doc.get_element_by_id(id) {
            doc.set_text(node, text);
        }
    }

    if let Some(image) = &hero.image
        && let Some(img) = doc.get_element_by_id(HERO_IMAGE_ID)
    {
        doc.set_attr(img, "src", image.src.as_deref().unwrap_or_default());
        doc.set_attr(img, "alt", image.alt.as_deref().unwrap_or_default());
    }
}
