//! Art Style Library
//!
//! Built-in reference catalog of design styles. Read-only: entries ship
//! with the app and are never persisted.

use std::sync::OnceLock;

use crate::domain::ArtStyle;

fn catalog() -> &'static Vec<ArtStyle> {
    static CATALOG: OnceLock<Vec<ArtStyle>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Every style in the library, in display order
pub fn all() -> &'static [ArtStyle] {
    catalog()
}

pub fn by_id(id: &str) -> Option<&'static ArtStyle> {
    catalog().iter().find(|s| s.id == id)
}

/// Styles in one category, e.g. "Modern"
pub fn by_category(category: &str) -> Vec<&'static ArtStyle> {
    catalog().iter().filter(|s| s.category == category).collect()
}

/// Unique categories, in catalog order
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for style in catalog() {
        if !seen.contains(&style.category.as_str()) {
            seen.push(style.category.as_str());
        }
    }
    seen
}

/// Case-insensitive search over style names and descriptions
pub fn search(query: &str) -> Vec<&'static ArtStyle> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog().iter().collect();
    }
    catalog()
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&needle)
                || s.description.to_lowercase().contains(&needle)
        })
        .collect()
}

fn style(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    features: &[&str],
    usage: &[&str],
    avoid: &[&str],
    colors: &[&str],
    fonts: &[&str],
    artists: &[&str],
    image_url: &str,
    learn_more_url: &str,
) -> ArtStyle {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    ArtStyle {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        features: owned(features),
        usage: owned(usage),
        avoid: owned(avoid),
        colors: owned(colors),
        fonts: owned(fonts),
        artists: owned(artists),
        image_url: image_url.to_string(),
        learn_more_url: learn_more_url.to_string(),
    }
}

fn build_catalog() -> Vec<ArtStyle> {
    vec![
        style(
            "1",
            "Minimalism",
            "Modern",
            "Focuses on simplicity, negative space and only the essential \
             elements, stripping everything that does not carry the message.",
            &["Generous whitespace", "Plain, readable typography", "Restrained palette", "Basic geometric shapes"],
            &["Luxury branding", "User interfaces", "Modern packaging"],
            &["Busy, high-energy layouts", "Complex textures", "Detail-heavy imagery"],
            &["#FFFFFF", "#000000", "#F5F5F5", "#333333"],
            &["Helvetica", "Futura", "Univers", "Roboto"],
            &["Bauhaus school", "Dieter Rams", "Massimo Vignelli"],
            "https://image.pollinations.ai/prompt/minimalist%20graphic%20design%20poster%20whitespace%20clean%20typography?width=600&height=400&nologo=true",
            "https://en.wikipedia.org/wiki/Minimalism",
        ),
        style(
            "2",
            "Saqqakhaneh",
            "Traditional",
            "A movement in modern Iranian art from the 1960s, bridging \
             religious and folk imagery with western modernism.",
            &["Talismanic motifs and script", "Calligraphic painting", "Vivid traditional colors (turquoise, gold)", "Folk symbols"],
            &["Cultural posters", "Modern painting", "Art book covers", "Persian lettering"],
            &["Dry corporate work", "Purely flat digital design"],
            &["#C19A6B", "#00FFFF", "#FF0000", "#FFD700"],
            &["Broken Nastaliq", "Thuluth", "Hand lettering"],
            &["Parviz Tanavoli", "Hossein Zenderoudi", "Faramarz Pilaram"],
            "https://image.pollinations.ai/prompt/saqqakhaneh%20art%20persian%20calligraphy%20turquoise%20gold?width=600&height=400&nologo=true",
            "https://en.wikipedia.org/wiki/Saqqakhaneh_movement",
        ),
        style(
            "3",
            "Brutalism",
            "Postmodern",
            "Raw, harsh and deliberately rule-breaking; named after exposed \
             concrete (béton brut).",
            &["Oversized system fonts", "Unretouched photography", "Very high contrast", "Broken grids and asymmetry"],
            &["Underground music posters", "Experimental art sites", "Streetwear"],
            &["Health and wellness products", "Banking and formal services"],
            &["#0000FF", "#00FF00", "#1A1A1A", "#FF0000"],
            &["Courier New", "Helvetica Bold", "System fonts", "Monospace"],
            &["Wolfgang Weingart", "David Carson"],
            "https://image.pollinations.ai/prompt/neo%20brutalism%20web%20design%20raw%20acid%20green%20black?width=600&height=400&nologo=true",
            "https://en.wikipedia.org/wiki/Brutalist_architecture",
        ),
        style(
            "4",
            "Pop Art",
            "Modern",
            "Turned mass culture, advertising and comics into art: loud \
             color, repetition and humor.",
            &["Saturated neon color", "Comic-book halftones", "Repeated patterns", "Thick black outlines"],
            &["Advertising posters", "Fast-food packaging", "Apparel prints"],
            &["Luxury or very formal brands", "Somber services"],
            &["#FF007F", "#FFFF00", "#00FFFF", "#000000"],
            &["Comic Sans", "Cooper Black", "Bangers", "Bold sans"],
            &["Andy Warhol", "Roy Lichtenstein"],
            "https://image.pollinations.ai/prompt/pop%20art%20comic%20halftone%20bright%20yellow%20pink?width=600&height=400&nologo=true",
            "https://en.wikipedia.org/wiki/Pop_art",
        ),
        style(
            "5",
            "Swiss Style",
            "Modern",
            "The International Typographic Style: grid systems, objective \
             photography and asymmetric layouts built on sans-serif type.",
            &["Mathematical grids", "Flush-left ragged-right type", "Objective photography", "Sans-serif hierarchy"],
            &["Wayfinding and signage", "Editorial design", "Corporate identities"],
            &["Hand-crafted or ornamental briefs", "Nostalgic retro work"],
            &["#FF0000", "#FFFFFF", "#000000", "#E0E0E0"],
            &["Helvetica", "Akzidenz-Grotesk", "Univers"],
            &["Josef Müller-Brockmann", "Armin Hofmann", "Emil Ruder"],
            "https://image.pollinations.ai/prompt/swiss%20international%20typographic%20style%20poster%20grid%20helvetica%20red?width=600&height=400&nologo=true",
            "https://en.wikipedia.org/wiki/International_Typographic_Style",
        ),
    ]
}
