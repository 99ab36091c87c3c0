//! Flavour variants and how they restyle the packaging.

use crate::surface::{Layer, PresentationSurface, TextSlot};
use std::fmt;
use std::str::FromStr;

/// Immutable styling record. Applying one replaces all previous styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Variant {
    pub background_color: &'static str,
    pub accent_color: &'static str,
    pub silhouette_color: &'static str,
    pub display_text: &'static str,
    pub product_code: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum VariantId {
    #[default]
    Original,
    Barbecue,
    Cheese,
    Lime,
    Balado,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant `{0}`")]
pub struct UnknownVariant(pub String);

const ORIGINAL: Variant = Variant {
    background_color: "oklch(72% 0.14 210)",
    accent_color: "oklch(20% 0.21 28.5)",
    silhouette_color: "oklch(56% 0.14 233)",
    display_text: "ORIGINAL",
    product_code: "2053518010553-27",
};

const BARBECUE: Variant = Variant {
    background_color: "oklch(55% 0.09 60)",
    accent_color: "oklch(20% 0.21 42)",
    silhouette_color: "oklch(33% 0.04 55)",
    display_text: "BARBECUE",
    product_code: "2053518010554-28",
};

const CHEESE: Variant = Variant {
    background_color: "oklch(88% 0.17 95)",
    accent_color: "oklch(20% 0.22 50)",
    silhouette_color: "oklch(74% 0.18 80)",
    display_text: "CHEESE",
    product_code: "2053518010555-29",
};

const LIME: Variant = Variant {
    background_color: "oklch(72% 0.16 134)",
    accent_color: "oklch(20% 0.17 142)",
    silhouette_color: "oklch(64% 0.17 131)",
    display_text: "DAUN JERUK",
    product_code: "2053518010556-30",
};

const BALADO: Variant = Variant {
    background_color: "oklch(59% 0.20 28)",
    accent_color: "oklch(20% 0.19 96)",
    silhouette_color: "oklch(46% 0.21 28)",
    display_text: "BALADO",
    product_code: "2053518010557-31",
};

impl VariantId {
    pub const ALL: [VariantId; 5] = [
        VariantId::Original,
        VariantId::Barbecue,
        VariantId::Cheese,
        VariantId::Lime,
        VariantId::Balado,
    ];

    /// Identifier used in the `data-variant` attribute.
    pub fn key(self) -> &'static str {
        match self {
            VariantId::Original => "original",
            VariantId::Barbecue => "barbecue",
            VariantId::Cheese => "cheese",
            VariantId::Lime => "lime",
            VariantId::Balado => "balado",
        }
    }

    pub fn variant(self) -> &'static Variant {
        match self {
            VariantId::Original => &ORIGINAL,
            VariantId::Barbecue => &BARBECUE,
            VariantId::Cheese => &CHEESE,
            VariantId::Lime => &LIME,
            VariantId::Balado => &BALADO,
        }
    }
}

impl FromStr for VariantId {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VariantId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub fn apply_variant<S: PresentationSurface + ?Sized>(surface: &mut S, variant: &Variant) {
    surface.set_property(Layer::Container, "--pkg-bg", variant.background_color);
    surface.set_property(Layer::Container, "--pkg-accent", variant.accent_color);
    surface.set_property(Layer::Container, "--pkg-silhouette", variant.silhouette_color);
    surface.set_text(TextSlot::VariantName, variant.display_text);
    surface.set_text(TextSlot::ProductCode, variant.product_code);
}
