/// Element groups the core writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Document root; carries the rotation variables.
    Root,
    /// The packaging container: face lighting, transform, render scale, colors.
    Container,
    /// Ground shadow behind the container.
    Shadow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextSlot {
    VariantName,
    ProductCode,
}

/// Write-only sink for presentation properties (CSS custom properties,
/// `transform`, and a couple of text nodes on the web).
pub trait PresentationSurface {
    fn set_property(&mut self, layer: Layer, name: &str, value: &str);
    fn set_text(&mut self, slot: TextSlot, text: &str);
}
