/// Paint layer for draw items.
///
/// Later variants are painted on top of earlier ones regardless of insertion order, so
/// a pointer marker recorded by one instance is never covered by the geometry of an
/// instance drawn after it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Layer {
    /// Instance geometry (textured quads and placeholders).
    #[default]
    Instances,
    /// Editor overlays drawn above every instance.
    Overlay,
}
