use crate::scene::shapes::rounded_rect::RoundedRectCmd;
use crate::scene::shapes::shadow::ShadowCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect(RoundedRectCmd),
    Shadow(ShadowCmd),
    Text(TextCmd),
}

impl DrawCmd {
    #[inline]
    pub fn as_rounded_rect(&self) -> Option<&RoundedRectCmd> {
        match self {
            DrawCmd::RoundedRect(c) => Some(c),
            _ => None,
        }
    }
}
