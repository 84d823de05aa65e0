use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching rasterizer under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
}

impl DrawCmd {
    /// Fill paint of the command.
    #[inline]
    pub fn paint(&self) -> &crate::paint::Paint {
        match self {
            DrawCmd::RoundedRect(cmd) => &cmd.paint,
            DrawCmd::Circle(cmd) => &cmd.paint,
        }
    }
}
