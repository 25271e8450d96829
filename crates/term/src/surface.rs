//! The display collaborator the game paints through.

use anyhow::Result;

use crate::fb::CellStyle;

/// A character-cell display.
///
/// Cell writes are buffered; nothing is visible until [`Surface::present`].
/// Writes outside `size()` must be ignored, not panic.
pub trait Surface {
    /// Current size as `(width, height)` in cells.
    fn size(&self) -> (u16, u16);

    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: CellStyle);

    /// Make everything written so far visible.
    fn present(&mut self) -> Result<()>;

    /// Give the display back to the user (leave raw mode and so on).
    fn restore(&mut self) -> Result<()> {
        Ok(())
    }

    /// Pick up a changed display size. Returns `true` if the size changed,
    /// in which case the surface has been cleared.
    fn sync_size(&mut self) -> Result<bool> {
        Ok(false)
    }
}
