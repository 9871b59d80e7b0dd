//! TerminalRenderer: flushes scene buffer differences to a real terminal.
//!
//! The renderer owns the "current" buffer (what the terminal shows). Each
//! frame the caller paints a fresh "next" buffer and hands it to
//! [`TerminalRenderer::draw_swap`], which writes only the changed cells and
//! then swaps the buffers.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::scene::SceneBuffer;
use crate::types::Position;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    current: SceneBuffer,
    changes: Vec<(Position, char)>,
    buf: Vec<u8>,
    clear_pending: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            current: SceneBuffer::new(),
            changes: Vec::new(),
            buf: Vec::with_capacity(16 * 1024),
            clear_pending: false,
        }
    }

    /// What the terminal currently shows, as far as the buffers know.
    pub fn current(&self) -> &SceneBuffer {
        &self.current
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Clear the screen on the next draw and forget what is on it.
    pub fn invalidate(&mut self) {
        self.current.clear();
        self.clear_pending = true;
    }

    /// Draw `next`, then make it the new baseline.
    ///
    /// Only cells whose character differs from the current buffer are
    /// written. Afterwards the current buffer holds every cell of `next`
    /// (not just the changed ones) and `next` is empty, ready for the
    /// following frame. Returns the number of cells written.
    pub fn draw_swap(&mut self, next: &mut SceneBuffer) -> Result<usize> {
        self.buf.clear();
        if self.clear_pending {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
            self.clear_pending = false;
        }

        next.diff_into(&self.current, &mut self.changes);
        let written = encode_changes_into(&self.changes, &mut self.buf)?;
        self.flush_buf()?;

        std::mem::swap(&mut self.current, next);
        next.clear();
        Ok(written)
    }

    /// Draw the finish line row directly, bypassing the buffers.
    pub fn draw_finish_line(&mut self, row: i32, line: &str) -> Result<()> {
        let Some((_, y)) = Position::new(0, row).to_terminal() else {
            return Ok(());
        };
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, y))?;
        self.buf.queue(Print(line))?;
        self.flush_buf()
    }

    /// Draw overlay text from the top-left corner, one entry per row.
    ///
    /// Each row is cleared to its end so shorter text leaves nothing behind.
    pub fn draw_hud<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        self.buf.clear();
        for (y, line) in lines.iter().enumerate() {
            let Ok(y) = u16::try_from(y) else {
                break;
            };
            self.buf.queue(cursor::MoveTo(0, y))?;
            self.buf.queue(Print(line.as_ref()))?;
            self.buf.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode cell changes into `out`, returning how many cells were encoded.
///
/// Changes are expected in row-major order. Cells that cannot exist on a
/// terminal (negative coordinates) are skipped. The cursor is only moved
/// when the next cell is not directly right of the previous one.
pub fn encode_changes_into(changes: &[(Position, char)], out: &mut Vec<u8>) -> Result<usize> {
    let mut cursor_at: Option<(u16, u16)> = None;
    let mut written = 0;

    for &(position, ch) in changes {
        let Some((x, y)) = position.to_terminal() else {
            continue;
        };
        if cursor_at != Some((x, y)) {
            out.queue(cursor::MoveTo(x, y))?;
        }
        out.queue(Print(ch))?;
        cursor_at = x.checked_add(1).map(|nx| (nx, y));
        written += 1;
    }

    Ok(written)
}
