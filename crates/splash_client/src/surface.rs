use std::io::Write;

/// The three addressable regions of the splash window. The client only
/// writes to the surface, it never reads from it.
pub trait StatusSurface: Send {
    /// Replace the status line text.
    fn show_status(&mut self, text: &str);
    /// Replace the window title text.
    fn show_title(&mut self, text: &str);
    /// Set the progress bar width to a CSS-style percentage string.
    fn set_progress_width(&mut self, width: &str);
}

/// Window-level actions the client requests from its host. Closing the
/// window itself is host business.
pub trait WindowHost: Send + Sync {
    /// Close the splash window once the close grace period has elapsed.
    fn request_close(&self);
}

/// Writes each region change as a labelled line, for terminal hosts.
pub struct LineSurface<W: Write> {
    out: W,
}

impl<W: Write> LineSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Hands the writer back, mostly so tests can inspect it.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> StatusSurface for LineSurface<W> {
    fn show_status(&mut self, text: &str) {
        let _ = writeln!(self.out, "status: {text}");
    }

    fn show_title(&mut self, text: &str) {
        let _ = writeln!(self.out, "title: {text}");
    }

    fn set_progress_width(&mut self, width: &str) {
        let _ = writeln!(self.out, "progress: {width}");
    }
}
