use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
};

use tracing::debug;

/// Resource with an explicit, fallible release step.
pub trait Close {
    type Error: fmt::Display;

    fn close(self) -> Result<(), Self::Error>;
}

impl Close for File {
    type Error = io::Error;

    fn close(self) -> io::Result<()> {
        self.sync_all()
    }
}

impl<W: Write> Close for BufWriter<W> {
    type Error = io::Error;

    fn close(mut self) -> io::Result<()> {
        self.flush()
    }
}

/// Close `resource` and drop any error after logging it.
pub fn close_quietly<C: Close>(resource: C) {
    if let Err(e) = resource.close() {
        debug!(error = %e, "ignoring error on close");
    }
}
