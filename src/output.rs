use std::{
    fs::File,
    io::{self, Write},
    mem::ManuallyDrop,
    os::fd::{AsRawFd, FromRawFd, RawFd},
};

#[derive(Debug)]
/// Writes straight to a file descriptor with `write(2)`, without buffering and without the
/// handling `std::io::Stdout` applies to a closed descriptor. Every error the kernel reports,
/// `EBADF` included, reaches the caller. The descriptor is never closed.
pub struct FdSink {
    file: ManuallyDrop<File>,
}

impl FdSink {
    /// A sink on the process's standard output.
    pub fn stdout() -> Self {
        // SAFETY: fd 1 belongs to the process for its whole lifetime and is never closed here.
        unsafe { Self::from_raw_fd(io::stdout().as_raw_fd()) }
    }

    /// Wraps `fd` without taking ownership of it.
    ///
    /// # Safety
    /// `fd` must not be closed by anyone else while the sink is in use.
    pub unsafe fn from_raw_fd(fd: RawFd) -> Self {
        Self {
            file: ManuallyDrop::new(File::from_raw_fd(fd)),
        }
    }
}

impl Write for FdSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
