// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios isatty

//! The real terminal, as a [`TerminalDevice`](crate::TerminalDevice).

#[cfg(unix)]
pub use unix::*;

#[cfg(windows)]
pub use windows::*;

#[cfg(unix)]
mod unix {
    use crate::{TermSize, TerminalDevice, enter_raw_mode, is_a_terminal, ok,
                query_terminal_size, restore_terminal_mode};
    use rustix::{fd::{AsFd, BorrowedFd},
                 io::Errno,
                 termios::Termios};
    use std::{fs::{File, OpenOptions},
              io::{self, Read, Write}};

    /// Path of the controlling terminal, used when stdio is redirected.
    pub const CONTROLLING_TTY_PATH: &str = "/dev/tty";

    /// The controlling terminal of this process.
    ///
    /// Attributes are read and written on the input side, and the size is queried on
    /// the output side. Both usually refer to the same tty.
    #[derive(Debug)]
    pub struct TtyDevice {
        input: File,
        output: File,
    }

    impl TtyDevice {
        /// Use stdin and stdout if both are terminals, otherwise open `/dev/tty` for
        /// reading and writing. [`Terminal::new`] only gets here when stdin is a
        /// terminal, so `/dev/tty` stands in for a redirected stdout.
        ///
        /// [`Terminal::new`]: crate::Terminal::new
        ///
        /// # Errors
        ///
        /// Returns an error if there is no controlling terminal.
        pub fn open() -> io::Result<Self> {
            let stdin = io::stdin();
            let stdout = io::stdout();
            if is_a_terminal(&stdin) && is_a_terminal(&stdout) {
                let input = File::from(stdin.as_fd().try_clone_to_owned()?);
                let output = File::from(stdout.as_fd().try_clone_to_owned()?);
                tracing::debug!("using stdin/stdout as the terminal");
                return Self::from_files(input, output);
            }

            let tty = OpenOptions::new()
                .read(true)
                .write(true)
                .open(CONTROLLING_TTY_PATH)?;
            tracing::debug!(path = CONTROLLING_TTY_PATH, "opened controlling terminal");
            Self::from_file(tty)
        }

        /// Wrap a file that refers to a terminal, such as the slave side of a PTY.
        ///
        /// # Errors
        ///
        /// Returns `ENOTTY` if `file` is not a terminal, or an error if the file
        /// handle can't be duplicated.
        pub fn from_file(file: File) -> io::Result<Self> {
            let output = file.try_clone()?;
            Self::from_files(file, output)
        }

        fn from_files(input: File, output: File) -> io::Result<Self> {
            if !is_a_terminal(&input) {
                return Err(Errno::NOTTY.into());
            }
            ok!(Self { input, output })
        }

        /// The file descriptor the terminal attributes are read from and written to.
        #[must_use]
        pub fn input_fd(&self) -> BorrowedFd<'_> { self.input.as_fd() }
    }

    impl TerminalDevice for TtyDevice {
        type Snapshot = Termios;

        fn query_size(&self) -> io::Result<TermSize> { query_terminal_size(&self.output) }

        fn enter_raw_mode(&mut self) -> io::Result<Self::Snapshot> {
            enter_raw_mode(&self.input)
        }

        fn restore(&mut self, snapshot: &Self::Snapshot) -> io::Result<()> {
            restore_terminal_mode(&self.input, snapshot)
        }
    }

    impl Read for TtyDevice {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> { self.input.read(buf) }
    }

    impl Write for TtyDevice {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> { self.output.write(buf) }

        fn flush(&mut self) -> io::Result<()> { self.output.flush() }
    }
}

#[cfg(windows)]
mod windows {
    use crate::{TermSize, TerminalDevice, enter_raw_mode, query_terminal_size,
                restore_terminal_mode};
    use std::io::{self, IsTerminal, Read, Write};

    /// The console of this process, via stdin and stdout.
    #[derive(Debug)]
    pub struct TtyDevice {
        input: io::Stdin,
        output: io::Stdout,
    }

    impl TtyDevice {
        /// # Errors
        ///
        /// Returns an error if stdin is not a console.
        pub fn open() -> io::Result<Self> {
            let input = io::stdin();
            if !input.is_terminal() {
                return Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    "stdin is not a console",
                ));
            }
            Ok(Self {
                input,
                output: io::stdout(),
            })
        }
    }

    impl TerminalDevice for TtyDevice {
        type Snapshot = ();

        fn query_size(&self) -> io::Result<TermSize> { query_terminal_size() }

        fn enter_raw_mode(&mut self) -> io::Result<Self::Snapshot> { enter_raw_mode() }

        fn restore(&mut self, _snapshot: &Self::Snapshot) -> io::Result<()> {
            restore_terminal_mode()
        }
    }

    impl Read for TtyDevice {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> { self.input.read(buf) }
    }

    impl Write for TtyDevice {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> { self.output.write(buf) }

        fn flush(&mut self) -> io::Result<()> { self.output.flush() }
    }
}
