// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in Jotter return `error::Result<T>`.  No panics in
// production paths; every error is handled at the command that produced it and
// surfaces as a user-facing dialog (see `platform::win32::alerts`).

/// Every error that Jotter can produce.
#[derive(Debug)]
pub enum JotterError {
    /// A Win32 API call returned a failure code.
    Win32 {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw Win32 error code (`GetLastError()` value) or HRESULT.
        code: u32,
    },

    /// A standard I/O error (file open, read, write, …).
    Io(std::io::Error),

    /// The file changed size between open and read: fewer or more bytes
    /// arrived than the size captured at open time.
    ReadTruncated {
        /// Byte size reported by the file's metadata at open time.
        expected: u64,
        /// Bytes actually read before end of file.
        actual: u64,
    },

    /// The write ended before every buffer byte reached the file.
    WriteTruncated {
        /// Total bytes that should have been written.
        expected: u64,
        /// Bytes confirmed written before the failure.
        actual: u64,
    },

    /// A content buffer of the required size could not be reserved.
    Allocation {
        /// The reservation that failed, in bytes.
        bytes: u64,
    },

    /// The text widget rejected a content update or query.
    Widget {
        /// The failing widget operation, for display purposes.
        operation: &'static str,
        /// The raw Win32 error code, or 0 when none was reported.
        code: u32,
    },
}

impl std::fmt::Display for JotterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win32 { function, code } => {
                write!(f, "{function} failed (error {code:#010x})")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ReadTruncated { expected, actual } => {
                write!(f, "read {actual} of {expected} bytes before end of file")
            }
            Self::WriteTruncated { expected, actual } => {
                write!(f, "wrote only {actual} of {expected} bytes")
            }
            Self::Allocation { bytes } => {
                write!(f, "could not reserve a {bytes}-byte buffer")
            }
            Self::Widget { operation, code } => {
                write!(f, "text widget {operation} failed (error {code:#010x})")
            }
        }
    }
}

impl std::error::Error for JotterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for JotterError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// Convert a windows-crate error (HRESULT) directly into a JotterError so that
// `?` can be used on `windows::core::Result<T>` throughout the platform module.
#[cfg(windows)]
impl From<windows::core::Error> for JotterError {
    fn from(e: windows::core::Error) -> Self {
        // HRESULT.0 is i32; reinterpret bits as u32 for display purposes.
        // Win32 errors appear as 0x8007xxxx HRESULTs.
        Self::Win32 {
            function: "windows",
            code: e.code().0 as u32,
        }
    }
}

#[cfg(windows)]
impl JotterError {
    /// Wrap a windows-crate error while keeping the failing function's name.
    ///
    /// Prefer this over the blanket `From` impl at call sites where the
    /// function name materially improves the dialog text.
    pub fn win32(function: &'static str, e: &windows::core::Error) -> Self {
        Self::Win32 {
            function,
            code: e.code().0 as u32,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JotterError>;
