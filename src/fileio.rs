// ── File transfer ─────────────────────────────────────────────────────────────
//
// Whole-buffer transfer between disk and memory.  Bytes pass through
// unchanged in both directions: no BOM handling, no encoding transform, no
// newline munging.  Callers own the mapping between these buffers and the
// editor control.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use crate::error::{JotterError, Result};

/// Read the entire file at `path` into a freshly allocated buffer.
///
/// The buffer size is fixed by the file's metadata at open time.  If the
/// number of bytes read to end of file differs from that size (the file
/// shrank or grew underneath us), the read fails with `ReadTruncated` rather
/// than returning a buffer that disagrees with the recorded size.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let expected = file.metadata()?.len();

    // Reserve the full size up front; a failed reservation is reported as an
    // error instead of aborting the process mid-command.
    let capacity =
        usize::try_from(expected).map_err(|_| JotterError::Allocation { bytes: expected })?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| JotterError::Allocation { bytes: expected })?;

    let actual = file.read_to_end(&mut buf)? as u64;
    if actual != expected {
        return Err(JotterError::ReadTruncated { expected, actual });
    }

    Ok(buf)
}

/// Write `bytes` to `path`, creating the file or truncating an existing one.
///
/// Tracks the running byte count so a short write surfaces as
/// `WriteTruncated` with both totals.  No rollback: a failed write leaves
/// whatever the file system managed to persist.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;

    let expected = bytes.len() as u64;
    let mut written = 0usize;
    while written < bytes.len() {
        match file.write(&bytes[written..]) {
            Ok(0) => {
                return Err(JotterError::WriteTruncated {
                    expected,
                    actual: written as u64,
                });
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    file.flush()?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_arbitrary_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");

        // Includes invalid UTF-8 sequences; transfer must not care.
        let bytes = vec![0x00, 0xFF, 0xFE, b'j', b'o', 0x80, 0x81, b'\n', 0x00];
        write_file(&path, &bytes).unwrap();
        assert_eq!(read_file(&path).unwrap(), bytes);
    }

    #[test]
    fn empty_file_reads_as_zero_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        write_file(&path, b"").unwrap();
        assert_eq!(read_file(&path).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-file.txt");

        match read_file(&path) {
            Err(JotterError::Io(e)) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("expected Io(NotFound), got {other:?}"),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn read_fails_when_the_size_changes_underneath() {
        // procfs generates file content at read time and reports a metadata
        // length of zero, so the stream always yields more bytes than the
        // size recorded at open.  Exactly the shape of a file that grew
        // between open and read.
        match read_file(Path::new("/proc/self/status")) {
            Err(JotterError::ReadTruncated { expected: 0, actual }) => assert!(actual > 0),
            other => panic!("expected ReadTruncated, got {other:?}"),
        }
    }

    #[test]
    fn write_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");

        write_file(&path, b"a much longer first revision").unwrap();
        write_file(&path, b"short").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"short");
    }

    #[test]
    fn read_reports_file_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sized.txt");

        write_file(&path, &[7u8; 4096]).unwrap();
        assert_eq!(read_file(&path).unwrap().len(), 4096);
    }

    #[test]
    fn write_to_directory_path_fails() {
        let dir = tempfile::tempdir().unwrap();

        match write_file(dir.path(), b"content") {
            Err(JotterError::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
