// ── User commands ─────────────────────────────────────────────────────────────
//
// Every action reachable from the menu bar, as a closed enum.  The Win32 menu
// identifiers live on the enum itself, so menu construction and WM_COMMAND
// dispatch cannot drift apart: both sides go through `menu_id`/`from_menu_id`.

/// An action the user can invoke from the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    /// File ▸ New: empty the editor and forget the current file.
    NewFile,
    /// File ▸ Open…: pick a file and load it.
    OpenFile,
    /// File ▸ Save…: pick a destination and write the editor content.
    SaveFile,
    /// File ▸ Exit: close the main window.
    Exit,
    /// Edit ▸ Cut: clipboard cut, handled by the edit control.
    Cut,
    /// Edit ▸ Copy: clipboard copy, handled by the edit control.
    Copy,
    /// Edit ▸ Paste: clipboard paste, handled by the edit control.
    Paste,
    /// Help ▸ About: show the about dialog.
    About,
}

impl Command {
    /// The stable menu identifier sent in the low word of WPARAM on
    /// WM_COMMAND.  File commands are 1001+, Edit 2001+, Help 9001.
    pub(crate) fn menu_id(self) -> usize {
        match self {
            Self::NewFile => 1001,
            Self::OpenFile => 1002,
            Self::SaveFile => 1003,
            Self::Exit => 1004,
            Self::Cut => 2001,
            Self::Copy => 2002,
            Self::Paste => 2003,
            Self::About => 9001,
        }
    }

    /// Map a WM_COMMAND identifier back to a command.
    ///
    /// Returns `None` for identifiers this build does not know, which the
    /// window procedure passes on to `DefWindowProcW`.
    pub(crate) fn from_menu_id(id: usize) -> Option<Self> {
        match id {
            1001 => Some(Self::NewFile),
            1002 => Some(Self::OpenFile),
            1003 => Some(Self::SaveFile),
            1004 => Some(Self::Exit),
            2001 => Some(Self::Cut),
            2002 => Some(Self::Copy),
            2003 => Some(Self::Paste),
            9001 => Some(Self::About),
            _ => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Command; 8] = [
        Command::NewFile,
        Command::OpenFile,
        Command::SaveFile,
        Command::Exit,
        Command::Cut,
        Command::Copy,
        Command::Paste,
        Command::About,
    ];

    #[test]
    fn menu_ids_round_trip() {
        for cmd in ALL {
            assert_eq!(Command::from_menu_id(cmd.menu_id()), Some(cmd));
        }
    }

    #[test]
    fn menu_ids_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.menu_id(), b.menu_id(), "{a:?} and {b:?} share an id");
            }
        }
    }

    #[test]
    fn unknown_ids_map_to_none() {
        assert_eq!(Command::from_menu_id(0), None);
        assert_eq!(Command::from_menu_id(1005), None);
        assert_eq!(Command::from_menu_id(2004), None);
        assert_eq!(Command::from_menu_id(usize::MAX), None);
    }
}
