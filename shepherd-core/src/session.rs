//! Run-scoped session state.

use std::path::PathBuf;

use chrono::Utc;

use crate::types::Repo;

/// Everything one run of the tool carries: immutable settings resolved at
/// startup plus the mutable repository list.
///
/// The session identifier is derived from the UTC start time and namespaces
/// every branch this run creates, so concurrent runs cannot collide.
#[derive(Debug)]
pub struct Session {
    /// Commit-message editor command line (`$EDITOR`, falling back to `vi`).
    pub editor: String,
    /// Root directory the clones land in. Persists after the run.
    pub scratch_dir: PathBuf,
    /// Unique per-run identifier, `yymmdd-HHMMSS`.
    pub session_id: String,
    /// `-v` count from the CLI.
    pub verbosity: u8,
    /// Run the fork-ensure pass before cloning.
    pub check_forks: bool,
    pub repos: Vec<Repo>,
}

impl Session {
    pub fn new(
        editor: String,
        scratch_dir: PathBuf,
        verbosity: u8,
        check_forks: bool,
        repos: Vec<Repo>,
    ) -> Self {
        let session_id = Utc::now().format("%y%m%d-%H%M%S").to_string();
        Self {
            editor,
            scratch_dir,
            session_id,
            verbosity,
            check_forks,
            repos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new("vi".to_owned(), PathBuf::from("/tmp/x"), 1, false, vec![])
    }

    #[test]
    fn session_id_is_timestamp_shaped() {
        let s = session();
        assert_eq!(s.session_id.len(), 13);
        let (date, time) = s.session_id.split_once('-').expect("dash separator");
        assert!(date.chars().all(|c| c.is_ascii_digit()));
        assert!(time.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn settings_are_carried_through() {
        let s = Session::new("code --wait".to_owned(), PathBuf::from("/s"), 3, true, vec![]);
        assert_eq!(s.editor, "code --wait");
        assert_eq!(s.verbosity, 3);
        assert!(s.check_forks);
    }
}
