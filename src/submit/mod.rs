use crate::party::Guess;
use crate::store::{load_tips, save_tips, TipCollection};
use anyhow::Result;
use std::fmt;
use std::path::Path;

/// Why a submission was refused. The collection and the backing file are left
/// untouched in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The trimmed name was empty
    MissingName,
    /// The name is already taken by a stored tip
    DuplicateName,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::MissingName => f.write_str("please enter a name"),
            SubmitError::DuplicateName => f.write_str("this name already exists"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Check a candidate name against the freshly loaded collection.
///
/// The name is compared and stored as given; only the emptiness check trims.
pub fn validate_submission(name: &str, tips: &TipCollection) -> Result<(), SubmitError> {
    if name.trim().is_empty() {
        return Err(SubmitError::MissingName);
    }
    if tips.contains(name) {
        return Err(SubmitError::DuplicateName);
    }
    Ok(())
}

/// Persist a new tip: load, validate, insert, save.
///
/// Reads the whole collection before writing so a duplicate name is caught
/// against current file content. No locking: two submitters racing between
/// load and save is last-write-wins, accepted for this scale of use.
///
/// The deadline gate is not checked here; the calling layer refuses locked
/// submissions before ever reaching the store.
pub fn submit_tip(path: &Path, name: &str, guess: Guess) -> Result<()> {
    let mut tips = load_tips(path)?;
    validate_submission(name, &tips)?;
    tips.insert(name.to_string(), guess);
    save_tips(path, &tips)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::Party;
    use crate::scoring::rank_tips;
    use std::env;

    fn guess(values: [f64; 7]) -> Guess {
        Party::ALL.iter().copied().zip(values).collect()
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let tips = TipCollection::new();
        assert_eq!(validate_submission("", &tips), Err(SubmitError::MissingName));
        assert_eq!(
            validate_submission("   ", &tips),
            Err(SubmitError::MissingName)
        );
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut tips = TipCollection::new();
        tips.insert("Anna".to_string(), guess([10.0; 7]));
        assert_eq!(
            validate_submission("Anna", &tips),
            Err(SubmitError::DuplicateName)
        );
        assert_eq!(validate_submission("Ben", &tips), Ok(()));
    }

    #[test]
    fn test_blank_name_never_touches_the_store() {
        let temp_path = env::temp_dir().join("tippspiel_test_blank_name.json");
        let _ = std::fs::remove_file(&temp_path);

        let err = submit_tip(&temp_path, "  ", guess([10.0; 7])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SubmitError>(),
            Some(&SubmitError::MissingName)
        );
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_duplicate_submission_leaves_collection_unchanged() {
        let temp_path = env::temp_dir().join("tippspiel_test_duplicate.json");
        let _ = std::fs::remove_file(&temp_path);

        submit_tip(&temp_path, "Anna", guess([10.0; 7])).unwrap();
        let before = load_tips(&temp_path).unwrap();

        let err = submit_tip(&temp_path, "Anna", guess([20.0; 7])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SubmitError>(),
            Some(&SubmitError::DuplicateName)
        );

        let after = load_tips(&temp_path).unwrap();
        assert_eq!(before, after);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_end_to_end_submit_and_rank() {
        let temp_path = env::temp_dir().join("tippspiel_test_end_to_end.json");
        let _ = std::fs::remove_file(&temp_path);

        submit_tip(
            &temp_path,
            "Anna",
            guess([30.0, 25.0, 10.0, 5.0, 15.0, 5.0, 10.0]),
        )
        .unwrap();
        submit_tip(
            &temp_path,
            "Ben",
            guess([30.5, 20.0, 12.0, 5.0, 16.5, 5.5, 10.5]),
        )
        .unwrap();

        let tips = load_tips(&temp_path).unwrap();
        let results = guess([30.0, 25.0, 10.0, 5.0, 15.0, 5.0, 10.0]);
        let standings = rank_tips(&tips, &results);

        let order: Vec<_> = standings
            .ranked
            .iter()
            .map(|t| (t.name.as_str(), t.result.score))
            .collect();
        assert_eq!(order, vec![("Anna", 21), ("Ben", 6)]);

        let _ = std::fs::remove_file(&temp_path);
    }
}
