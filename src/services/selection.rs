//! Resolving a [`RecordSelector`] against a collection

use crate::error::{AssistantError, AssistantResult};
use crate::models::{Record, RecordSelector};

fn not_found<T: Record>(selector: &RecordSelector) -> AssistantError {
    AssistantError::NotFound {
        entity_type: T::ENTITY_TYPE.label(),
        identifier: selector.to_string(),
    }
}

fn index_position<T: Record>(records: &[T], index: usize) -> AssistantResult<usize> {
    if index == 0 || index > records.len() {
        return Err(AssistantError::IndexOutOfRange {
            entity_type: T::ENTITY_TYPE.label(),
            index,
            len: records.len(),
        });
    }
    Ok(index - 1)
}

/// Position of the record the selector names
///
/// A key selects its first match.
pub fn position<T: Record>(records: &[T], selector: &RecordSelector) -> AssistantResult<usize> {
    match selector {
        RecordSelector::Index(index) => index_position(records, *index),
        RecordSelector::Key(key) => records
            .iter()
            .position(|r| r.matches_key(key))
            .ok_or_else(|| not_found::<T>(selector)),
    }
}

/// Remove what the selector names and return the removed records
///
/// A key removes every match; an index removes exactly one record.
pub fn remove<T: Record>(records: &mut Vec<T>, selector: &RecordSelector) -> AssistantResult<Vec<T>> {
    match selector {
        RecordSelector::Index(index) => {
            let pos = index_position(records, *index)?;
            Ok(vec![records.remove(pos)])
        }
        RecordSelector::Key(key) => {
            let (removed, kept): (Vec<T>, Vec<T>) =
                records.drain(..).partition(|r| r.matches_key(key));
            *records = kept;
            if removed.is_empty() {
                return Err(not_found::<T>(selector));
            }
            Ok(removed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Note;

    fn notes() -> Vec<Note> {
        vec![
            Note::new("milk", ["a"]),
            Note::new("eggs", ["b"]),
            Note::new(" MILK ", ["c"]),
        ]
    }

    #[test]
    fn test_position_by_key_takes_first_match() {
        let pos = position(&notes(), &RecordSelector::key("Milk")).unwrap();
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_position_by_index() {
        assert_eq!(position(&notes(), &RecordSelector::Index(2)).unwrap(), 1);

        let err = position(&notes(), &RecordSelector::Index(0)).unwrap_err();
        assert!(matches!(err, AssistantError::IndexOutOfRange { len: 3, .. }));
        assert!(position(&notes(), &RecordSelector::Index(4)).is_err());
    }

    #[test]
    fn test_remove_by_key_removes_all_matches() {
        let mut records = notes();
        let removed = remove(&mut records, &RecordSelector::key("milk")).unwrap();

        assert_eq!(removed.len(), 2);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "eggs");
    }

    #[test]
    fn test_remove_missing_key_leaves_collection() {
        let mut records = notes();
        let err = remove(&mut records, &RecordSelector::key("bread")).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Note not found: bread");
        assert_eq!(records, notes());
    }

    #[test]
    fn test_remove_by_index() {
        let mut records = notes();
        let removed = remove(&mut records, &RecordSelector::Index(3)).unwrap();

        assert_eq!(removed[0].text, " MILK ");
        assert_eq!(records.len(), 2);
    }
}
