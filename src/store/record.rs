// =====================================================================
// File: store/record.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 14, 2026
//
// Description:
//   The record value type and the inputs used to create and patch it.
//
//   - `Record`      : One managed entity (id, name, color, size, weight).
//   - `RecordDraft` : Field values for a record that has no id yet.
//   - `RecordPatch` : Optional replacement values for the mutable fields.
//   - `SortField`   : Fields a listing can be sorted by.
// =====================================================================
use crate::StoreError;
use std::fmt;
use std::str::FromStr;

/// Identifier assigned by the store, starting at 1 and never reused.
pub type RecordId = u64;

/// One managed record. `id` and `name` are fixed once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    name: String,
    pub color: String,
    pub size: String,
    pub weight: String,
}


impl Record {
    pub(crate) fn from_draft(id: RecordId, draft: RecordDraft) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
            size: draft.size,
            weight: draft.weight,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of `field` as used for sorting.
    pub fn field(&self, field: SortField) -> &str {
        match field {
            SortField::Name => &self.name,
            SortField::Color => &self.color,
            SortField::Size => &self.size,
            SortField::Weight => &self.weight,
        }
    }

    /// Apply the non-blank values of `patch`. Blank means missing, empty,
    /// or whitespace only; those fields keep their current value.
    pub(crate) fn apply(&mut self, patch: RecordPatch) {
        fn replace(slot: &mut String, value: Option<String>) {
            if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                *slot = value;
            }
        }

        replace(&mut self.color, patch.color);
        replace(&mut self.size, patch.size);
        replace(&mut self.weight, patch.weight);
    }
}


impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, Name: {}, Color: {}, Size: {}, Weight: {}",
            self.id, self.name, self.color, self.size, self.weight
        )
    }
}


/// Field values for a new record; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: String,
    pub color: String,
    pub size: String,
    pub weight: String,
}


impl RecordDraft {
    /// Convenience constructor taking anything string-like.
    ///
    /// # Example
    /// ```
    /// use recordstore::RecordDraft;
    /// let draft = RecordDraft::new("Lion", "Gold", "Large", "190kg");
    /// assert_eq!(draft.name, "Lion");
    /// ```
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        size: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            size: size.into(),
            weight: weight.into(),
        }
    }
}


/// Replacement values for an update. `None` and blank strings are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub color: Option<String>,
    pub size: Option<String>,
    pub weight: Option<String>,
}


impl RecordPatch {
    /// Returns `true` if applying the patch would change nothing.
    pub fn is_blank(&self) -> bool {
        [&self.color, &self.size, &self.weight]
            .iter()
            .all(|value| value.as_deref().is_none_or(|v| v.trim().is_empty()))
    }
}


/// Fields a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Color,
    Size,
    Weight,
}


impl SortField {
    pub const ALL: [SortField; 4] = [SortField::Name, SortField::Color, SortField::Size, SortField::Weight];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Color => "color",
            SortField::Size => "size",
            SortField::Weight => "weight",
        }
    }
}


impl FromStr for SortField {
    type Err = StoreError;

    /// Case-insensitive field name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StoreError::InvalidSortField(s.to_string()))
    }
}


impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
