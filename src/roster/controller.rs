use super::{Draft, Error, Field, Result, TeacherId, TeacherRecord};

/// Whether the form creates a new record or updates an existing one.
/// Derived from [`Roster::editing`], never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(TeacherId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created(TeacherId),
    Updated(TeacherId),
}

/// The roster state and the only code allowed to change it.
#[derive(Debug)]
pub struct Roster {
    records: Vec<TeacherRecord>,
    search_term: String,
    /// `Some` while the form is editing that record.
    editing: Option<TeacherId>,
    draft: Draft,
    next_id: u64,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Roster {
        Roster {
            records: Vec::new(),
            search_term: String::new(),
            editing: None,
            draft: Draft::default(),
            next_id: 1,
        }
    }

    pub fn records(&self) -> &[TeacherRecord] {
        &self.records
    }

    pub fn record(&self, id: TeacherId) -> Option<&TeacherRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn editing(&self) -> Option<TeacherId> {
        self.editing
    }

    pub fn mode(&self) -> FormMode {
        match self.editing {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    fn generate_id(&mut self) -> TeacherId {
        let id = TeacherId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Store the draft, either as a new record or over the record being edited.
    ///
    /// The caller is responsible for only submitting a complete draft; nothing is validated here.
    pub fn submit(&mut self) -> Submitted {
        let draft = std::mem::take(&mut self.draft);

        if let Some(id) = self.editing.take() {
            if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
                record.set_details(draft);
                log::debug!("Updated teacher {}", record.identify());
                return Submitted::Updated(id);
            }
            log::warn!("Edit target {id} is gone, adding the form as a new teacher instead");
        }

        let record = TeacherRecord::from_draft(self.generate_id(), draft);
        log::debug!("Added teacher {}", record.identify());
        let id = record.id;
        self.records.push(record);
        Submitted::Created(id)
    }

    pub fn begin_edit(&mut self, id: TeacherId) -> Result<()> {
        let Some(record) = self.record(id) else {
            return Err(Error::UnknownTeacher(id));
        };

        self.draft = record.to_draft();
        self.editing = Some(id);
        log::debug!("Editing teacher {id}");
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing.take() {
            log::debug!("Cancelled editing teacher {id}");
        }
        self.draft = Draft::default();
    }

    /// Remove a record. Confirmation must already have happened.
    ///
    /// Deleting the record currently being edited also leaves edit mode and clears the form.
    pub fn delete(&mut self, id: TeacherId) -> Result<TeacherRecord> {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            return Err(Error::UnknownTeacher(id));
        };

        let removed = self.records.remove(index);
        if self.editing == Some(id) {
            self.editing = None;
            self.draft = Draft::default();
        }

        log::debug!("Deleted teacher {}", removed.identify());
        Ok(removed)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Records whose second last name contains the search term, ignoring case, in roster order.
    pub fn visible_records(&self) -> Vec<&TeacherRecord> {
        let needle = self.search_term.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.second_last_name.to_lowercase().contains(&needle))
            .collect()
    }
}
