use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct TeacherId(pub u64);

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One of the five text fields shared by the form and the stored record, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Field {
    FirstName,
    LastName,
    /// The surname the roster is searched by.
    SecondLastName,
    Email,
    Subject,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::SecondLastName => "Second last name",
            Self::Email => "Email",
            Self::Subject => "Subject",
        }
    }

    /// The name used on the command line, e.g. `second-last-name`.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// In-progress form input. Every field is always present, possibly empty.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub first_name: String,
    pub last_name: String,
    pub second_last_name: String,
    pub email: String,
    pub subject: String,
}

impl Draft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::SecondLastName => &self.second_last_name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::SecondLastName => &mut self.second_last_name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
        };
        *slot = value.into();
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        Field::iter().filter(|f| self.get(*f).is_empty()).collect()
    }

    /// True when the form may be submitted.
    pub fn is_complete(&self) -> bool {
        Field::iter().all(|f| !self.get(f).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Field::iter().all(|f| self.get(f).is_empty())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRecord {
    pub id: TeacherId,
    pub first_name: String,
    pub last_name: String,
    pub second_last_name: String,
    pub email: String,
    pub subject: String,
}

impl TeacherRecord {
    pub fn from_draft(id: TeacherId, draft: Draft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            second_last_name: draft.second_last_name,
            email: draft.email,
            subject: draft.subject,
        }
    }

    /// Replace all five fields, keeping the id.
    pub fn set_details(&mut self, draft: Draft) {
        *self = Self::from_draft(self.id, draft);
    }

    /// The five fields without the id, as loaded into the form for editing.
    pub fn to_draft(&self) -> Draft {
        Draft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            second_last_name: self.second_last_name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
        }
    }

    pub fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.first_name, self.last_name, self.second_last_name
        )
    }

    pub fn identify(&self) -> String {
        format!("[{}] {}", self.id, self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> Draft {
        Draft {
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            second_last_name: "Garcia".into(),
            email: "ana@example.org".into(),
            subject: "Math".into(),
        }
    }

    #[test]
    fn field_names_are_kebab_case() {
        assert_eq!(Field::SecondLastName.name(), "second-last-name");
        assert_eq!(
            "first-name".parse::<Field>().unwrap(),
            Field::FirstName
        );
        assert!("middle-name".parse::<Field>().is_err());
    }

    #[test]
    fn fields_iterate_in_form_order() {
        let order: Vec<_> = Field::iter().collect();
        assert_eq!(
            order,
            vec![
                Field::FirstName,
                Field::LastName,
                Field::SecondLastName,
                Field::Email,
                Field::Subject
            ]
        );
    }

    #[test]
    fn draft_completeness() {
        let mut draft = Draft::default();
        assert!(draft.is_empty());
        assert!(!draft.is_complete());
        assert_eq!(draft.missing_fields().len(), 5);

        draft = sample_draft();
        assert!(draft.is_complete());

        draft.set(Field::Email, "");
        assert!(!draft.is_complete());
        assert!(!draft.is_empty());
        assert_eq!(draft.missing_fields(), vec![Field::Email]);
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut draft = sample_draft();
        draft.set(Field::Subject, " ");
        assert!(draft.is_complete());
    }

    #[test]
    fn record_keeps_id_when_details_replaced() {
        let mut record = TeacherRecord::from_draft(TeacherId(7), sample_draft());
        let mut changed = sample_draft();
        changed.set(Field::Subject, "History");
        record.set_details(changed.clone());

        assert_eq!(record.id, TeacherId(7));
        assert_eq!(record.to_draft(), changed);
        assert_eq!(record.full_name(), "Ana Ruiz Garcia");
    }

    #[test]
    fn record_json_uses_camel_case() {
        let record = TeacherRecord::from_draft(TeacherId(1), sample_draft());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["secondLastName"], "Garcia");
        assert_eq!(json["id"], 1);
    }
}
