//! Per-session registry of CSV columns and the data type chosen for each.
//!
//! The registry is created from the parsed CSV header, filled in from the
//! server-side data template and then edited by the user through the type
//! dropdowns. Only visible fields take part in validation and submission.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Code of a field whose type has not been chosen yet.
pub const UNSET_CODE: i32 = -1;
/// Label shown for a field whose type has not been chosen yet.
pub const UNSET_LABEL: &str = "unset";
/// Code of the column used to join the upload with analytics profile data.
pub const MERGE_KEY_CODE: i32 = 8;
/// Code of the column the model predicts.
pub const RESPONSE_CODE: i32 = 9;

/// The data types offered in the field dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Ignore,
    ContactDetails,
    Categorical,
    Numeric,
    Percentage,
    YesNo,
    Date,
    Text,
    MergeKey,
    Response,
}

impl FieldType {
    pub const ALL: [FieldType; 10] = [
        FieldType::Ignore,
        FieldType::ContactDetails,
        FieldType::Categorical,
        FieldType::Numeric,
        FieldType::Percentage,
        FieldType::YesNo,
        FieldType::Date,
        FieldType::Text,
        FieldType::MergeKey,
        FieldType::Response,
    ];

    pub fn code(self) -> i32 {
        match self {
            FieldType::Ignore => 0,
            FieldType::ContactDetails => 1,
            FieldType::Categorical => 2,
            FieldType::Numeric => 3,
            FieldType::Percentage => 4,
            FieldType::YesNo => 5,
            FieldType::Date => 6,
            FieldType::Text => 7,
            FieldType::MergeKey => MERGE_KEY_CODE,
            FieldType::Response => RESPONSE_CODE,
        }
    }

    /// Label sent to the model service, which derives the numeric code from it.
    pub fn label(self) -> &'static str {
        match self {
            FieldType::Ignore => "Ignore",
            FieldType::ContactDetails => "Contact Details",
            FieldType::Categorical => "Categorical",
            FieldType::Numeric => "Numeric",
            FieldType::Percentage => "Percentage",
            FieldType::YesNo => "Yes/No",
            FieldType::Date => "Date",
            FieldType::Text => "Text",
            FieldType::MergeKey => "GA Merge Variable",
            FieldType::Response => "Response Variable",
        }
    }

    pub fn from_code(code: i32) -> Option<FieldType> {
        FieldType::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// One column of the uploaded CSV together with its chosen data type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub type_code: i32,
    pub type_label: String,
    pub visible: bool,
}

impl Field {
    pub fn unset(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_code: UNSET_CODE,
            type_label: UNSET_LABEL.to_string(),
            visible: true,
        }
    }

    pub fn with_type(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            type_code: field_type.code(),
            type_label: field_type.label().to_string(),
            visible: true,
        }
    }

    pub fn is_unset(&self) -> bool {
        self.type_code == UNSET_CODE
    }
}

/// A suggestion from the data template: `[name, label, code]`.
///
/// The template is stored as CSV on the server, so the code may arrive either
/// as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: String,
    pub label: String,
    pub code: i32,
}

impl Serialize for TemplateEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.name, &self.label, self.code).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TemplateEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Code {
            Number(i32),
            Text(String),
        }

        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = TemplateEntry;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a [name, label, code] triple")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TemplateEntry, A::Error> {
                let name: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let label: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let code = match seq
                    .next_element::<Code>()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?
                {
                    Code::Number(code) => code,
                    Code::Text(text) => text.trim().parse::<i32>().map_err(|_| {
                        de::Error::invalid_value(de::Unexpected::Str(&text), &"an integer code")
                    })?,
                };
                // Extra template columns are ignored.
                while seq.next_element::<de::IgnoredAny>()?.is_some() {}
                Ok(TemplateEntry { name, label, code })
            }
        }

        deserializer.deserialize_seq(EntryVisitor)
    }
}

/// Ordered set of fields for the CSV currently loaded in the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRegistry {
    fields: Vec<Field>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole field set with unset, visible entries.
    pub fn initialize<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = names.into_iter().map(Field::unset).collect();
    }

    /// Applies data template suggestions to every field whose trimmed name
    /// matches exactly. Returns the number of fields updated.
    pub fn apply_template(&mut self, entries: &[TemplateEntry]) -> usize {
        let mut updated = 0;
        for entry in entries {
            let wanted = entry.name.trim();
            for field in self.fields.iter_mut().filter(|f| f.name.trim() == wanted) {
                field.type_code = entry.code;
                field.type_label = entry.label.clone();
                updated += 1;
            }
        }
        updated
    }

    /// User selection from a dropdown. Applies to every field with that name.
    pub fn set_type(&mut self, name: &str, code: i32, label: &str) {
        for field in self.fields.iter_mut().filter(|f| f.name == name) {
            field.type_code = code;
            field.type_label = label.to_string();
        }
    }

    pub fn set_visible(&mut self, name: &str, visible: bool) {
        for field in self.fields.iter_mut().filter(|f| f.name == name) {
            field.visible = visible;
        }
    }

    /// User selection from the dropdown of one table row. Duplicate column
    /// names are typed independently. Out-of-range rows are ignored.
    pub fn set_type_at(&mut self, index: usize, code: i32, label: &str) {
        if let Some(field) = self.fields.get_mut(index) {
            field.type_code = code;
            field.type_label = label.to_string();
        }
    }

    pub fn set_visible_at(&mut self, index: usize, visible: bool) {
        if let Some(field) = self.fields.get_mut(index) {
            field.visible = visible;
        }
    }

    /// Every registered field, hidden ones included.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Names of every registered field, in header order.
    pub fn names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The visible fields, in header order. This is what gets validated and
    /// submitted.
    pub fn snapshot(&self) -> Vec<Field> {
        self.fields.iter().filter(|f| f.visible).cloned().collect()
    }

    /// `(name, label)` pairs of the visible fields.
    pub fn field_pairs(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter(|f| f.visible)
            .map(|f| (f.name.clone(), f.type_label.clone()))
            .collect()
    }
}
