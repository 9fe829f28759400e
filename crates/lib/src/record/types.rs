//! Core types for application records.
//!
//! Location, status and mode are closed sets. Each value has a display text
//! which is also its on-disk form, so parsing and printing are exact inverses.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::RecordError;
use crate::constants::{GLOBAL_RECORDS_FILE, USER_RECORDS_SUFFIX};

/// Defines a closed set of values with a fixed display text per value.
///
/// Generates `ALL`, `as_str`, `Display`, `FromStr` (failing with
/// [`RecordError::InvalidValue`]) and string-based serde impls.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every value, in the order offered to users.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display text, identical to the stored form.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = RecordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| RecordError::InvalidValue {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

text_enum! {
    /// Where the position is based: one of the 50 US states, or remote.
    Location, field = "location" {
        Remote => "Remote",
        Alabama => "Alabama",
        Alaska => "Alaska",
        Arizona => "Arizona",
        Arkansas => "Arkansas",
        California => "California",
        Colorado => "Colorado",
        Connecticut => "Connecticut",
        Delaware => "Delaware",
        Florida => "Florida",
        Georgia => "Georgia",
        Hawaii => "Hawaii",
        Idaho => "Idaho",
        Illinois => "Illinois",
        Indiana => "Indiana",
        Iowa => "Iowa",
        Kansas => "Kansas",
        Kentucky => "Kentucky",
        Louisiana => "Louisiana",
        Maine => "Maine",
        Maryland => "Maryland",
        Massachusetts => "Massachusetts",
        Michigan => "Michigan",
        Minnesota => "Minnesota",
        Mississippi => "Mississippi",
        Missouri => "Missouri",
        Montana => "Montana",
        Nebraska => "Nebraska",
        Nevada => "Nevada",
        NewHampshire => "New Hampshire",
        NewJersey => "New Jersey",
        NewMexico => "New Mexico",
        NewYork => "New York",
        NorthCarolina => "North Carolina",
        NorthDakota => "North Dakota",
        Ohio => "Ohio",
        Oklahoma => "Oklahoma",
        Oregon => "Oregon",
        Pennsylvania => "Pennsylvania",
        RhodeIsland => "Rhode Island",
        SouthCarolina => "South Carolina",
        SouthDakota => "South Dakota",
        Tennessee => "Tennessee",
        Texas => "Texas",
        Utah => "Utah",
        Vermont => "Vermont",
        Virginia => "Virginia",
        Washington => "Washington",
        WestVirginia => "West Virginia",
        Wisconsin => "Wisconsin",
        Wyoming => "Wyoming",
    }
}

text_enum! {
    /// Progress of an application.
    Status, field = "status" {
        Applied => "Applied",
        Interview => "Interview",
        Offer => "Offer",
        Rejected => "Rejected",
        Pending => "Pending",
    }
}

text_enum! {
    /// How the position is worked.
    Mode, field = "mode" {
        Online => "Online",
        Hybrid => "Hybrid",
        InPerson => "In-Person",
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Applied
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Online
    }
}

/// Date format used on disk and accepted from forms.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(text: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| RecordError::InvalidValue {
        field: "date",
        value: text.to_string(),
    })
}

/// One logged job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub company: String,
    pub role: String,
    pub location: Location,
    pub date: NaiveDate,
    pub status: Status,
    pub mode: Mode,
    /// Posting URL. May be empty and is never checked.
    #[serde(default)]
    pub link: String,
}

impl ApplicationRecord {
    /// Checks the fields that must be present on every record.
    pub fn validate(&self) -> Result<(), RecordError> {
        require("company", &self.company)?;
        require("role", &self.role)?;
        Ok(())
    }
}

/// Session-scoped identifier of a record held by a [`RecordStore`].
///
/// Assigned from a per-store counter when a record is loaded or appended and
/// never reused by that store, so it keeps naming the same record while
/// other rows are deleted around it. Ids are not persisted.
///
/// [`RecordStore`]: super::RecordStore
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub(crate) u64);

impl RecordId {
    /// Raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity whose records a record file holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Owner {
    /// The single implicit owner used when accounts are disabled.
    Global,
    /// An authenticated user, by username.
    User(String),
}

impl Owner {
    /// Name of this owner's record file, also used as the export file name.
    pub fn file_name(&self) -> String {
        match self {
            Owner::Global => GLOBAL_RECORDS_FILE.to_string(),
            Owner::User(username) => format!("{username}{USER_RECORDS_SUFFIX}"),
        }
    }

    /// The username, unless this is the global owner.
    pub fn username(&self) -> Option<&str> {
        match self {
            Owner::Global => None,
            Owner::User(username) => Some(username),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Global => f.write_str("(global)"),
            Owner::User(username) => f.write_str(username),
        }
    }
}

/// Record fields as submitted by a form, before validation.
///
/// Every field is text so that presentation layers can pass input through
/// unchanged. [`ApplicationForm::into_record`] applies the presence checks
/// and parses the closed sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub location: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub link: String,
}

impl ApplicationForm {
    /// Validates the form and builds a record from it.
    ///
    /// Company, role and location are checked for presence first, in that
    /// order, then the enumerated fields and the date are parsed.
    pub fn into_record(self) -> Result<ApplicationRecord, RecordError> {
        require("company", &self.company)?;
        require("role", &self.role)?;
        require("location", &self.location)?;

        Ok(ApplicationRecord {
            location: self.location.trim().parse()?,
            date: parse_date(self.date.trim())?,
            status: self.status.trim().parse()?,
            mode: self.mode.trim().parse()?,
            company: self.company,
            role: self.role,
            link: self.link,
        })
    }
}

impl From<&ApplicationRecord> for ApplicationForm {
    fn from(record: &ApplicationRecord) -> Self {
        Self {
            company: record.company.clone(),
            role: record.role.clone(),
            location: record.location.to_string(),
            date: record.date.format(DATE_FORMAT).to_string(),
            status: record.status.to_string(),
            mode: record.mode.to_string(),
            link: record.link.clone(),
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), RecordError> {
    if value.trim().is_empty() {
        return Err(RecordError::InvalidRecord { field });
    }
    Ok(())
}
