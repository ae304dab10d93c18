//! The single ID record: five fixed-capacity text fields.

use crate::config::FIELD_CAPACITY;
use heapless::String;

/// Text of one record field.
pub type FieldText = String<FIELD_CAPACITY>;

/// The five fields of a record, in file order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldKind {
    Name,
    Email,
    Tel,
    Addr,
    Notes,
}

impl FieldKind {
    pub const COUNT: usize = 5;

    /// All fields in the order they are written to the file and shown on the card.
    pub const ALL: [FieldKind; Self::COUNT] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Tel,
        FieldKind::Addr,
        FieldKind::Notes,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Key used for this field in the record file.
    pub const fn key(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Email => "Email",
            FieldKind::Tel => "Tel",
            FieldKind::Addr => "Addr",
            FieldKind::Notes => "Notes",
        }
    }

    /// Label drawn in front of the value on the ID card.
    pub const fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "Name:",
            FieldKind::Email => "Email:",
            FieldKind::Tel => "Tel:",
            FieldKind::Addr => "Addr:",
            FieldKind::Notes => "Notes:",
        }
    }

    /// Header of the text prompt that edits this field.
    pub const fn prompt(self) -> &'static str {
        match self {
            FieldKind::Name => "Enter Name:",
            FieldKind::Email => "Enter Email:",
            FieldKind::Tel => "Enter Tel:",
            FieldKind::Addr => "Enter Address:",
            FieldKind::Notes => "Enter Notes:",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Contact details shown on the ID card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Record {
    pub name: FieldText,
    pub email: FieldText,
    pub tel: FieldText,
    pub addr: FieldText,
    pub notes: FieldText,
}

impl Record {
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            tel: String::new(),
            addr: String::new(),
            notes: String::new(),
        }
    }

    pub fn get(&self, field: FieldKind) -> &str {
        match field {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Tel => &self.tel,
            FieldKind::Addr => &self.addr,
            FieldKind::Notes => &self.notes,
        }
    }

    fn slot(&mut self, field: FieldKind) -> &mut FieldText {
        match field {
            FieldKind::Name => &mut self.name,
            FieldKind::Email => &mut self.email,
            FieldKind::Tel => &mut self.tel,
            FieldKind::Addr => &mut self.addr,
            FieldKind::Notes => &mut self.notes,
        }
    }

    /// Replace one field.
    ///
    /// Values longer than `FIELD_CAPACITY` bytes are cut at the last
    /// character boundary that fits. Returns `false` if that happened.
    pub fn set(&mut self, field: FieldKind, value: &str) -> bool {
        copy_truncated(self.slot(field), value)
    }

    pub fn is_empty(&self) -> bool {
        FieldKind::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}

/// Overwrite `dst` with as much of `src` as fits, whole characters only.
///
/// Returns `true` if all of `src` was copied.
pub fn copy_truncated<const N: usize>(dst: &mut String<N>, src: &str) -> bool {
    dst.clear();
    for c in src.chars() {
        if dst.push(c).is_err() {
            return false;
        }
    }
    true
}
