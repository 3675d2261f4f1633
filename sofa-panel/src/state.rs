//! Filter state - single source of truth
//!
//! `FilterState` is replaced, never edited in place: each transition merges
//! a `PartialFilterUpdate` over the previous value.

use std::fmt;

use crate::record::Record;

/// The four filterable attributes, in narrowing order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    Style,
    Material,
    Color,
    Origin,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Style,
        FilterField::Material,
        FilterField::Color,
        FilterField::Origin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FilterField::Style => "style",
            FilterField::Material => "material",
            FilterField::Color => "color",
            FilterField::Origin => "origin",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Heading used for the field's control
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Style => "Style",
            FilterField::Material => "Material",
            FilterField::Color => "Color",
            FilterField::Origin => "Origin",
        }
    }

    /// The record's value for this field
    pub fn of(self, record: &Record) -> &str {
        match self {
            FilterField::Style => &record.style,
            FilterField::Material => &record.material,
            FilterField::Color => &record.color,
            FilterField::Origin => &record.origin,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current filter values; an empty value places no constraint
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub style: String,
    pub material: String,
    pub color: String,
    pub origin: String,
}

impl FilterState {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Style => &self.style,
            FilterField::Material => &self.material,
            FilterField::Color => &self.color,
            FilterField::Origin => &self.origin,
        }
    }

    fn slot(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Style => &mut self.style,
            FilterField::Material => &mut self.material,
            FilterField::Color => &mut self.color,
            FilterField::Origin => &mut self.origin,
        }
    }

    /// Whether a single field admits the record
    pub fn admits(&self, field: FilterField, record: &Record) -> bool {
        let wanted = self.get(field);
        wanted.is_empty() || wanted == field.of(record)
    }

    /// Conjunction of every field's constraint
    pub fn matches(&self, record: &Record) -> bool {
        FilterField::ALL
            .into_iter()
            .all(|field| self.admits(field, record))
    }

    pub fn is_unconstrained(&self) -> bool {
        FilterField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    /// New state with every field present in `update` overwritten
    pub fn merged(&self, update: &PartialFilterUpdate) -> Self {
        let mut next = self.clone();
        for (field, value) in update.iter() {
            *next.slot(field) = value.to_string();
        }
        next
    }
}

/// Sparse set of field changes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialFilterUpdate {
    style: Option<String>,
    material: Option<String>,
    color: Option<String>,
    origin: Option<String>,
}

impl PartialFilterUpdate {
    /// Update touching nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field to `value`
    pub fn field(field: FilterField, value: impl Into<String>) -> Self {
        Self::new().with(field, value)
    }

    /// Reset one field to its default (empty)
    pub fn reset(field: FilterField) -> Self {
        Self::field(field, FilterState::default().get(field))
    }

    /// Reset every field: the full default state
    pub fn reset_all() -> Self {
        let defaults = FilterState::default();
        FilterField::ALL
            .into_iter()
            .fold(Self::new(), |update, field| update.with(field, defaults.get(field)))
    }

    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        *self.slot(field) = Some(value.into());
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Style => self.style.as_deref(),
            FilterField::Material => self.material.as_deref(),
            FilterField::Color => self.color.as_deref(),
            FilterField::Origin => self.origin.as_deref(),
        }
    }

    fn slot(&mut self, field: FilterField) -> &mut Option<String> {
        match field {
            FilterField::Style => &mut self.style,
            FilterField::Material => &mut self.material,
            FilterField::Color => &mut self.color,
            FilterField::Origin => &mut self.origin,
        }
    }

    /// Present fields, in field order
    pub fn iter(&self) -> impl Iterator<Item = (FilterField, &str)> + '_ {
        FilterField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Combine two updates; fields in `other` win
    pub fn merge(mut self, other: &PartialFilterUpdate) -> Self {
        for (field, value) in other.iter() {
            self.set(field, value);
        }
        self
    }
}

impl fmt::Display for PartialFilterUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (field, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {value:?}")?;
        }
        f.write_str("}")
    }
}
