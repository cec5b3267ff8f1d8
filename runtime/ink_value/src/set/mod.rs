//! Set values: the story language's multi-valued enumerations.
//!
//! A Set holds named, integer-valued items drawn from one or more Set
//! definitions, together with the definitions themselves (its *origins*).
//! The origins let operators answer questions the membership table alone
//! cannot: "every item not in this Set" (`~`), "every item of the
//! definition" (`SET_ALL`) and "which item is value 3" (Int coercion).
//!
//! # Algebra
//!
//! Union, difference and intersection work on item identity. Ordering
//! compares the extreme values of each Set rather than individual items:
//! `A > B` holds when every item of `A` is above every item of `B`.
//!
//! All operations return a new Set; a Set is never changed in place once
//! it is shared.

mod definition;

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

pub use definition::{SetDefinition, SetDefinitionProvider, SetDefinitions};

/// Origin name given to Sets produced without a known definition.
pub const UNKNOWN_ORIGIN: &str = "UNKNOWN";

/// Identity of a Set item: its definition name and item name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetItem {
    origin_name: Option<String>,
    item_name: String,
}

impl SetItem {
    pub fn new(origin_name: Option<&str>, item_name: impl Into<String>) -> Self {
        SetItem {
            origin_name: origin_name.map(str::to_string),
            item_name: item_name.into(),
        }
    }

    /// Split a full name (`"Weekday.Mon"`) at its first dot.
    ///
    /// A name without a dot has no origin.
    pub fn parse(full_name: &str) -> Self {
        match full_name.split_once('.') {
            Some((origin, item)) => SetItem::new(Some(origin), item),
            None => SetItem::new(None, full_name),
        }
    }

    pub fn origin_name(&self) -> Option<&str> {
        self.origin_name.as_deref()
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// `Origin.Item`, or just the item name without an origin.
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin_name {
            Some(origin) => write!(f, "{origin}.{}", self.item_name),
            None => f.write_str(&self.item_name),
        }
    }
}

type Origins = SmallVec<[Arc<SetDefinition>; 1]>;

/// A Set value: membership table plus origin definitions.
#[derive(Clone, Debug, Default)]
pub struct SetValue {
    items: FxHashMap<SetItem, i32>,
    origins: Origins,
}

// Construction

impl SetValue {
    /// An empty Set with no origins.
    pub fn new() -> Self {
        SetValue::default()
    }

    /// A Set holding one item and no origins.
    pub fn single(item: SetItem, value: i32) -> Self {
        SetValue::new().with_item(item, value)
    }

    /// An empty Set whose only origin is the item-less `UNKNOWN`
    /// definition.
    pub fn unknown() -> Self {
        let empty: [(&str, i32); 0] = [];
        SetValue::new().with_origin(Arc::new(SetDefinition::new(UNKNOWN_ORIGIN, empty)))
    }

    /// An empty Set with a known origin.
    pub fn empty_of(definition: &Arc<SetDefinition>) -> Self {
        SetValue::new().with_origin(Arc::clone(definition))
    }

    /// Every item of `definition`.
    pub fn all_of(definition: &Arc<SetDefinition>) -> Self {
        definition
            .items()
            .fold(SetValue::empty_of(definition), |set, (item, value)| {
                set.with_item(item, value)
            })
    }

    /// The item of `definition` named `item_name`.
    pub fn from_item(definition: &Arc<SetDefinition>, item_name: &str) -> Option<Self> {
        let value = definition.value_of(item_name)?;
        Some(
            SetValue::empty_of(definition)
                .with_item(SetItem::new(Some(definition.name()), item_name), value),
        )
    }

    /// The item of `definition` carrying `value`.
    pub fn from_value(definition: &Arc<SetDefinition>, value: i32) -> Option<Self> {
        let item_name = definition.item_with_value(value)?;
        Some(
            SetValue::empty_of(definition)
                .with_item(SetItem::new(Some(definition.name()), item_name), value),
        )
    }

    /// Builder: add an item.
    #[must_use]
    pub fn with_item(mut self, item: SetItem, value: i32) -> Self {
        self.items.insert(item, value);
        self
    }

    /// Builder: add an origin definition, ignoring duplicates by name.
    #[must_use]
    pub fn with_origin(mut self, definition: Arc<SetDefinition>) -> Self {
        push_origin(&mut self.origins, definition);
        self
    }
}

fn push_origin(origins: &mut Origins, definition: Arc<SetDefinition>) {
    if !origins.iter().any(|o| o.name() == definition.name()) {
        origins.push(definition);
    }
}

fn merged_origins(left: &Origins, right: &Origins) -> Origins {
    let mut merged = left.clone();
    for def in right {
        push_origin(&mut merged, Arc::clone(def));
    }
    merged
}

// Inspection

impl SetValue {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_item(&self, item: &SetItem) -> bool {
        self.items.contains_key(item)
    }

    pub fn value_of(&self, item: &SetItem) -> Option<i32> {
        self.items.get(item).copied()
    }

    /// Items in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&SetItem, i32)> {
        self.items.iter().map(|(item, &value)| (item, value))
    }

    /// Items ordered by value, ties broken by item identity.
    pub fn items_by_value(&self) -> Vec<(&SetItem, i32)> {
        let mut items: Vec<_> = self.iter().collect();
        items.sort_by(|(a, av), (b, bv)| av.cmp(bv).then_with(|| a.cmp(b)));
        items
    }

    pub fn origins(&self) -> &[Arc<SetDefinition>] {
        &self.origins
    }

    pub fn origin_names(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(|def| def.name())
    }

    /// The one definition every item provably comes from.
    ///
    /// `None` when items span several definitions or an item's definition
    /// is not among the origins. An empty Set with exactly one origin
    /// reports that origin.
    pub fn single_origin(&self) -> Option<&Arc<SetDefinition>> {
        let mut names = self.items.keys().map(SetItem::origin_name);
        let Some(first) = names.next() else {
            return match self.origins.as_slice() {
                [only] => Some(only),
                _ => None,
            };
        };
        let first = first?;
        if !names.all(|name| name == Some(first)) {
            return None;
        }
        self.origins.iter().find(|def| def.name() == first)
    }

    /// Name of the single origin definition.
    pub fn single_origin_name(&self) -> Option<&str> {
        self.single_origin().map(|def| def.name())
    }

    /// Item with the greatest value.
    pub fn max_item(&self) -> Option<(&SetItem, i32)> {
        self.iter()
            .max_by(|(a, av), (b, bv)| av.cmp(bv).then_with(|| b.cmp(a)))
    }

    /// Item with the least value.
    pub fn min_item(&self) -> Option<(&SetItem, i32)> {
        self.iter()
            .min_by(|(a, av), (b, bv)| av.cmp(bv).then_with(|| a.cmp(b)))
    }

    fn max_value(&self) -> Option<i32> {
        self.items.values().copied().max()
    }

    fn min_value(&self) -> Option<i32> {
        self.items.values().copied().min()
    }

    fn keeping_origins(&self, items: FxHashMap<SetItem, i32>) -> Self {
        SetValue {
            items,
            origins: self.origins.clone(),
        }
    }
}

// Algebra

impl SetValue {
    /// Items in either Set. Origins of both are kept.
    #[must_use]
    pub fn union(&self, other: &SetValue) -> Self {
        let mut items = self.items.clone();
        for (item, &value) in &other.items {
            items.insert(item.clone(), value);
        }
        SetValue {
            items,
            origins: merged_origins(&self.origins, &other.origins),
        }
    }

    /// Items of `self` not in `other`.
    #[must_use]
    pub fn without(&self, other: &SetValue) -> Self {
        self.keeping_origins(
            self.items
                .iter()
                .filter(|(item, _)| !other.items.contains_key(*item))
                .map(|(item, &value)| (item.clone(), value))
                .collect(),
        )
    }

    /// Items in both Sets.
    #[must_use]
    pub fn intersect(&self, other: &SetValue) -> Self {
        self.keeping_origins(
            self.items
                .iter()
                .filter(|(item, _)| other.items.contains_key(*item))
                .map(|(item, &value)| (item.clone(), value))
                .collect(),
        )
    }

    /// Whether every item of `other` is in `self`.
    ///
    /// An empty `other` is always contained.
    pub fn contains(&self, other: &SetValue) -> bool {
        other.items.keys().all(|item| self.items.contains_key(item))
    }

    /// Every item of `self` lies above every item of `other`.
    pub fn greater_than(&self, other: &SetValue) -> bool {
        match (self.min_value(), other.max_value()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(min), Some(other_max)) => min > other_max,
        }
    }

    /// Both extremes of `self` are at or above those of `other`.
    pub fn greater_than_or_equals(&self, other: &SetValue) -> bool {
        match (self.extremes(), other.extremes()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some((min, max)), Some((other_min, other_max))) => {
                min >= other_min && max >= other_max
            }
        }
    }

    /// Every item of `self` lies below every item of `other`.
    pub fn less_than(&self, other: &SetValue) -> bool {
        match (self.max_value(), other.min_value()) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(max), Some(other_min)) => max < other_min,
        }
    }

    /// Both extremes of `self` are at or below those of `other`.
    pub fn less_than_or_equals(&self, other: &SetValue) -> bool {
        match (self.extremes(), other.extremes()) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some((min, max)), Some((other_min, other_max))) => {
                max <= other_max && min <= other_min
            }
        }
    }

    fn extremes(&self) -> Option<(i32, i32)> {
        Some((self.min_value()?, self.max_value()?))
    }

    /// The greatest item as a one-item Set (empty for an empty Set).
    #[must_use]
    pub fn max_as_set(&self) -> Self {
        self.keeping_origins(
            self.max_item()
                .map(|(item, value)| (item.clone(), value))
                .into_iter()
                .collect(),
        )
    }

    /// The least item as a one-item Set (empty for an empty Set).
    #[must_use]
    pub fn min_as_set(&self) -> Self {
        self.keeping_origins(
            self.min_item()
                .map(|(item, value)| (item.clone(), value))
                .into_iter()
                .collect(),
        )
    }

    /// Items of the origin definition that are not in `self`.
    ///
    /// `None` without a single origin.
    pub fn inverse(&self) -> Option<Self> {
        Some(self.all()?.without(self))
    }

    /// Every item of the origin definition.
    ///
    /// `None` without a single origin.
    pub fn all(&self) -> Option<Self> {
        self.origins().all_items(self.single_origin_name()?)
    }
}

impl PartialEq for SetValue {
    /// Membership equality; origins and values are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && other.items.keys().all(|item| self.items.contains_key(item))
    }
}

impl fmt::Display for SetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (item, _)) in self.items_by_value().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(item.item_name())?;
        }
        Ok(())
    }
}
