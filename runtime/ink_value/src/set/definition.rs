//! Set definitions and the definition provider contract.
//!
//! A definition is the named declaration a Set's items come from, e.g.
//! `Weekday = Mon, Tue, Wed`. Definitions are parsed elsewhere; this module
//! only answers the two questions the operators need: "what are all the
//! items" and "which item has this value".

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::errors::{unknown_set_item, EvalResult};

use super::{SetItem, SetValue};

/// A named Set declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetDefinition {
    name: String,
    items: FxHashMap<String, i32>,
    by_value: FxHashMap<i32, String>,
}

impl SetDefinition {
    /// Create a definition from `(item name, value)` pairs.
    ///
    /// Item values are unique within a definition; a repeated value keeps
    /// the first item that declared it for reverse lookup.
    pub fn new<N, I>(name: impl Into<String>, items: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, i32)>,
    {
        let mut by_name = FxHashMap::default();
        let mut by_value = FxHashMap::default();
        for (item, value) in items {
            let item = item.into();
            by_value.entry(value).or_insert_with(|| item.clone());
            by_name.insert(item, value);
        }
        SetDefinition {
            name: name.into(),
            items: by_name,
            by_value,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Value of the named item.
    pub fn value_of(&self, item_name: &str) -> Option<i32> {
        self.items.get(item_name).copied()
    }

    /// Name of the item carrying `value`.
    pub fn item_with_value(&self, value: i32) -> Option<&str> {
        self.by_value.get(&value).map(String::as_str)
    }

    /// All items as fully-qualified `SetItem`s.
    pub fn items(&self) -> impl Iterator<Item = (SetItem, i32)> + '_ {
        self.items
            .iter()
            .map(|(item, &value)| (SetItem::new(Some(&self.name), item), value))
    }
}

/// Lookup of Set definitions by name.
///
/// Implemented by whatever owns the story's definitions. The default
/// methods answer the item queries through `definition`.
pub trait SetDefinitionProvider {
    /// The definition named `name`.
    fn definition(&self, name: &str) -> Option<Arc<SetDefinition>>;

    /// Every item of the named definition as a Set.
    fn all_items(&self, name: &str) -> Option<SetValue> {
        self.definition(name).map(|def| SetValue::all_of(&def))
    }

    /// Name of the item with `value` in the named definition.
    fn item_with_value(&self, name: &str, value: i32) -> Option<String> {
        self.definition(name)
            .and_then(|def| def.item_with_value(value).map(str::to_string))
    }

    /// The item with `value` in the named definition, as a one-item Set
    /// whose origin is that definition.
    fn set_with_value(&self, name: &str, value: i32) -> Option<SetValue> {
        self.definition(name)
            .and_then(|def| SetValue::from_value(&def, value))
    }
}

/// The origin definitions a Set carries resolve its own item queries.
impl SetDefinitionProvider for [Arc<SetDefinition>] {
    fn definition(&self, name: &str) -> Option<Arc<SetDefinition>> {
        self.iter().find(|def| def.name() == name).cloned()
    }
}

/// An in-memory collection of definitions.
#[derive(Clone, Debug, Default)]
pub struct SetDefinitions {
    definitions: FxHashMap<String, Arc<SetDefinition>>,
}

impl SetDefinitions {
    pub fn new(definitions: impl IntoIterator<Item = SetDefinition>) -> Self {
        let definitions = definitions
            .into_iter()
            .map(|def| (def.name.clone(), Arc::new(def)))
            .collect();
        SetDefinitions { definitions }
    }

    /// Add a definition, replacing any existing one of the same name.
    pub fn insert(&mut self, definition: SetDefinition) -> Arc<SetDefinition> {
        let definition = Arc::new(definition);
        self.definitions
            .insert(definition.name.clone(), Arc::clone(&definition));
        definition
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Build a Set from fully-qualified item names (`"Weekday.Mon"`).
    ///
    /// Every item's definition becomes an origin of the result. An
    /// unqualified name is searched for across all definitions and must
    /// be unambiguous.
    pub fn set_of<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> EvalResult<SetValue> {
        let mut set = SetValue::new();
        for full_name in names {
            let (def, item) = self.resolve(full_name)?;
            let value = def
                .value_of(item.item_name())
                .ok_or_else(|| unknown_set_item(full_name))?;
            tracing::trace!(item = %item, value, "resolved set item");
            set = set.with_origin(def).with_item(item, value);
        }
        Ok(set)
    }

    fn resolve(&self, full_name: &str) -> EvalResult<(Arc<SetDefinition>, SetItem)> {
        let item = SetItem::parse(full_name);
        if let Some(origin) = item.origin_name() {
            let def = self
                .definitions
                .get(origin)
                .ok_or_else(|| unknown_set_item(full_name))?;
            return Ok((Arc::clone(def), item));
        }

        let mut found = self
            .definitions
            .values()
            .filter(|def| def.value_of(item.item_name()).is_some());
        match (found.next(), found.next()) {
            (Some(def), None) => Ok((
                Arc::clone(def),
                SetItem::new(Some(def.name()), item.item_name()),
            )),
            _ => Err(unknown_set_item(full_name)),
        }
    }
}

impl SetDefinitionProvider for SetDefinitions {
    fn definition(&self, name: &str) -> Option<Arc<SetDefinition>> {
        self.definitions.get(name).cloned()
    }
}
