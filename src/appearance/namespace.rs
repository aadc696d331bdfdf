#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use indexmap::IndexMap;
use serde::Serialize;

use crate::appearance::{Appearance, AppearanceKey, AppearanceValue};

/// The groups of constants the UI sub-trees import.
///
/// Both read the same appearance table. `Plugin` is the narrower set the QML
/// plugin exposes; `Application` has every constant.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub const fn name(&self) -> &'static str)]
pub enum Namespace {
    #[assoc(name = "application")]
    Application,
    #[assoc(name = "plugin")]
    Plugin,
}

impl Namespace {
    pub const ALL: [Namespace; 2] = [Namespace::Application, Namespace::Plugin];

    pub const fn contains(self, key: AppearanceKey) -> bool {
        match self {
            Namespace::Application => true,
            Namespace::Plugin => key.in_plugin(),
        }
    }

    /// Keys in this namespace, in declaration order.
    pub fn keys(self) -> impl Iterator<Item = AppearanceKey> {
        AppearanceKey::ALL
            .into_iter()
            .filter(move |key| self.contains(*key))
    }

    pub fn view(self, appearance: &Appearance) -> NamespaceView<'_> {
        NamespaceView {
            namespace: self,
            appearance,
        }
    }
}

impl AppearanceKey {
    /// Namespaces that expose this key.
    pub fn namespaces(self) -> impl Iterator<Item = Namespace> {
        Namespace::ALL
            .into_iter()
            .filter(move |namespace| namespace.contains(self))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only access to the constants of one namespace.
#[derive(Debug, Clone, Copy)]
pub struct NamespaceView<'a> {
    namespace: Namespace,
    appearance: &'a Appearance,
}

impl<'a> NamespaceView<'a> {
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Returns `None` for keys outside the namespace.
    pub fn get(&self, key: impl Into<AppearanceKey>) -> Option<AppearanceValue<'a>> {
        let key = key.into();

        self.namespace
            .contains(key)
            .then(|| key.resolve(self.appearance))
    }

    pub fn get_by_name(&self, name: &str) -> Option<AppearanceValue<'a>> {
        self.get(AppearanceKey::from_name(name)?)
    }

    pub fn contains(&self, key: impl Into<AppearanceKey>) -> bool {
        self.namespace.contains(key.into())
    }

    pub fn keys(&self) -> impl Iterator<Item = AppearanceKey> + use<'a> {
        self.namespace.keys()
    }

    pub fn entries(&self) -> impl Iterator<Item = (AppearanceKey, AppearanceValue<'a>)> + use<'a> {
        let appearance = self.appearance;

        self.namespace
            .keys()
            .map(move |key| (key, key.resolve(appearance)))
    }

    pub fn len(&self) -> usize {
        self.keys().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Freezes the view into a name-keyed map.
    pub fn table(&self) -> AppearanceTable<'a> {
        AppearanceTable(
            self.entries()
                .map(|(key, value)| (key.name(), value))
                .collect(),
        )
    }
}

/// Constants of one namespace keyed by accessor name, in declaration order.
///
/// Displays as one `name = value` line per constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AppearanceTable<'a>(IndexMap<&'static str, AppearanceValue<'a>>);

impl<'a> AppearanceTable<'a> {
    pub fn get(&self, name: &str) -> Option<AppearanceValue<'a>> {
        self.0.get(name).copied()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, AppearanceValue<'a>)> + '_ {
        self.0.iter().map(|(name, value)| (*name, *value))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AppearanceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{name} = {value}")?;
        }

        Ok(())
    }
}
