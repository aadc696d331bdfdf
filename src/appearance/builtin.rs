use std::{ops::Deref, sync::LazyLock};

use tracing::debug;

use crate::appearance::{Appearance, AppearanceKey};

macro_rules! generate_builtin_appearances {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLockAppearance = LazyLockAppearance::new(|| {
                load_builtin(stringify!($name), include_str!($path))
            });
        )+
    };
}

generate_builtin_appearances!(["../../themes/procyon.json", DEFAULT]);

/// An appearance table compiled into the binary and parsed on first use.
///
/// Only shared access is exposed, so a builtin table can't change after it
/// has been loaded.
pub struct LazyLockAppearance(LazyLock<Appearance>);

impl LazyLockAppearance {
    #[inline(always)]
    const fn new(f: fn() -> Appearance) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockAppearance {
    type Target = Appearance;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Appearance> for LazyLockAppearance {
    fn as_ref(&self) -> &Appearance {
        &self.0
    }
}

fn load_builtin(id: &str, source: &str) -> Appearance {
    match Appearance::from_json(source) {
        Ok(appearance) => {
            debug!(
                id,
                name = %appearance.name,
                constants = AppearanceKey::ALL.len(),
                "loaded builtin appearance"
            );
            appearance
        }
        // The tables are compiled in and covered by tests.
        Err(err) => panic!("builtin appearance {id} is malformed: {err}"),
    }
}
