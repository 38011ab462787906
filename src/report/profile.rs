use once_cell::sync::Lazy;

use crate::report::catalog::{Catalog, CatalogRevision};
use crate::report::format::{FormatStyle, ValueWidth, DEFAULT_NAME_WIDTH};

pub const DEFAULT_PROFILE: &str = "extended";

/// A curated list together with the way it is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub about: &'static str,
    pub revision: CatalogRevision,
    pub style: FormatStyle,
}

impl Profile {
    pub fn catalog(&self) -> Catalog {
        Catalog::for_revision(self.revision)
    }

    pub fn with_wide_values(mut self) -> Self {
        self.style.value_width = ValueWidth::Long;
        self
    }

    pub fn without_headers(mut self) -> Self {
        self.style.headers = false;
        self
    }
}

static PROFILES: Lazy<Vec<Profile>> = Lazy::new(|| {
    vec![
        Profile {
            name: "classic",
            about: "first curated list, labeled groups, 32-bit codes",
            revision: CatalogRevision::Classic,
            style: FormatStyle::default(),
        },
        Profile {
            name: "extended",
            about: "classic list plus memory region and debug requests",
            revision: CatalogRevision::Extended,
            style: FormatStyle::default(),
        },
        Profile {
            name: "minimal",
            about: "classic list, no labels, unpadded names",
            revision: CatalogRevision::Classic,
            style: FormatStyle::new(false, None, ValueWidth::U32),
        },
        Profile {
            name: "wide",
            about: "extended list, codes padded to unsigned long width",
            revision: CatalogRevision::Extended,
            style: FormatStyle::new(true, Some(DEFAULT_NAME_WIDTH),
                                    ValueWidth::Long),
        },
    ]
});

pub fn profiles() -> &'static [Profile] {
    &PROFILES
}

pub fn find_profile(name: &str) -> Option<Profile> {
    PROFILES.iter().find(|p| p.name == name).copied()
}

pub fn default_profile() -> Profile {
    PROFILES.iter()
        .find(|p| p.name == DEFAULT_PROFILE)
        .copied()
        .unwrap_or(PROFILES[0])
}
