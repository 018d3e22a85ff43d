// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pass-through attributes for host elements (ARIA roles and similar metadata).

use alloc::borrow::Cow;

use smallvec::SmallVec;

/// An ordered list of attribute name/value pairs.
///
/// Names are unique; setting an existing name replaces its value in place, so
/// insertion order is preserved for deterministic output. Most elements carry
/// only a role and one or two `aria-*` entries, so storage is inline for small
/// sets.
///
/// ```rust
/// use understory_vlist::Attributes;
///
/// let attrs = Attributes::new()
///     .with("role", "listbox")
///     .with("aria-orientation", "vertical");
/// assert_eq!(attrs.get("role"), Some("listbox"));
/// assert_eq!(attrs.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 4]>,
}

impl Attributes {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attributes::set`].
    #[must_use]
    pub fn with(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.set(name, value);
        self
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Returns the value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_ref())
    }

    /// Removes `name`, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<Cow<'static, str>> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Merges `overrides` onto `self`; entries in `overrides` win on conflict.
    pub fn merge_from(&mut self, overrides: &Self) {
        for (name, value) in &overrides.entries {
            self.set(name.clone(), value.clone());
        }
    }

    /// Returns `defaults` with `overrides` merged on top.
    #[must_use]
    pub fn merged(defaults: &Self, overrides: &Self) -> Self {
        let mut out = defaults.clone();
        out.merge_from(overrides);
        out
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates name/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_ref(), v.as_ref()))
    }
}
