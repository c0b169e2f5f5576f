// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fallback priority over font families.

use crate::error::Error;
use crate::font::FontRecord;
use alloc::sync::Arc;
use alloc::vec::Vec;
use hashbrown::HashMap;

/// Total order over family names, most preferred first.
///
/// Decides which family wins a codepoint that several families can render.
#[derive(Clone, Default, Debug)]
pub struct PriorityList {
    families: Vec<Arc<str>>,
    positions: HashMap<Arc<str>, usize>,
}

impl PriorityList {
    /// Parses a priority list with one family name per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are ignored.
    ///
    /// ```
    /// use coverface::PriorityList;
    ///
    /// let list = PriorityList::parse("Noto Sans\n\nNoto Sans Arabic\n");
    /// assert_eq!(list.position("Noto Sans Arabic"), Some(1));
    /// assert_eq!(list.position("Noto Serif"), None);
    /// ```
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Returns the position of `family`, where 0 is the highest priority.
    ///
    /// If a family is listed more than once, its first position counts.
    pub fn position(&self, family: &str) -> Option<usize> {
        self.positions.get(family).copied()
    }

    /// Returns the family names in priority order.
    pub fn families(&self) -> impl Iterator<Item = &str> + '_ {
        self.families.iter().map(|family| &**family)
    }

    /// Returns the number of listed families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Returns `true` if no family is listed.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Orders `fonts` by the position of their family.
    ///
    /// The sort is stable, so fonts of the same family keep their relative
    /// order. Fails if any font belongs to a family that is not listed.
    pub fn sort<'a>(&self, fonts: &'a [FontRecord]) -> Result<Vec<&'a FontRecord>, Error> {
        let mut ranked = fonts
            .iter()
            .map(|font| {
                self.position(font.family())
                    .map(|position| (position, font))
                    .ok_or_else(|| Error::unranked_family(font.family()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        ranked.sort_by_key(|(position, _)| *position);
        Ok(ranked.into_iter().map(|(_, font)| font).collect())
    }
}

impl<'a> FromIterator<&'a str> for PriorityList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::default();
        for family in iter {
            let family: Arc<str> = family.into();
            list.positions
                .entry(family.clone())
                .or_insert(list.families.len());
            list.families.push(family);
        }
        list
    }
}
