/*
 * emolib - fitzpatrick module
 *
 * This file is part of emolib.
 *
 * emolib is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * emolib is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with emolib. If not, see <http://www.gnu.org/licenses/>.
 */

/*!
 * Fitzpatrick skin tone modifiers, `U+1F3FB` through `U+1F3FF`.
 *
 * A modifier is never an emoji on its own here. It only carries meaning when
 * it directly follows an emoji in a scan, and [`FitzpatrickAction`] decides
 * what the conversion routines do with it.
 */

use std::borrow::Cow;

/// The five skin tone modifier code points of the Fitzpatrick scale.
///
/// Scale types 1 and 2 share a single code point, so the variants go from
/// [`Fitzpatrick::Type12`] to [`Fitzpatrick::Type6`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fitzpatrick {
    Type12,
    Type3,
    Type4,
    Type5,
    Type6,
}

impl Fitzpatrick {
    pub const VARIANTS: [Fitzpatrick; 5] = [
        Fitzpatrick::Type12,
        Fitzpatrick::Type3,
        Fitzpatrick::Type4,
        Fitzpatrick::Type5,
        Fitzpatrick::Type6,
    ];

    /// Maps a scalar to its modifier, if it is one.
    pub fn from_char(c: char) -> Option<Fitzpatrick> {
        match c {
            '\u{1F3FB}' => Some(Fitzpatrick::Type12),
            '\u{1F3FC}' => Some(Fitzpatrick::Type3),
            '\u{1F3FD}' => Some(Fitzpatrick::Type4),
            '\u{1F3FE}' => Some(Fitzpatrick::Type5),
            '\u{1F3FF}' => Some(Fitzpatrick::Type6),
            _ => None,
        }
    }

    /// Resolves a canonical type name like `type_3`, case-insensitively.
    pub fn from_type_name(name: &str) -> Option<Fitzpatrick> {
        Fitzpatrick::VARIANTS
            .iter()
            .find(|f| f.type_name().eq_ignore_ascii_case(name))
            .copied()
    }

    pub fn as_char(&self) -> char {
        match self {
            Fitzpatrick::Type12 => '\u{1F3FB}',
            Fitzpatrick::Type3 => '\u{1F3FC}',
            Fitzpatrick::Type4 => '\u{1F3FD}',
            Fitzpatrick::Type5 => '\u{1F3FE}',
            Fitzpatrick::Type6 => '\u{1F3FF}',
        }
    }

    /// The modifier as a string slice, suitable for appending to an emoji.
    pub fn as_str(&self) -> &'static str {
        match self {
            Fitzpatrick::Type12 => "\u{1F3FB}",
            Fitzpatrick::Type3 => "\u{1F3FC}",
            Fitzpatrick::Type4 => "\u{1F3FD}",
            Fitzpatrick::Type5 => "\u{1F3FE}",
            Fitzpatrick::Type6 => "\u{1F3FF}",
        }
    }

    /// The canonical name used in alias qualifiers, `:wave|type_3:` style.
    pub fn type_name(&self) -> &'static str {
        match self {
            Fitzpatrick::Type12 => "type_1_2",
            Fitzpatrick::Type3 => "type_3",
            Fitzpatrick::Type4 => "type_4",
            Fitzpatrick::Type5 => "type_5",
            Fitzpatrick::Type6 => "type_6",
        }
    }

    /// Removes every modifier scalar from `input`, borrowing when there is
    /// nothing to remove.
    pub fn strip(input: &str) -> Cow<'_, str> {
        if input.chars().any(|c| Fitzpatrick::from_char(c).is_some()) {
            Cow::Owned(
                input
                    .chars()
                    .filter(|c| Fitzpatrick::from_char(*c).is_none())
                    .collect(),
            )
        } else {
            Cow::Borrowed(input)
        }
    }
}

/// What a conversion does with a modifier found right after an emoji.
///
/// - `Parse` keeps the modifier as part of the match and lets the output form
///   express it, qualified aliases included.
/// - `Remove` drops every modifier from the input before matching.
/// - `Ignore` matches the bare emoji and copies the modifier through
///   untouched.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum FitzpatrickAction {
    #[default]
    Parse,
    Remove,
    Ignore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitzpatrick_char_mapping() {
        for f in Fitzpatrick::VARIANTS {
            assert_eq!(Fitzpatrick::from_char(f.as_char()), Some(f));
            assert_eq!(f.as_str().chars().next(), Some(f.as_char()));
        }
        assert_eq!(Fitzpatrick::from_char('a'), None);
        assert_eq!(Fitzpatrick::from_char('\u{1F3FA}'), None);
        assert_eq!(Fitzpatrick::from_char('\u{1F400}'), None);
    }

    #[test]
    fn test_fitzpatrick_type_names() {
        assert_eq!(
            Fitzpatrick::from_type_name("type_1_2"),
            Some(Fitzpatrick::Type12)
        );
        assert_eq!(
            Fitzpatrick::from_type_name("TYPE_6"),
            Some(Fitzpatrick::Type6)
        );
        assert_eq!(Fitzpatrick::from_type_name("type_7"), None);
        assert_eq!(Fitzpatrick::from_type_name(""), None);
        for f in Fitzpatrick::VARIANTS {
            assert_eq!(Fitzpatrick::from_type_name(f.type_name()), Some(f));
        }
    }

    #[test]
    fn test_strip() {
        assert_eq!(Fitzpatrick::strip("no modifiers here"), "no modifiers here");
        assert!(matches!(
            Fitzpatrick::strip("plain text"),
            Cow::Borrowed(_)
        ));
        assert_eq!(Fitzpatrick::strip("\u{1F466}\u{1F3FF}"), "\u{1F466}");
        assert_eq!(
            Fitzpatrick::strip("a\u{1F3FB}b\u{1F3FF}c"),
            "abc"
        );
        assert_eq!(Fitzpatrick::strip("\u{1F3FB}"), "");
    }
}
