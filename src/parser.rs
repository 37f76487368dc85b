/*
 * emolib - parser module
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
 * Conversions between unicode emoji, `:alias:` tokens and HTML numeric
 * character references.
 *
 * The forward direction ([`unicode`]) scans text with the catalog trie and
 * rewrites each match through a per-candidate transformer. The reverse
 * direction ([`alias`]) recognizes `:alias:` / `:alias|type_k:` tokens and
 * `&#...;` runs and substitutes the unicode form. All public entry points
 * are methods on [`EmojiCatalog`].
 */

pub mod alias;
pub mod unicode;

pub use unicode::{UnicodeCandidate, UnicodeCandidates};

use crate::catalog::{Emoji, EmojiCatalog};
use crate::fitzpatrick::FitzpatrickAction;

impl EmojiCatalog {
    /// Scans `input` and yields every emoji match in order, leftmost first,
    /// never overlapping. Offsets are byte offsets into `input`.
    pub fn unicode_candidates<'a>(&'a self, input: &'a str) -> UnicodeCandidates<'a> {
        UnicodeCandidates::new(self, input)
    }

    /// Rewrites `input` in one pass: text between matches is copied
    /// verbatim, each match is replaced by `transformer`'s output. Skin
    /// tone handling follows `action` for every conversion built on this,
    /// see [`FitzpatrickAction`].
    pub fn parse_from_unicode<F>(
        &self,
        input: &str,
        action: FitzpatrickAction,
        transformer: F,
    ) -> String
    where
        F: Fn(&UnicodeCandidate<'_>, FitzpatrickAction) -> String,
    {
        unicode::parse_from_unicode(self, input, action, transformer)
    }

    /// Replaces every emoji with its `:alias:` token, using the default
    /// [`FitzpatrickAction::Parse`] policy.
    pub fn parse_to_aliases(&self, input: &str) -> String {
        self.parse_to_aliases_with(input, FitzpatrickAction::default())
    }

    /// Replaces every emoji with its `:alias:` token. Under `Parse` a
    /// supported skin tone modifier becomes a qualifier, `:boy|type_6:`.
    pub fn parse_to_aliases_with(&self, input: &str, action: FitzpatrickAction) -> String {
        unicode::parse_from_unicode(self, input, action, |candidate, action| {
            match candidate.fitzpatrick() {
                Some(fitzpatrick)
                    if action == FitzpatrickAction::Parse
                        && candidate.emoji().supports_fitzpatrick() =>
                {
                    format!(
                        ":{}|{}:",
                        candidate.emoji().primary_alias(),
                        fitzpatrick.type_name()
                    )
                }
                _ => format!(":{}:", candidate.emoji().primary_alias()),
            }
        })
    }

    /// Replaces every emoji with its decimal numeric character reference,
    /// using the default policy.
    pub fn parse_to_html_decimal(&self, input: &str) -> String {
        self.parse_to_html_decimal_with(input, FitzpatrickAction::default())
    }

    pub fn parse_to_html_decimal_with(&self, input: &str, action: FitzpatrickAction) -> String {
        unicode::parse_from_unicode(self, input, action, |candidate, _| {
            candidate.emoji().html_decimal().to_string()
        })
    }

    /// Replaces every emoji with its hexadecimal numeric character
    /// reference, using the default policy.
    pub fn parse_to_html_hexadecimal(&self, input: &str) -> String {
        self.parse_to_html_hexadecimal_with(input, FitzpatrickAction::default())
    }

    pub fn parse_to_html_hexadecimal_with(
        &self,
        input: &str,
        action: FitzpatrickAction,
    ) -> String {
        unicode::parse_from_unicode(self, input, action, |candidate, _| {
            candidate.emoji().html_hexadecimal().to_string()
        })
    }

    /// Removes every emoji, skin tone modifiers included, stray ones too.
    pub fn remove_all_emojis(&self, input: &str) -> String {
        unicode::parse_from_unicode(self, input, FitzpatrickAction::Remove, |_, _| String::new())
    }

    /// Removes the emojis contained in `emojis`, keeping every other match
    /// untouched. Membership is by canonical scalar sequence.
    pub fn remove_emojis(&self, input: &str, emojis: &[&Emoji]) -> String {
        unicode::parse_from_unicode(self, input, FitzpatrickAction::Parse, |candidate, _| {
            if emojis.iter().any(|emoji| **emoji == *candidate.emoji()) {
                String::new()
            } else {
                candidate.unicode_with_fitzpatrick()
            }
        })
    }

    /// Removes every emoji except the ones contained in `emojis`.
    pub fn remove_all_emojis_except(&self, input: &str, emojis: &[&Emoji]) -> String {
        unicode::parse_from_unicode(self, input, FitzpatrickAction::Parse, |candidate, _| {
            if emojis.iter().any(|emoji| **emoji == *candidate.emoji()) {
                candidate.unicode_with_fitzpatrick()
            } else {
                String::new()
            }
        })
    }

    /// Collects every match, in order, as its unicode form with the skin
    /// tone modifier attached when the record supports one.
    pub fn extract_emojis(&self, input: &str) -> Vec<String> {
        self.unicode_candidates(input)
            .map(|candidate| candidate.unicode_with_fitzpatrick())
            .collect()
    }

    /// Replaces `:alias:`, `:alias|type_k:` and `&#...;` tokens with their
    /// unicode form. Tokens that do not resolve are left untouched; this
    /// direction never fails.
    pub fn parse_to_unicode(&self, input: &str) -> String {
        alias::parse_to_unicode(self, input)
    }

    /// True when `input` is exactly one emoji, with an optional trailing
    /// skin tone modifier.
    pub fn is_emoji(&self, input: &str) -> bool {
        match self.unicode_candidates(input).next() {
            Some(candidate) => candidate.start() == 0 && candidate.end() == input.len(),
            None => false,
        }
    }

    /// True when `input` contains at least one emoji.
    pub fn contains_emoji(&self, input: &str) -> bool {
        self.unicode_candidates(input).next().is_some()
    }

    /// True when nothing is left after removing every emoji and modifier.
    /// The empty string qualifies.
    pub fn is_only_emojis(&self, input: &str) -> bool {
        self.remove_all_emojis(input).is_empty()
    }
}
