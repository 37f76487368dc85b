/*
 * emolib - parser/unicode module
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
 * The forward direction: candidate scanning and the rewrite pipeline.
 *
 * The scanner walks the catalog trie left to right, takes the longest
 * complete match at each position and attaches a directly following skin
 * tone modifier. The pipeline copies unmatched spans verbatim and lets a
 * transformer closure replace each candidate; every forward conversion in
 * the crate is that one pass with a different closure.
 */

use std::borrow::Cow;

use crate::catalog::{Emoji, EmojiCatalog};
use crate::fitzpatrick::{Fitzpatrick, FitzpatrickAction};
use crate::trie::{EmojiTrie, Matches};

/// One detected emoji: the matched record, the modifier that directly
/// follows it (if any), and where in the input it sits.
///
/// Modifier attachment is syntactic. The modifier is recorded whether or
/// not the record supports one; what happens to it is the pipeline's
/// decision, driven by [`FitzpatrickAction`].
#[derive(Debug, Clone)]
pub struct UnicodeCandidate<'a> {
    emoji: &'a Emoji,
    fitzpatrick: Option<Fitzpatrick>,
    start: usize,
}

impl<'a> UnicodeCandidate<'a> {
    pub fn emoji(&self) -> &'a Emoji {
        self.emoji
    }

    pub fn fitzpatrick(&self) -> Option<Fitzpatrick> {
        self.fitzpatrick
    }

    /// Byte offset of the match start.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the emoji itself.
    pub fn emoji_end(&self) -> usize {
        self.start + self.emoji.unicode().len()
    }

    /// Byte offset just past the emoji and its attached modifier.
    pub fn end(&self) -> usize {
        self.emoji_end() + self.fitzpatrick.map_or(0, |f| f.as_str().len())
    }

    /// The unicode form of the match: the emoji with the modifier appended
    /// when the record supports one, the bare emoji otherwise.
    pub fn unicode_with_fitzpatrick(&self) -> String {
        match self.fitzpatrick {
            Some(fitzpatrick) if self.emoji.supports_fitzpatrick() => {
                format!("{}{}", self.emoji.unicode(), fitzpatrick.as_str())
            }
            _ => self.emoji.unicode().to_string(),
        }
    }
}

/// Iterator over the emoji matches of one input string, in order, strictly
/// non-overlapping. Created by [`EmojiCatalog::unicode_candidates`].
#[derive(Debug, Clone)]
pub struct UnicodeCandidates<'a> {
    catalog: &'a EmojiCatalog,
    input: &'a str,
    pos: usize,
}

impl<'a> UnicodeCandidates<'a> {
    pub(crate) fn new(catalog: &'a EmojiCatalog, input: &'a str) -> UnicodeCandidates<'a> {
        UnicodeCandidates {
            catalog,
            input,
            pos: 0,
        }
    }
}

impl<'a> Iterator for UnicodeCandidates<'a> {
    type Item = UnicodeCandidate<'a>;

    fn next(&mut self) -> Option<UnicodeCandidate<'a>> {
        while self.pos < self.input.len() {
            let rest = &self.input[self.pos..];
            if let Some((emoji_id, len)) = longest_match_at(self.catalog.trie(), rest) {
                let fitzpatrick = rest[len..].chars().next().and_then(Fitzpatrick::from_char);
                let candidate = UnicodeCandidate {
                    emoji: self.catalog.emoji_at(emoji_id),
                    fitzpatrick,
                    start: self.pos,
                };
                self.pos = candidate.end();
                return Some(candidate);
            }
            match rest.chars().next() {
                Some(c) => self.pos += c.len_utf8(),
                None => break,
            }
        }
        None
    }
}

/// Longest complete match starting at the first scalar of `input`, as the
/// record id and the match's byte length. Stepping continues through
/// complete matches because a longer entry may share the prefix; the last
/// complete one wins.
fn longest_match_at(trie: &EmojiTrie, input: &str) -> Option<(u32, usize)> {
    let mut walker = trie.walker();
    let mut best = None;
    for (off, c) in input.char_indices() {
        match walker.step(c) {
            Matches::Exactly => {
                if let Some(id) = walker.emoji() {
                    best = Some((id, off + c.len_utf8()));
                }
            }
            Matches::Possibly => {}
            Matches::Impossible => break,
        }
    }
    best
}

/// The rewrite pass behind every forward conversion.
///
/// Under [`FitzpatrickAction::Remove`] the modifier scalars are stripped
/// before scanning, so stray modifiers disappear along with attached ones.
/// Under `Ignore`, and under `Parse` when the record does not support
/// modifiers, an attached modifier is re-emitted raw right after the
/// transformer's output; it is never silently dropped.
pub(crate) fn parse_from_unicode<F>(
    catalog: &EmojiCatalog,
    input: &str,
    action: FitzpatrickAction,
    transformer: F,
) -> String
where
    F: Fn(&UnicodeCandidate<'_>, FitzpatrickAction) -> String,
{
    let stripped: Cow<'_, str>;
    let text: &str = match action {
        FitzpatrickAction::Remove => {
            stripped = Fitzpatrick::strip(input);
            stripped.as_ref()
        }
        FitzpatrickAction::Parse | FitzpatrickAction::Ignore => input,
    };
    let mut output = String::with_capacity(text.len());
    let mut prev_end = 0;
    for candidate in UnicodeCandidates::new(catalog, text) {
        output.push_str(&text[prev_end..candidate.start()]);
        output.push_str(&transformer(&candidate, action));
        if let Some(fitzpatrick) = candidate.fitzpatrick() {
            let reemit = match action {
                FitzpatrickAction::Ignore => true,
                FitzpatrickAction::Parse => !candidate.emoji().supports_fitzpatrick(),
                FitzpatrickAction::Remove => false,
            };
            if reemit {
                output.push_str(fitzpatrick.as_str());
            }
        }
        prev_end = candidate.end();
    }
    output.push_str(&text[prev_end..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::fixtures;

    #[test]
    fn test_scan_offsets() {
        let catalog = fixtures::catalog();
        let input = "An \u{1F600}awesome \u{1F603}string!";
        let candidates: Vec<UnicodeCandidate> = catalog.unicode_candidates(input).collect();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].emoji().primary_alias(), "grinning");
        assert_eq!(candidates[0].start(), 3);
        assert_eq!(candidates[0].emoji_end(), 7);
        assert_eq!(candidates[0].end(), 7);
        assert_eq!(candidates[1].emoji().primary_alias(), "smiley");
        assert_eq!(candidates[1].start(), 15);
        assert_eq!(candidates[1].end(), 19);
        assert!(catalog.unicode_candidates("no emoji").next().is_none());
        assert!(catalog.unicode_candidates("").next().is_none());
    }

    #[test]
    fn test_longest_match_wins() {
        let catalog = fixtures::catalog();
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}";
        let candidates: Vec<UnicodeCandidate> = catalog.unicode_candidates(family).collect();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].emoji().primary_alias(), "family_man_woman_boy");
        assert_eq!(candidates[0].end(), family.len());

        // Without the joiners the same scalars are three separate matches.
        let separate = "\u{1F468}\u{1F469}\u{1F466}";
        let aliases: Vec<&str> = catalog
            .unicode_candidates(separate)
            .map(|c| c.emoji().primary_alias())
            .collect();
        assert_eq!(aliases, vec!["man", "woman", "boy"]);
    }

    #[test]
    fn test_modifier_attachment_is_syntactic() {
        let catalog = fixtures::catalog();
        let supported: Vec<UnicodeCandidate> =
            catalog.unicode_candidates("\u{1F466}\u{1F3FF}").collect();
        assert_eq!(supported.len(), 1);
        assert_eq!(supported[0].fitzpatrick(), Some(Fitzpatrick::Type6));
        assert_eq!(supported[0].emoji_end(), 4);
        assert_eq!(supported[0].end(), 8);
        assert_eq!(
            supported[0].unicode_with_fitzpatrick(),
            "\u{1F466}\u{1F3FF}"
        );

        // Attachment happens even when the record has no modifier support;
        // the policy layer decides what to do about it.
        let unsupported: Vec<UnicodeCandidate> =
            catalog.unicode_candidates("\u{1F600}\u{1F3FF}").collect();
        assert_eq!(unsupported.len(), 1);
        assert_eq!(unsupported[0].emoji().primary_alias(), "grinning");
        assert_eq!(unsupported[0].fitzpatrick(), Some(Fitzpatrick::Type6));
        assert_eq!(unsupported[0].unicode_with_fitzpatrick(), "\u{1F600}");
    }

    #[test]
    fn test_adjacent_flags_share_first_scalar() {
        let catalog = fixtures::catalog();
        let aliases: Vec<&str> = catalog
            .unicode_candidates("\u{1F1EB}\u{1F1F7}\u{1F1EB}\u{1F1EE}")
            .map(|c| c.emoji().primary_alias())
            .collect();
        assert_eq!(aliases, vec!["fr", "fi"]);
    }

    #[test]
    fn test_incomplete_prefix_is_no_match() {
        let catalog = fixtures::catalog();
        // The bare heart scalar is only a prefix of the selector form, and
        // a lone regional indicator is only a prefix of its flags.
        assert!(catalog.unicode_candidates("\u{2764}x").next().is_none());
        assert!(catalog.unicode_candidates("\u{1F1EB}a").next().is_none());
        let whole: Vec<UnicodeCandidate> =
            catalog.unicode_candidates("\u{2764}\u{FE0F}").collect();
        assert_eq!(whole.len(), 1);
        assert_eq!(whole[0].emoji().primary_alias(), "heart");
    }

    #[test]
    fn test_pipeline_identity_reconstructs_input() {
        let catalog = fixtures::catalog();
        let input = "x\u{1F466}\u{1F3FB}y\u{1F600}\u{1F3FF}z\
                     \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}!";
        let output = parse_from_unicode(
            &catalog,
            input,
            FitzpatrickAction::Parse,
            |candidate, _| candidate.unicode_with_fitzpatrick(),
        );
        assert_eq!(output, input);
    }

    #[test]
    fn test_pipeline_ignore_reemits_modifier() {
        let catalog = fixtures::catalog();
        let output = parse_from_unicode(
            &catalog,
            "\u{1F466}\u{1F3FF}",
            FitzpatrickAction::Ignore,
            |_, _| "[E]".to_string(),
        );
        assert_eq!(output, "[E]\u{1F3FF}");
    }

    #[test]
    fn test_pipeline_remove_strips_before_scanning() {
        let catalog = fixtures::catalog();
        let output = parse_from_unicode(
            &catalog,
            "a\u{1F3FB}b\u{1F466}\u{1F3FF}c",
            FitzpatrickAction::Remove,
            |candidate, _| {
                assert_eq!(candidate.fitzpatrick(), None);
                "[E]".to_string()
            },
        );
        assert_eq!(output, "ab[E]c");
    }

    #[test]
    fn test_pipeline_copies_gaps_verbatim() {
        let catalog = fixtures::catalog();
        let output = parse_from_unicode(
            &catalog,
            "t\u{00E9}xt \u{1F600} mor\u{00E9}",
            FitzpatrickAction::Parse,
            |_, _| String::new(),
        );
        assert_eq!(output, "t\u{00E9}xt  mor\u{00E9}");
    }
}
