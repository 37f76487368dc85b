/*
 * emolib - parser/alias module
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
 * The reverse direction: `:alias:` tokens and `&#...;` references back to
 * unicode.
 *
 * One pass over the input. A `:` opens an alias token, a `&` opens a run
 * of numeric character references; anything that does not resolve against
 * the catalog is copied through unchanged. This direction never fails.
 */

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit1, hex_digit1},
    combinator::map_opt,
    sequence::{delimited, preceded},
    IResult,
};

use crate::catalog::{Emoji, EmojiCatalog};
use crate::fitzpatrick::Fitzpatrick;
use crate::trie::Matches;

pub(crate) fn parse_to_unicode(catalog: &EmojiCatalog, input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    while !rest.is_empty() {
        match rest.as_bytes().first() {
            Some(b':') => {
                if let Some((emoji, fitzpatrick, len)) = alias_candidate(catalog, rest) {
                    output.push_str(emoji.unicode());
                    if let Some(fitzpatrick) = fitzpatrick {
                        output.push_str(fitzpatrick.as_str());
                    }
                    rest = &rest[len..];
                    continue;
                }
            }
            Some(b'&') => {
                if let Some((emoji, len)) = html_candidate(catalog, rest) {
                    output.push_str(emoji.unicode());
                    rest = &rest[len..];
                    continue;
                }
            }
            _ => {}
        }
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) => {
                output.push(c);
                rest = chars.as_str();
            }
            None => break,
        }
    }
    output
}

/// Resolves an alias token at the start of `input`, which begins with `:`.
///
/// The closing colon is looked for from the third scalar on, so an alias
/// is at least one scalar long. A `|` before it splits off a skin tone
/// qualifier. Returns the record, the qualifier and the token's byte
/// length, or `None` when the alias is unknown, the qualifier is not a
/// canonical type name, or the record has no modifier support.
fn alias_candidate<'a>(
    catalog: &'a EmojiCatalog,
    input: &str,
) -> Option<(&'a Emoji, Option<Fitzpatrick>, usize)> {
    let mut close = None;
    let mut pipe = None;
    for (ord, (off, c)) in input.char_indices().enumerate() {
        if ord < 2 {
            continue;
        }
        match c {
            ':' => {
                close = Some(off);
                break;
            }
            '|' if pipe.is_none() => pipe = Some(off),
            _ => {}
        }
    }
    let close = close?;
    match pipe {
        Some(pipe) => {
            // The span keeps its leading colon, the alias index trims it.
            let emoji = catalog.get_for_alias(&input[..pipe])?;
            if !emoji.supports_fitzpatrick() {
                return None;
            }
            let fitzpatrick = Fitzpatrick::from_type_name(&input[pipe + 1..close])?;
            Some((emoji, Some(fitzpatrick), close + 1))
        }
        None => {
            let emoji = catalog.get_for_alias(&input[..close])?;
            Some((emoji, None, close + 1))
        }
    }
}

/// Resolves a run of numeric character references at the start of `input`,
/// which begins with `&`.
///
/// Each reference decodes to one scalar; the decoded scalars are replayed
/// through a trie walker and the longest complete match wins, same greedy
/// rule as the forward scanner. A malformed reference or an impossible
/// prefix ends the run, keeping the best match seen. Returns the record
/// and the byte length up to the closing `;` of its last reference.
fn html_candidate<'a>(catalog: &'a EmojiCatalog, input: &str) -> Option<(&'a Emoji, usize)> {
    let mut walker = catalog.trie().walker();
    let mut best = None;
    let mut rest = input;
    let mut consumed = 0;
    while rest.starts_with("&#") {
        let (after, scalar) = match numeric_reference(rest) {
            Ok(parsed) => parsed,
            Err(_) => break,
        };
        consumed += rest.len() - after.len();
        rest = after;
        match walker.step(scalar) {
            Matches::Exactly => {
                if let Some(id) = walker.emoji() {
                    best = Some((id, consumed));
                }
            }
            Matches::Possibly => {}
            Matches::Impossible => break,
        }
    }
    best.map(|(id, len)| (catalog.emoji_at(id), len))
}

/// One `&#NNN;` or `&#xHHH;` reference. The hexadecimal marker is a
/// lowercase `x` only; the digits may be either case. A value outside the
/// scalar range does not parse.
fn numeric_reference(input: &str) -> IResult<&str, char> {
    delimited(
        tag("&#"),
        alt((
            preceded(tag("x"), map_opt(hex_digit1, hex_scalar)),
            map_opt(digit1, dec_scalar),
        )),
        tag(";"),
    )(input)
}

fn hex_scalar(digits: &str) -> Option<char> {
    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}

fn dec_scalar(digits: &str) -> Option<char> {
    digits.parse::<u32>().ok().and_then(char::from_u32)
}
