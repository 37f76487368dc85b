/*
 * emolib - catalog module
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
 * Emoji records and the immutable catalog that owns them.
 *
 * An [`EmojiCatalog`] is built once, from the builtin data or a
 * caller-supplied JSON document, and is read-only afterwards. Every
 * conversion routine takes the catalog by reference; there is no global
 * instance anywhere in the crate.
 */

use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::fitzpatrick::Fitzpatrick;
use crate::trie::EmojiTrie;

/// The catalog shipped with the crate.
const BUILTIN: &str = include_str!("../data/emojis.json");

/// One emoji record: a canonical scalar sequence plus the names and derived
/// forms the conversions need.
///
/// Equality and hashing consider the scalar sequence only, so subset
/// membership tests treat two records with the same sequence as the same
/// emoji.
#[derive(Debug, Clone)]
pub struct Emoji {
    unicode: String,
    description: Option<String>,
    supports_fitzpatrick: bool,
    aliases: Vec<String>,
    tags: Vec<String>,
    html_decimal: String,
    html_hexadecimal: String,
}

impl Emoji {
    /// Builds a record. The scalar sequence and the alias list must be
    /// non-empty.
    pub fn new(
        unicode: String,
        description: Option<String>,
        supports_fitzpatrick: bool,
        aliases: Vec<String>,
        tags: Vec<String>,
    ) -> Result<Emoji> {
        let first = match unicode.chars().next() {
            Some(first) => first,
            None => {
                return Err(Error::new(
                    "emoji record has an empty scalar sequence",
                ));
            }
        };
        if aliases.is_empty() {
            return Err(Error::new(format!(
                "emoji record {:?} has no aliases",
                unicode
            )));
        }
        // The HTML forms encode the first scalar only.
        let html_decimal = format!("&#{};", first as u32);
        let html_hexadecimal = format!("&#x{:x};", first as u32);
        Ok(Emoji {
            unicode,
            description,
            supports_fitzpatrick,
            aliases,
            tags,
            html_decimal,
            html_hexadecimal,
        })
    }

    pub fn unicode(&self) -> &str {
        &self.unicode
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn supports_fitzpatrick(&self) -> bool {
        self.supports_fitzpatrick
    }

    /// All aliases; the first one is canonical and used for alias output.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The canonical alias. The alias list is never empty.
    pub fn primary_alias(&self) -> &str {
        &self.aliases[0]
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn html_decimal(&self) -> &str {
        &self.html_decimal
    }

    pub fn html_hexadecimal(&self) -> &str {
        &self.html_hexadecimal
    }

    /// The scalar sequence with a skin tone modifier appended. Errors when
    /// the record does not support modifiers.
    pub fn unicode_with(&self, fitzpatrick: Fitzpatrick) -> Result<String> {
        if !self.supports_fitzpatrick {
            return Err(Error::new(format!(
                "emoji {:?} does not support skin tone modifiers",
                self.unicode
            )));
        }
        Ok(format!("{}{}", self.unicode, fitzpatrick.as_str()))
    }
}

impl PartialEq for Emoji {
    fn eq(&self, other: &Emoji) -> bool {
        self.unicode == other.unicode
    }
}

impl Eq for Emoji {}

impl Hash for Emoji {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unicode.hash(state);
    }
}

/// One entry of the JSON catalog format.
#[derive(Debug, Deserialize)]
struct RawEmoji {
    #[serde(default)]
    emoji: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    supports_fitzpatrick: bool,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
}

fn load_records(doc: &str) -> Result<Vec<Emoji>> {
    let raw: Vec<RawEmoji> = serde_json::from_str(doc)?;
    let mut emojis = Vec::with_capacity(raw.len());
    let mut skipped = 0_usize;
    for entry in raw {
        let unicode = match entry.emoji {
            Some(unicode) if !unicode.is_empty() => unicode,
            _ => {
                log::debug!(
                    "catalog: skipping entry {:?} without a scalar sequence",
                    entry.aliases
                );
                skipped += 1;
                continue;
            }
        };
        if entry.aliases.is_empty() {
            log::debug!("catalog: skipping entry {:?} without aliases", unicode);
            skipped += 1;
            continue;
        }
        emojis.push(Emoji::new(
            unicode,
            entry.description,
            entry.supports_fitzpatrick,
            entry.aliases,
            entry.tags,
        )?);
    }
    if skipped > 0 {
        log::debug!("catalog: skipped {} incomplete entries", skipped);
    }
    Ok(emojis)
}

/// An immutable emoji collection with alias and tag indexes and the prefix
/// trie the scanners run on.
///
/// The catalog is `Send + Sync`; share one instance (for example behind an
/// `Arc`) across any number of concurrent scans. Records cannot be added
/// after construction, rebuild the catalog instead.
#[derive(Debug, Clone)]
pub struct EmojiCatalog {
    emojis: Vec<Emoji>,
    by_alias: IndexMap<String, u32>,
    by_tag: IndexMap<String, Vec<u32>>,
    trie: EmojiTrie,
}

impl EmojiCatalog {
    pub fn new(emojis: Vec<Emoji>) -> EmojiCatalog {
        let mut by_alias = IndexMap::new();
        let mut by_tag: IndexMap<String, Vec<u32>> = IndexMap::new();
        let mut trie = EmojiTrie::new();
        for (idx, emoji) in emojis.iter().enumerate() {
            let idx = idx as u32;
            for alias in emoji.aliases() {
                if by_alias.insert(alias.clone(), idx).is_some() {
                    log::debug!("catalog: alias {:?} redefined", alias);
                }
            }
            for tag in emoji.tags() {
                by_tag.entry(tag.clone()).or_default().push(idx);
            }
            trie.insert(emoji.unicode(), idx);
        }
        log::debug!(
            "catalog: {} records, {} aliases, {} tags, {} trie nodes",
            emojis.len(),
            by_alias.len(),
            by_tag.len(),
            trie.node_count()
        );
        EmojiCatalog {
            emojis,
            by_alias,
            by_tag,
            trie,
        }
    }

    /// The catalog embedded in the crate.
    pub fn builtin() -> Result<EmojiCatalog> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(doc: &str) -> Result<EmojiCatalog> {
        Ok(Self::new(load_records(doc)?))
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<EmojiCatalog> {
        let mut doc = String::new();
        reader.read_to_string(&mut doc)?;
        Self::from_json(&doc)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<EmojiCatalog> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            Error::from(err)
                .set_summary(format!("Could not open {}", path.display()))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Looks a record up by alias. A colon-wrapped argument like
    /// `":smile:"` resolves like the bare alias.
    pub fn get_for_alias(&self, alias: &str) -> Option<&Emoji> {
        self.by_alias
            .get(trim_alias(alias))
            .map(|&idx| &self.emojis[idx as usize])
    }

    /// All records carrying `tag`.
    pub fn get_for_tag(&self, tag: &str) -> impl Iterator<Item = &Emoji> + '_ {
        self.by_tag
            .get(tag)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.emojis[idx as usize])
    }

    /// Looks a record up by its exact canonical scalar sequence.
    pub fn get_by_unicode(&self, unicode: &str) -> Option<&Emoji> {
        self.trie
            .lookup(unicode)
            .map(|idx| &self.emojis[idx as usize])
    }

    /// Every record, each one exactly once, in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Emoji> {
        self.emojis.iter()
    }

    /// Every known tag, in first-seen order.
    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_tag.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    pub(crate) fn trie(&self) -> &EmojiTrie {
        &self.trie
    }

    pub(crate) fn emoji_at(&self, idx: u32) -> &Emoji {
        &self.emojis[idx as usize]
    }
}

impl<'a> IntoIterator for &'a EmojiCatalog {
    type Item = &'a Emoji;
    type IntoIter = std::slice::Iter<'a, Emoji>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Strips one wrapping colon from each side, if present.
fn trim_alias(alias: &str) -> &str {
    let alias = alias.strip_prefix(':').unwrap_or(alias);
    alias.strip_suffix(':').unwrap_or(alias)
}
