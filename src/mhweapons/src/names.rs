//! Item and weapon name canonicalization
//!
//! Free-text names typed by users (or scraped from other sites) are folded
//! into the catalog's display form. Most names are simple title case, but a
//! handful of curated names (possessives, acronyms, compound words) are kept
//! in an exception table keyed by their punctuation-free lowercase form.

use phf::phf_map;

/// Characters dropped when computing a lookup key
const KEY_STRIP: &[char] = &[' ', '.', '\'', '+', '-'];

/// Characters after which the next character is capitalized
const WORD_BREAKS: &[char] = &[' ', '.', '-'];

/// Names that title casing cannot reproduce, keyed by [`name_key`]
static NAME_EXCEPTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "welldonesteak" => "Well-done Steak",
    "lrgelderdragonbone" => "Lrg ElderDragon Bone",
    "highqualitypelt" => "High-quality Pelt",
    "kingsfrill" => "King's Frill",
    "btetsucabrahardclaw" => "B.TetsucabraHardclaw",
    "heartstoppingbeak" => "Heart-stopping Beak",
    "dsqueenconcentrate" => "D.S.QueenConcentrate",
    "dahrenstone" => "Dah'renstone",
    "championsweapon" => "Champion's Weapon",
    "championsarmor" => "Champion's Armor",
    "popeyedgoldfish" => "Pop-eyed Goldfish",
    "100mwantedposter" => "100m+ Wanted Poster",
    "goddesssmelody" => "Goddess's Melody",
    "goddesssembrace" => "Goddess's Embrace",
    "capcommhspissue" => "Capcom MH Sp. Issue",
    "goddesssfire" => "Goddess's Fire",
    "huntersticket" => "Hunter's Ticket",
    "herosseal" => "Hero's Seal",
    "thetaleofpoogie" => "The Tale of Poogie",
    "goddesssgrace" => "Goddess's Grace",
    "conquerorsseal" => "Conqueror's Seal",
    "conquerorssealg" => "Conqueror's Seal G",
    "questersticket" => "Quester's Ticket",
    "instructorsticket" => "Instructor's Ticket",
    "veticket" => "VE Ticket",
    "vedeluxeticket" => "VE Deluxe Ticket",
    "vebronzeticket" => "VE Bronze Ticket",
    "vesilverticket" => "VE Silver Ticket",
    "vegoldenticket" => "VE Golden Ticket",
    "vecosmicticket" => "VE Cosmic Ticket",
};

/// Lookup key for a name: punctuation and spaces removed, lowercased
pub fn name_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !KEY_STRIP.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Canonical display form of an item or weapon name
///
/// Exception-table names are returned verbatim regardless of the casing or
/// punctuation of `raw`; everything else is title cased.
///
/// ```
/// assert_eq!(mhweapons::canonicalize("great sword"), "Great Sword");
/// assert_eq!(mhweapons::canonicalize("KINGS FRILL"), "King's Frill");
/// ```
pub fn canonicalize(raw: &str) -> String {
    match NAME_EXCEPTIONS.get(name_key(raw).as_str()) {
        Some(name) => (*name).to_string(),
        None => title_case(raw),
    }
}

/// Exception table entries as `(key, display name)` pairs
pub fn name_exceptions() -> impl Iterator<Item = (&'static str, &'static str)> {
    NAME_EXCEPTIONS.entries().map(|(k, v)| (*k, *v))
}

fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut cap_next = true;

    for c in raw.chars() {
        if WORD_BREAKS.contains(&c) {
            out.push(c);
            cap_next = true;
        } else if cap_next {
            out.extend(c.to_uppercase());
            cap_next = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_key() {
        assert_eq!(name_key("King's Frill"), "kingsfrill");
        assert_eq!(name_key("B.Tetsucabra-Hard claw"), "btetsucabrahardclaw");
        assert_eq!(name_key("100m+ Wanted Poster"), "100mwantedposter");
        assert_eq!(name_key(""), "");
    }

    #[test]
    fn test_exceptions_match_any_variant() {
        for (key, name) in name_exceptions() {
            assert_eq!(canonicalize(key), name, "key {key}");
            assert_eq!(canonicalize(&key.to_uppercase()), name, "key {key}");
            assert_eq!(canonicalize(name), name);
            assert_eq!(canonicalize(&name.to_lowercase()), name);
            assert_eq!(name_key(name), key);
        }
    }

    #[test]
    fn test_exception_with_spacing_variant() {
        assert_eq!(canonicalize("b tetsucabra hard claw"), "B.TetsucabraHardclaw");
        assert_eq!(canonicalize("capcom mh sp issue"), "Capcom MH Sp. Issue");
        assert_eq!(canonicalize("ve-ticket"), "VE Ticket");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(canonicalize("great sword"), "Great Sword");
        assert_eq!(canonicalize("tetsucabra claw"), "Tetsucabra Claw");
        assert_eq!(canonicalize("GREAT SWORD"), "Great Sword");
        assert_eq!(canonicalize("monster bone+"), "Monster Bone+");
    }

    #[test]
    fn test_title_case_breaks() {
        assert_eq!(canonicalize("rathalos-plate"), "Rathalos-Plate");
        assert_eq!(canonicalize("b.wyvern gem"), "B.Wyvern Gem");
        assert_eq!(canonicalize("a  b"), "A  B");
        assert_eq!(canonicalize("it's"), "It's");
    }

    #[test]
    fn test_empty_and_canonical_input() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("Great Sword"), "Great Sword");
    }
}
