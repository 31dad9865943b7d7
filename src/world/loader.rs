use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use rand::Rng;

use super::errors::MapError;
use super::model::{Map, Room};
use super::validator::validate_map;

//////////////////////
/// RECOGNISED TAGS ///
//////////////////////

const ITEMS_TAG: &str = "@items";
const CONNECT_TAG: &str = "@connect";
const DESCRIPTION_TAG: &str = "@description";

const TOKEN_DELIMITER: char = ',';
const CURRENCY: &str = "currency";
const PRIMARY_WEAPON: &str = "primary weapon";
const SECONDARY_WEAPON: &str = "secondary weapon";

const MIN_ROOM_CURRENCY: f64 = 150.0;
const ROOM_CURRENCY_SPREAD: f64 = 300.0;

////////////////////////////
/// MAP PARSER FUNCTIONS ///
////////////////////////////

/// Public API: load a map from a text file on disk.
pub fn load_map_from_file<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> Result<Map, MapError> {
    let contents = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map = load_map_from_str(&contents, rng)?;
    info!(
        "loaded map '{}': {} rooms, entrance {}, exit {}",
        path.display(),
        map.room_count(),
        map.entrance,
        map.exit
    );
    Ok(map)
}

/// Public API: parse a map from its tagged text form.
///
/// The first room header is the entrance and the last header seen is the
/// exit. Rooms flagged with `currency` get a random amount in `150..=449`.
/// Every room the header counts must have its own block.
pub fn load_map_from_str<R: Rng + ?Sized>(contents: &str, rng: &mut R) -> Result<Map, MapError> {
    let mut lines = contents.lines().enumerate().map(|(i, l)| (i + 1, l));

    let (header_line, room_count) = loop {
        match lines.next() {
            Some((_, l)) if l.trim().is_empty() => continue,
            Some((n, l)) => {
                let count: usize = l
                    .trim()
                    .parse()
                    .map_err(|_| MapError::syntax(n, format!("expected number of rooms, found '{}'", l.trim())))?;
                if count == 0 {
                    return Err(MapError::syntax(n, "a map needs at least one room"));
                }
                break (n, count);
            }
            None => return Err(MapError::syntax(1, "empty map description")),
        }
    };
    debug!("initialising game map: {} rooms", room_count);

    // Only rooms that actually have a block are allocated.
    let mut described: BTreeMap<usize, Room> = BTreeMap::new();
    let mut entrance: Option<usize> = None;
    let mut current: Option<usize> = None;

    while let Some((line_no, raw)) = lines.next() {
        let data = raw.trim();
        if data.is_empty() {
            continue;
        }

        let tag = [ITEMS_TAG, CONNECT_TAG, DESCRIPTION_TAG]
            .into_iter()
            .find(|t| data.eq_ignore_ascii_case(t));

        let Some(tag) = tag else {
            let number: usize = data
                .parse()
                .map_err(|_| MapError::syntax(line_no, format!("expected a room number or tag, found '{}'", data)))?;
            if number == 0 || number > room_count {
                return Err(MapError::syntax(
                    line_no,
                    format!("room {} is outside 1..={}", number, room_count),
                ));
            }
            entrance.get_or_insert(number);
            current = Some(number);
            described.entry(number).or_insert_with(|| Room::new(number));
            continue;
        };

        let room_number = current
            .ok_or_else(|| MapError::syntax(line_no, format!("'{}' appears before any room number", data)))?;
        let (value_line, value) = lines
            .next()
            .map(|(n, l)| (n, l.trim()))
            .ok_or_else(|| MapError::syntax(line_no, format!("missing line after '{}'", data)))?;

        let room = described
            .entry(room_number)
            .or_insert_with(|| Room::new(room_number));
        match tag {
            ITEMS_TAG => {
                room.has_primary_weapon = item_present(value, PRIMARY_WEAPON);
                room.has_secondary_weapon = item_present(value, SECONDARY_WEAPON);
                room.currency = if item_present(value, CURRENCY) {
                    random_room_currency(rng)
                } else {
                    0
                };
                for token in split_tokens(value) {
                    let known = [CURRENCY, PRIMARY_WEAPON, SECONDARY_WEAPON]
                        .iter()
                        .any(|k| token.eq_ignore_ascii_case(k));
                    if !known {
                        warn!("line {}: ignoring unknown item '{}'", value_line, token);
                    }
                }
            }
            CONNECT_TAG => {
                room.connections = parse_connections(value, value_line)?;
            }
            _ => {
                room.description = value.to_string();
            }
        }
    }

    let (Some(entrance), Some(exit)) = (entrance, current) else {
        return Err(MapError::syntax(1, "map contains no room blocks"));
    };

    if described.len() != room_count {
        return Err(MapError::syntax(
            header_line,
            format!(
                "map declares {} rooms but describes {}",
                room_count,
                described.len()
            ),
        ));
    }

    let map = Map {
        rooms: described.into_values().collect(),
        entrance,
        exit,
    };

    let errors = validate_map(&map);
    if !errors.is_empty() {
        for e in &errors {
            warn!("map validation: {}", e.message);
        }
        return Err(MapError::Invalid(errors));
    }

    Ok(map)
}

fn random_room_currency<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    (MIN_ROOM_CURRENCY + (rng.r#gen::<f64>() * ROOM_CURRENCY_SPREAD).floor()) as u32
}

fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(TOKEN_DELIMITER)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

fn item_present(items: &str, wanted: &str) -> bool {
    split_tokens(items).any(|t| t.eq_ignore_ascii_case(wanted))
}

fn parse_connections(raw: &str, line_no: usize) -> Result<Vec<usize>, MapError> {
    split_tokens(raw)
        .map(|t| {
            t.parse::<usize>()
                .map_err(|_| MapError::syntax(line_no, format!("'{}' is not a room number", t)))
        })
        .collect()
}
