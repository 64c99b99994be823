/// Separator between a distance offset and the primary location name.
const LOCATION_SEPARATOR: &str = " of ";

/// Fallback offset label when the feed gives a bare place name.
pub const NEAR_THE: &str = "Near the ";

/// Split a feed place description into `(offset, main)` display parts.
///
/// Splits on the first occurrence of the literal `" of "` token, so place
/// names that merely contain "of" as a substring ("Offaly") stay whole, and a
/// second occurrence stays inside the main part. The offset keeps its
/// trailing `" of "`. Without a separator the offset falls back to
/// [`NEAR_THE`] and the whole place becomes the main part.
pub fn split_place(place: &str) -> (String, String) {
    match place.split_once(LOCATION_SEPARATOR) {
        Some((offset, main)) => (format!("{offset}{LOCATION_SEPARATOR}"), main.to_string()),
        None => (NEAR_THE.to_string(), place.to_string()),
    }
}
