//! Static tables for known icon collections.
//!
//! Short registry prefixes map to the collection names the icon API
//! expects, and each collection maps to its SPDX license. Unknown prefixes
//! pass through unchanged so any collection on the API can be fetched.

/// License recorded when a collection is not in the table.
pub const UNKNOWN_LICENSE: &str = "Unknown";

/// Map a registry prefix to the external collection name.
pub fn iconify_set(prefix: &str) -> &str {
    match prefix {
        "health" => "healthicons",
        "ms" => "material-symbols",
        "mi" => "ic",
        "mdi" => "mdi",
        "fa" => "fa6-solid",
        "fab" => "fa6-brands",
        "far" => "fa6-regular",
        "lucide" => "lucide",
        "tabler" => "tabler",
        "hero" => "heroicons",
        "ph" => "ph",
        "bi" => "bi",
        "simple" => "simple-icons",
        "carbon" => "carbon",
        other => other,
    }
}

/// SPDX license identifier of a collection.
pub fn license_for(collection: &str) -> &'static str {
    match collection {
        "healthicons" => "MIT",
        "material-symbols" | "ic" | "mdi" | "carbon" => "Apache-2.0",
        "fa6-solid" | "fa6-brands" | "fa6-regular" => "CC-BY-4.0",
        "lucide" => "ISC",
        "tabler" | "heroicons" | "ph" | "bi" => "MIT",
        "simple-icons" => "CC0-1.0",
        _ => UNKNOWN_LICENSE,
    }
}
