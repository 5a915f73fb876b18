//! Default appearance for new lists.

/// Accent color assigned to lists created without an explicit color.
pub const DEFAULT_COLOR: &str = "#84cc16";

/// Icon used when a list type has no dedicated default.
pub const DEFAULT_ICON: &str = "Plus";

/// Default icon name for a list type.
///
/// `type` is an open string; the known set below only drives this
/// lookup. Unknown types fall back to [`DEFAULT_ICON`], never an error.
pub fn default_icon(list_type: &str) -> &'static str {
    match list_type {
        "movies" => "Film",
        "shows" => "Tv",
        "places" => "MapPin",
        "drawings" => "PenTool",
        "books" => "Book",
        "games" => "Gamepad",
        "travel" => "Globe",
        "music" => "Music",
        "photography" => "Camera",
        "custom" => DEFAULT_ICON,
        _ => DEFAULT_ICON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_have_icons() {
        assert_eq!(default_icon("movies"), "Film");
        assert_eq!(default_icon("books"), "Book");
        assert_eq!(default_icon("photography"), "Camera");
        assert_eq!(default_icon("custom"), "Plus");
    }

    #[test]
    fn unknown_type_falls_back() {
        assert_eq!(default_icon("recipes"), "Plus");
        assert_eq!(default_icon(""), "Plus");
    }
}
