use super::model::make_display;

#[test]
fn make_display_prefers_artist_dash_title() {
    assert_eq!(make_display("Song", Some("Artist")), "Artist - Song");
    assert_eq!(make_display("Song", Some("  Artist  ")), "Artist - Song");
    assert_eq!(make_display("Song", None), "Song");
    assert_eq!(make_display("Song", Some("")), "Song");
    assert_eq!(make_display("Song", Some("   ")), "Song");
}
