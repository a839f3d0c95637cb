// tests/style_files.rs
use water_trends::config::style::ChartStyle;
use water_trends::extract::Measurement;

#[test]
fn saved_style_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/style.txt");

    let mut style = ChartStyle::default();
    style.series_mut(Measurement::Magnesium).label = "Mg = magnesium".into();
    style.series_mut(Measurement::Chloride).color = "#abc".into();
    style.tension = 0.0;
    style.save(&path).unwrap();

    assert_eq!(ChartStyle::load(&path).unwrap(), style);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.txt");
    std::fs::write(&path, "# only sodium\r\ncolor.sodium = #000000\r\n").unwrap();

    let style = ChartStyle::load(&path).unwrap();
    let defaults = ChartStyle::default();
    assert_eq!(style.series(Measurement::Sodium).color, "#000000");
    for m in Measurement::ALL.into_iter().filter(|m| *m != Measurement::Sodium) {
        assert_eq!(style.series(m), defaults.series(m));
    }
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ChartStyle::load(&dir.path().join("absent.txt")).is_err());
}
