use whr_toolbox::report::{self, LineStyle, ReportOptions};
use whr_toolbox::whr::{self, PlantInput};

fn low_outlet_plant() -> PlantInput {
    PlantInput {
        flue_temp_out: 110.0,
        ..PlantInput::default()
    }
}

#[test]
fn sections_follow_fixed_order() {
    let input = PlantInput::default();
    let result = whr::analyze(&input);
    let headings: Vec<String> = report::build_sections(&input, &result, &ReportOptions::default())
        .into_iter()
        .map(|s| s.heading)
        .collect();
    assert_eq!(
        headings,
        [
            "1. Input Parameters",
            "2. Analysis Results",
            "3. Recommendation",
            "4. Five-Year Climate Impact",
            "5. Executive Summary",
        ]
    );
}

#[test]
fn warning_line_only_with_dew_point_risk() {
    let opts = ReportOptions::default();

    let input = PlantInput::default();
    let sections = report::build_sections(&input, &whr::analyze(&input), &opts);
    assert!(sections[2].lines.iter().all(|l| l.style != LineStyle::Warning));

    let input = low_outlet_plant();
    let sections = report::build_sections(&input, &whr::analyze(&input), &opts);
    let warning = sections[2]
        .lines
        .iter()
        .find(|l| l.style == LineStyle::Warning)
        .expect("warning line");
    assert!(warning.text.contains("[!]"));
    assert!(warning.text.contains("110.0 degC"));
}

#[test]
fn every_line_is_ascii() {
    let input = low_outlet_plant();
    let result = whr::analyze(&input);
    let opts = ReportOptions {
        currency_label: "\u{20b9}".into(),
        ..ReportOptions::default()
    };
    let text = report::render_text(&input, &result, &opts);
    assert!(text.is_ascii());
    assert!(text.contains("Rs. "));
    assert!(text.contains("CO2"));
}

#[test]
fn sanitize_maps_known_symbols_and_masks_the_rest() {
    assert_eq!(
        report::sanitize_text("\u{201c}Q\u{201d} \u{2014} 5\u{2026} \u{2022} \u{20ac}"),
        "\"Q\" -- 5... * EUR"
    );
    assert_eq!(report::sanitize_text("열회수"), "???");
}

#[test]
fn pdf_bytes_have_pdf_header() {
    let input = low_outlet_plant();
    let result = whr::analyze(&input);
    let bytes = report::render_report(&input, &result, &ReportOptions::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1000);
}

#[test]
fn report_is_written_to_disk() {
    let input = PlantInput::default();
    let result = whr::analyze(&input);
    let path = std::env::temp_dir().join(format!("whr_report_{}.pdf", std::process::id()));
    report::write_report(&path, &input, &result, &ReportOptions::default()).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn writing_into_missing_directory_fails() {
    let input = PlantInput::default();
    let result = whr::analyze(&input);
    let path = std::env::temp_dir()
        .join("whr_no_such_dir_for_reports")
        .join("out.pdf");
    let err = report::write_report(&path, &input, &result, &ReportOptions::default());
    assert!(matches!(err, Err(report::ReportError::Io(_))));
}
