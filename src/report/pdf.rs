use std::fs;
use std::path::Path;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};
use tracing::{debug, info};

use crate::whr::{AnalysisResult, PlantInput};

use super::layout::{build_sections, wrap_words, LineStyle, ReportOptions};
use super::sanitize::sanitize_text;
use super::ReportError;

const PAGE_W_MM: f32 = 210.0;
const PAGE_H_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
/// pt → mm
const PT_TO_MM: f32 = 25.4 / 72.0;
/// Helvetica 평균 글자 폭 (em 비율). 가운데 정렬과 줄바꿈 폭 추정에만 쓴다.
const AVG_CHAR_EM: f32 = 0.5;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

/// 위에서 아래로 줄을 쌓아 가며 하단 여백에 닿으면 새 페이지를 연다.
struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: Fonts,
    /// 페이지 상단으로부터 내려온 거리 [mm]
    cursor_mm: f32,
    pages: usize,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self, ReportError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_W_MM), Mm(PAGE_H_MM), "page 1");
        let font = |f: BuiltinFont| {
            doc.add_builtin_font(f)
                .map_err(|e| ReportError::Pdf(e.to_string()))
        };
        let fonts = Fonts {
            regular: font(BuiltinFont::Helvetica)?,
            bold: font(BuiltinFont::HelveticaBold)?,
            italic: font(BuiltinFont::HelveticaOblique)?,
        };
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            fonts,
            cursor_mm: MARGIN_MM,
            pages: 1,
        })
    }

    fn ensure_room(&mut self, height_mm: f32) {
        if self.cursor_mm + height_mm > PAGE_H_MM - MARGIN_MM {
            self.pages += 1;
            let (page, layer) = self.doc.add_page(
                Mm(PAGE_W_MM),
                Mm(PAGE_H_MM),
                format!("page {}", self.pages),
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.cursor_mm = MARGIN_MM;
            debug!(page = self.pages, "보고서 페이지 추가");
        }
    }

    fn skip(&mut self, height_mm: f32) {
        self.cursor_mm += height_mm;
    }

    /// `height_mm` 높이의 한 줄을 쓴다. `centered`면 추정 폭으로 가운데 정렬한다.
    fn line(&mut self, text: &str, size_pt: f32, height_mm: f32, font: FontKind, centered: bool) {
        self.ensure_room(height_mm);
        let font_ref = match font {
            FontKind::Regular => &self.fonts.regular,
            FontKind::Bold => &self.fonts.bold,
            FontKind::Italic => &self.fonts.italic,
        };
        let x = if centered {
            let width = text.len() as f32 * size_pt * AVG_CHAR_EM * PT_TO_MM;
            ((PAGE_W_MM - width) / 2.0).max(MARGIN_MM)
        } else {
            MARGIN_MM
        };
        // 기준선은 줄 높이의 70% 지점
        let baseline = PAGE_H_MM - (self.cursor_mm + height_mm * 0.7);
        self.layer
            .use_text(text, size_pt, Mm(x), Mm(baseline), font_ref);
        self.cursor_mm += height_mm;
    }

    fn set_color(&self, r: f32, g: f32, b: f32) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
    }

    fn finish(self) -> Result<Vec<u8>, ReportError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| ReportError::Pdf(e.to_string()))
    }
}

#[derive(Clone, Copy)]
enum FontKind {
    Regular,
    Bold,
    Italic,
}

fn chars_per_line(size_pt: f32) -> usize {
    let usable = PAGE_W_MM - 2.0 * MARGIN_MM;
    (usable / (size_pt * AVG_CHAR_EM * PT_TO_MM)).floor() as usize
}

/// 분석 결과를 A4 PDF 보고서 바이트로 렌더링한다.
pub fn render_report(
    input: &PlantInput,
    result: &AnalysisResult,
    opts: &ReportOptions,
) -> Result<Vec<u8>, ReportError> {
    let title = sanitize_text(&opts.title);
    let mut w = PageWriter::new(&title)?;

    w.line(&title, 20.0, 15.0, FontKind::Bold, true);
    w.skip(5.0);
    w.line(&sanitize_text(&opts.subtitle), 10.0, 8.0, FontKind::Regular, true);
    w.skip(10.0);

    for section in build_sections(input, result, opts) {
        w.line(&section.heading, 14.0, 10.0, FontKind::Bold, false);
        for line in &section.lines {
            match line.style {
                LineStyle::Item => w.line(&line.text, 11.0, 7.0, FontKind::Regular, false),
                LineStyle::Warning => {
                    w.set_color(0.78, 0.0, 0.0);
                    for wrapped in wrap_words(&line.text, chars_per_line(11.0)) {
                        w.line(&wrapped, 11.0, 7.0, FontKind::Regular, false);
                    }
                    w.set_color(0.0, 0.0, 0.0);
                }
                LineStyle::Paragraph => {
                    for wrapped in wrap_words(&line.text, chars_per_line(11.0)) {
                        w.line(&wrapped, 11.0, 7.0, FontKind::Regular, false);
                    }
                }
            }
        }
        w.skip(5.0);
    }

    w.skip(10.0);
    w.line(&sanitize_text(&opts.footer), 9.0, 8.0, FontKind::Italic, true);

    let pages = w.pages;
    let bytes = w.finish()?;
    info!(pages, bytes = bytes.len(), "PDF 보고서 생성");
    Ok(bytes)
}

/// 보고서를 렌더링해 파일로 저장한다.
pub fn write_report(
    path: &Path,
    input: &PlantInput,
    result: &AnalysisResult,
    opts: &ReportOptions,
) -> Result<(), ReportError> {
    let bytes = render_report(input, result, opts)?;
    fs::write(path, bytes)?;
    info!(path = %path.display(), "보고서 저장");
    Ok(())
}
