//! # PDF Serializer
//!
//! Takes the laid-out pages from the layout engine and writes a valid PDF
//! file.
//!
//! This is a from-scratch PDF 1.7 writer. We write the raw bytes ourselves
//! because it gives us full control over the output and keeps the catalog
//! generator self-contained. The PDF spec is verbose but the subset a
//! catalog needs — two standard fonts, filled paths, image XObjects — is
//! manageable.
//!
//! ## PDF Structure (simplified)
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- objects (fonts, pages, content streams, images)
//! 2 0 obj ... endobj
//! ...
//! xref                <- cross-reference table (byte offsets of each object)
//! trailer             <- points to the root object
//! %%EOF
//! ```
//!
//! Both catalog fonts are standard PDF Type1 fonts (Helvetica and
//! Helvetica-Bold) with WinAnsiEncoding, which covers the Spanish labels
//! and accented product descriptions without embedding any font program.
//!
//! Layout space is top-left origin with y growing downward; PDF space is
//! bottom-up. Every coordinate is flipped here, at the last moment.

use std::collections::HashMap;
use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::font::{FontContext, StandardFont};
use crate::image_loader::LoadedImage;
use crate::layout::{Corners, DrawOp, Element, Page};

/// Bezier circle-approximation constant for rounded corners.
const BEZIER_K: f64 = 0.552_284_749_8;

pub struct PdfWriter;

/// Tracks allocated PDF objects during writing.
struct PdfBuilder {
    objects: Vec<PdfObject>,
    /// XObject obj IDs for images, indexed as /Im0, /Im1, ...
    image_objects: Vec<usize>,
    /// Maps (page_index, image_sequence_on_page) to an index in
    /// `image_objects`. Used while writing content streams to find the
    /// right /ImN reference.
    image_index_map: HashMap<(usize, usize), usize>,
}

struct PdfObject {
    data: Vec<u8>,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write laid-out pages to a PDF byte vector.
    pub fn write(&self, pages: &[Page], title: &str, fonts: &FontContext) -> Vec<u8> {
        let mut builder = PdfBuilder {
            objects: Vec::new(),
            image_objects: Vec::new(),
            image_index_map: HashMap::new(),
        };

        // Reserve object IDs:
        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog
        // 2 = Pages (page tree root)
        // 3 = Helvetica, 4 = Helvetica-Bold
        // 5+ = image XObjects, then page objects and content streams
        builder.objects.push(PdfObject { data: vec![] });
        builder.objects.push(PdfObject { data: vec![] });
        builder.objects.push(PdfObject { data: vec![] });

        let font_regular_id = builder.objects.len();
        builder.objects.push(PdfObject {
            data: Self::standard_font_dict(StandardFont::Helvetica),
        });
        let font_bold_id = builder.objects.len();
        builder.objects.push(PdfObject {
            data: Self::standard_font_dict(StandardFont::HelveticaBold),
        });

        self.register_images(&mut builder, pages);

        let mut page_obj_ids: Vec<usize> = Vec::new();

        for (page_idx, page) in pages.iter().enumerate() {
            let content = self.build_content_stream(page, page_idx, &builder, fonts);
            let compressed = compress_to_vec_zlib(content.as_bytes(), 6);

            let content_obj_id = builder.objects.len();
            let mut content_data: Vec<u8> = Vec::new();
            let _ = write!(
                content_data,
                "<< /Length {} /Filter /FlateDecode >>\nstream\n",
                compressed.len()
            );
            content_data.extend_from_slice(&compressed);
            content_data.extend_from_slice(b"\nendstream");
            builder.objects.push(PdfObject { data: content_data });

            let page_obj_id = builder.objects.len();
            let font_resources =
                format!("/F0 {font_regular_id} 0 R /F1 {font_bold_id} 0 R");
            let xobject_resources = self.build_xobject_resource_dict(page_idx, &builder);
            let resources = if xobject_resources.is_empty() {
                format!("/Font << {font_resources} >>")
            } else {
                format!("/Font << {font_resources} >> /XObject << {xobject_resources} >>")
            };
            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << {} >> >>",
                page.width, page.height, content_obj_id, resources
            );
            builder.objects.push(PdfObject {
                data: page_dict.into_bytes(),
            });
            page_obj_ids.push(page_obj_id);
        }

        // Catalog (object 1)
        builder.objects[1].data = b"<< /Type /Catalog /Pages 2 0 R >>".to_vec();

        // Pages tree (object 2)
        let kids: String = page_obj_ids
            .iter()
            .map(|id| format!("{id} 0 R"))
            .collect::<Vec<_>>()
            .join(" ");
        builder.objects[2].data = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            page_obj_ids.len()
        )
        .into_bytes();

        // Info dictionary
        let info_obj_id = builder.objects.len();
        let info = format!(
            "<< /Title ({}) /Producer (folleto) >>",
            Self::encode_text(title)
        );
        builder.objects.push(PdfObject {
            data: info.into_bytes(),
        });

        self.serialize(&builder, info_obj_id)
    }

    /// The font dictionary for a standard, non-embedded Type1 font.
    fn standard_font_dict(font: StandardFont) -> Vec<u8> {
        format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} \
             /Encoding /WinAnsiEncoding >>",
            font.pdf_name()
        )
        .into_bytes()
    }

    /// Build the PDF content stream for a single page.
    fn build_content_stream(
        &self,
        page: &Page,
        page_idx: usize,
        builder: &PdfBuilder,
        fonts: &FontContext,
    ) -> String {
        let mut stream = String::new();
        let mut image_seq = 0usize;

        for element in &page.elements {
            self.write_element(
                &mut stream,
                element,
                page.height,
                builder,
                page_idx,
                &mut image_seq,
                fonts,
            );
        }

        stream
    }

    /// Write a single layout element as PDF operators.
    #[allow(clippy::too_many_arguments)]
    fn write_element(
        &self,
        stream: &mut String,
        element: &Element,
        page_height: f64,
        builder: &PdfBuilder,
        page_idx: usize,
        image_seq: &mut usize,
        fonts: &FontContext,
    ) {
        match &element.draw {
            DrawOp::Rect {
                fill,
                stroke,
                corner_radius,
            } => {
                let x = element.x;
                let y = page_height - element.y - element.height;
                let w = element.width;
                let h = element.height;
                let rounded = corner_radius.top_left > 0.0
                    || corner_radius.top_right > 0.0
                    || corner_radius.bottom_right > 0.0
                    || corner_radius.bottom_left > 0.0;

                if let Some(c) = fill {
                    let _ = write!(stream, "q\n{:.3} {:.3} {:.3} rg\n", c.r, c.g, c.b);
                    if rounded {
                        // The layout's bottom edge is PDF's y-low edge.
                        self.write_rounded_rect_path(stream, x, y, w, h, corner_radius);
                    } else {
                        let _ = write!(stream, "{x:.2} {y:.2} {w:.2} {h:.2} re\n");
                    }
                    let _ = write!(stream, "f\nQ\n");
                }

                if let Some(c) = stroke {
                    let _ = write!(
                        stream,
                        "q\n{:.3} {:.3} {:.3} RG\n1 w\n",
                        c.r, c.g, c.b
                    );
                    if rounded {
                        self.write_rounded_rect_path(stream, x, y, w, h, corner_radius);
                    } else {
                        let _ = write!(stream, "{x:.2} {y:.2} {w:.2} {h:.2} re\n");
                    }
                    let _ = write!(stream, "S\nQ\n");
                }
            }

            DrawOp::Polygon { points, fill } => {
                let _ = write!(stream, "q\n{:.3} {:.3} {:.3} rg\n", fill.r, fill.g, fill.b);
                for (i, (px, py)) in points.iter().enumerate() {
                    let op = if i == 0 { "m" } else { "l" };
                    let _ = write!(stream, "{:.2} {:.2} {}\n", px, page_height - py, op);
                }
                let _ = write!(stream, "h\nf\nQ\n");
            }

            DrawOp::Text {
                content,
                style,
                size,
                color,
            } => {
                let font_name = match fonts.resolve(*style) {
                    StandardFont::Helvetica => "F0",
                    StandardFont::HelveticaBold => "F1",
                };
                let _ = write!(
                    stream,
                    "BT\n{:.3} {:.3} {:.3} rg\n/{} {:.1} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
                    color.r,
                    color.g,
                    color.b,
                    font_name,
                    size,
                    element.x,
                    page_height - element.y,
                    Self::encode_text(content)
                );
            }

            DrawOp::Image { .. } => {
                let seq = *image_seq;
                *image_seq += 1;
                let x = element.x;
                let y = page_height - element.y - element.height;
                if let Some(&img_idx) = builder.image_index_map.get(&(page_idx, seq)) {
                    let _ = write!(
                        stream,
                        "q\n{:.4} 0 0 {:.4} {:.2} {:.2} cm\n/Im{} Do\nQ\n",
                        element.width, element.height, x, y, img_idx
                    );
                } else {
                    // Grey placeholder if the image was not registered.
                    let _ = write!(
                        stream,
                        "q\n0.9 0.9 0.9 rg\n{:.2} {:.2} {:.2} {:.2} re\nf\nQ\n",
                        x, y, element.width, element.height
                    );
                }
            }
        }
    }

    /// Emit a rounded-rect path in PDF space (y-up, `y` is the bottom
    /// edge). The layout's per-corner radii name corners in top-down
    /// space, so top and bottom swap here.
    fn write_rounded_rect_path(
        &self,
        stream: &mut String,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        r: &Corners,
    ) {
        let clamp = |v: f64| v.min(w / 2.0).min(h / 2.0);
        // PDF-space corner radii.
        let tl = clamp(r.bottom_left);
        let tr = clamp(r.bottom_right);
        let br = clamp(r.top_right);
        let bl = clamp(r.top_left);
        let k = BEZIER_K;

        let _ = write!(stream, "{:.2} {:.2} m\n", x + bl, y);

        let _ = write!(stream, "{:.2} {:.2} l\n", x + w - br, y);
        if br > 0.0 {
            let _ = write!(
                stream,
                "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
                x + w - br + br * k,
                y,
                x + w,
                y + br - br * k,
                x + w,
                y + br
            );
        }

        let _ = write!(stream, "{:.2} {:.2} l\n", x + w, y + h - tr);
        if tr > 0.0 {
            let _ = write!(
                stream,
                "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
                x + w,
                y + h - tr + tr * k,
                x + w - tr + tr * k,
                y + h,
                x + w - tr,
                y + h
            );
        }

        let _ = write!(stream, "{:.2} {:.2} l\n", x + tl, y + h);
        if tl > 0.0 {
            let _ = write!(
                stream,
                "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
                x + tl - tl * k,
                y + h,
                x,
                y + h - tl + tl * k,
                x,
                y + h - tl
            );
        }

        let _ = write!(stream, "{:.2} {:.2} l\n", x, y + bl);
        if bl > 0.0 {
            let _ = write!(
                stream,
                "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
                x,
                y + bl - bl * k,
                x + bl - bl * k,
                y,
                x + bl,
                y
            );
        }

        let _ = write!(stream, "h\n");
    }

    /// Walk all pages and create an XObject for each image element,
    /// populating `image_index_map` for content stream references.
    fn register_images(&self, builder: &mut PdfBuilder, pages: &[Page]) {
        for (page_idx, page) in pages.iter().enumerate() {
            let mut image_seq = 0usize;
            for element in &page.elements {
                if let DrawOp::Image { image } = &element.draw {
                    let img_idx = builder.image_objects.len();
                    let xobj_id = Self::write_image_xobject(builder, image);
                    builder.image_objects.push(xobj_id);
                    builder.image_index_map.insert((page_idx, image_seq), img_idx);
                    image_seq += 1;
                }
            }
        }
    }

    /// Write a single image as one or two XObjects (RGB plus an optional
    /// SMask for transparency). Returns the main XObject ID.
    fn write_image_xobject(builder: &mut PdfBuilder, image: &LoadedImage) -> usize {
        let smask_id = image.alpha.as_ref().map(|alpha| {
            let compressed_alpha = compress_to_vec_zlib(alpha, 6);
            let smask_obj_id = builder.objects.len();
            let mut smask_data: Vec<u8> = Vec::new();
            let _ = write!(
                smask_data,
                "<< /Type /XObject /Subtype /Image \
                 /Width {} /Height {} \
                 /ColorSpace /DeviceGray \
                 /BitsPerComponent 8 \
                 /Filter /FlateDecode \
                 /Length {} >>\nstream\n",
                image.width_px,
                image.height_px,
                compressed_alpha.len()
            );
            smask_data.extend_from_slice(&compressed_alpha);
            smask_data.extend_from_slice(b"\nendstream");
            builder.objects.push(PdfObject { data: smask_data });
            smask_obj_id
        });

        let compressed_rgb = compress_to_vec_zlib(&image.rgb, 6);
        let obj_id = builder.objects.len();
        let mut obj_data: Vec<u8> = Vec::new();

        let smask_ref = smask_id
            .map(|id| format!(" /SMask {id} 0 R"))
            .unwrap_or_default();

        let _ = write!(
            obj_data,
            "<< /Type /XObject /Subtype /Image \
             /Width {} /Height {} \
             /ColorSpace /DeviceRGB \
             /BitsPerComponent 8 \
             /Filter /FlateDecode \
             /Length {}{} >>\nstream\n",
            image.width_px,
            image.height_px,
            compressed_rgb.len(),
            smask_ref
        );
        obj_data.extend_from_slice(&compressed_rgb);
        obj_data.extend_from_slice(b"\nendstream");
        builder.objects.push(PdfObject { data: obj_data });
        obj_id
    }

    /// Build the /XObject resource dict entries for a specific page.
    fn build_xobject_resource_dict(&self, page_idx: usize, builder: &PdfBuilder) -> String {
        let mut entries: Vec<(usize, usize)> = Vec::new();
        for (&(pidx, _), &img_idx) in &builder.image_index_map {
            if pidx == page_idx {
                entries.push((img_idx, builder.image_objects[img_idx]));
            }
        }
        if entries.is_empty() {
            return String::new();
        }
        entries.sort_by_key(|(idx, _)| *idx);
        entries.dedup();
        entries
            .iter()
            .map(|(idx, obj_id)| format!("/Im{idx} {obj_id} 0 R"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Encode a text run as a PDF literal string in WinAnsiEncoding, with
    /// octal escapes for bytes outside printable ASCII.
    fn encode_text(text: &str) -> String {
        let mut out = String::new();
        for ch in text.chars() {
            let b = Self::unicode_to_winansi(ch).unwrap_or(b'?');
            match b {
                b'\\' => out.push_str("\\\\"),
                b'(' => out.push_str("\\("),
                b')' => out.push_str("\\)"),
                0x20..=0x7E => out.push(b as char),
                _ => {
                    let _ = write!(out, "\\{b:03o}");
                }
            }
        }
        out
    }

    /// Map a Unicode codepoint to a WinAnsiEncoding byte value.
    ///
    /// WinAnsiEncoding is based on Windows-1252. Codepoints in 0x20..=0x7E
    /// and 0xA0..=0xFF map directly — that covers the Spanish accented
    /// range. The 0x80..=0x9F window holds special mappings for smart
    /// quotes, bullets, dashes, etc.
    fn unicode_to_winansi(ch: char) -> Option<u8> {
        let cp = ch as u32;
        if (0x20..=0x7E).contains(&cp) || (0xA0..=0xFF).contains(&cp) {
            return Some(cp as u8);
        }
        match cp {
            0x20AC => Some(0x80), // Euro sign
            0x201A => Some(0x82), // Single low-9 quotation mark
            0x0192 => Some(0x83), // Latin small letter f with hook
            0x201E => Some(0x84), // Double low-9 quotation mark
            0x2026 => Some(0x85), // Horizontal ellipsis
            0x2020 => Some(0x86), // Dagger
            0x2021 => Some(0x87), // Double dagger
            0x02C6 => Some(0x88), // Modifier letter circumflex accent
            0x2030 => Some(0x89), // Per mille sign
            0x0160 => Some(0x8A), // Latin capital letter S with caron
            0x2039 => Some(0x8B), // Single left-pointing angle quotation
            0x0152 => Some(0x8C), // Latin capital ligature OE
            0x017D => Some(0x8E), // Latin capital letter Z with caron
            0x2018 => Some(0x91), // Left single quotation mark
            0x2019 => Some(0x92), // Right single quotation mark
            0x201C => Some(0x93), // Left double quotation mark
            0x201D => Some(0x94), // Right double quotation mark
            0x2022 => Some(0x95), // Bullet
            0x2013 => Some(0x96), // En dash
            0x2014 => Some(0x97), // Em dash
            0x02DC => Some(0x98), // Small tilde
            0x2122 => Some(0x99), // Trade mark sign
            0x0161 => Some(0x9A), // Latin small letter s with caron
            0x203A => Some(0x9B), // Single right-pointing angle quotation
            0x0153 => Some(0x9C), // Latin small ligature oe
            0x017E => Some(0x9E), // Latin small letter z with caron
            0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
            _ => None,
        }
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(&self, builder: &PdfBuilder, info_obj_id: usize) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; builder.objects.len()];

        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, obj) in builder.objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let header = format!("{i} 0 obj\n");
            output.extend_from_slice(header.as_bytes());
            output.extend_from_slice(&obj.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", builder.objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{offset:010} 00000 n \n");
        }

        let _ = write!(
            output,
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            builder.objects.len(),
            info_obj_id,
            xref_offset
        );

        output
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, FontStyle};

    fn blank_page() -> Page {
        Page {
            width: 595.28,
            height: 841.89,
            elements: vec![],
        }
    }

    fn text_element(content: &str, style: FontStyle) -> Element {
        Element {
            x: 54.0,
            y: 66.0,
            width: 100.0,
            height: 12.0,
            draw: DrawOp::Text {
                content: content.to_string(),
                style,
                size: 12.0,
                color: Color::BLACK,
            },
        }
    }

    #[test]
    fn test_encode_text_escapes_string_delimiters() {
        assert_eq!(PdfWriter::encode_text("Hola (mundo)"), "Hola \\(mundo\\)");
        assert_eq!(PdfWriter::encode_text("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_empty_document_produces_valid_pdf() {
        let bytes = PdfWriter::new().write(&[blank_page()], "Prueba", &FontContext::new());

        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
        assert!(bytes.windows(4).any(|w| w == b"xref"));
        assert!(bytes.windows(7).any(|w| w == b"trailer"));
    }

    #[test]
    fn test_both_standard_fonts_registered() {
        let bytes = PdfWriter::new().write(&[blank_page()], "Prueba", &FontContext::new());
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.contains("/BaseFont /Helvetica "));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/Encoding /WinAnsiEncoding"));
        assert!(text.contains("/Type1"));
    }

    #[test]
    fn test_title_in_info_dictionary() {
        let bytes = PdfWriter::new().write(&[blank_page()], "Bolsas", &FontContext::new());
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Title (Bolsas)"));
    }

    #[test]
    fn test_page_count_in_pages_tree() {
        let bytes = PdfWriter::new().write(&[blank_page(), blank_page(), blank_page()], "x", &FontContext::new());
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 3"));
    }

    #[test]
    fn test_text_uses_bold_font_resource() {
        let mut page = blank_page();
        page.elements.push(text_element("HOLA", FontStyle::Bold));
        let bytes = PdfWriter::new().write(&[page], "x", &FontContext::new());
        // The content stream is compressed; check the resource dict instead.
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/F1"));
    }

    #[test]
    fn test_accented_text_encodes_as_octal_winansi() {
        // Á is 0xC1 in WinAnsiEncoding -> \301 in a literal string.
        assert_eq!(PdfWriter::encode_text("CATÁLOGO"), "CAT\\301LOGO");
        assert_eq!(PdfWriter::encode_text("año"), "a\\361o");
    }

    #[test]
    fn test_unmappable_char_becomes_question_mark() {
        assert_eq!(PdfWriter::encode_text("漢"), "?");
    }

    #[test]
    fn test_winansi_direct_and_special_ranges() {
        assert_eq!(PdfWriter::unicode_to_winansi('A'), Some(0x41));
        assert_eq!(PdfWriter::unicode_to_winansi('ñ'), Some(0xF1));
        assert_eq!(PdfWriter::unicode_to_winansi('€'), Some(0x80));
        assert_eq!(PdfWriter::unicode_to_winansi('漢'), None);
    }

    #[test]
    fn test_image_element_gets_xobject() {
        let mut page = blank_page();
        page.elements.push(Element {
            x: 10.0,
            y: 10.0,
            width: 50.0,
            height: 50.0,
            draw: DrawOp::Image {
                image: LoadedImage {
                    rgb: vec![255, 0, 0],
                    alpha: None,
                    width_px: 1,
                    height_px: 1,
                },
            },
        });
        let bytes = PdfWriter::new().write(&[page], "x", &FontContext::new());
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/XObject << /Im0"));
        assert!(text.contains("/Subtype /Image"));
        assert!(!text.contains("/SMask"));
    }

    #[test]
    fn test_transparent_image_gets_smask() {
        let mut page = blank_page();
        page.elements.push(Element {
            x: 10.0,
            y: 10.0,
            width: 50.0,
            height: 50.0,
            draw: DrawOp::Image {
                image: LoadedImage {
                    rgb: vec![0, 0, 255],
                    alpha: Some(vec![128]),
                    width_px: 1,
                    height_px: 1,
                },
            },
        });
        let bytes = PdfWriter::new().write(&[page], "x", &FontContext::new());
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/SMask"));
        assert!(text.contains("/DeviceGray"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let bytes = PdfWriter::new().write(&[blank_page()], "x", &FontContext::new());

        let marker = b"startxref\n";
        let start = bytes
            .windows(marker.len())
            .rposition(|w| w == marker)
            .unwrap()
            + marker.len();
        let tail = String::from_utf8_lossy(&bytes[start..]);
        let xref_offset: usize = tail.lines().next().unwrap().trim().parse().unwrap();
        assert_eq!(&bytes[xref_offset..xref_offset + 4], b"xref");

        // Every recorded offset lands on "N 0 obj".
        let table = String::from_utf8_lossy(&bytes[xref_offset..start]);
        for (i, line) in table.lines().skip(3).enumerate() {
            if !line.ends_with("n ") {
                break;
            }
            let offset: usize = line.split(' ').next().unwrap().parse().unwrap();
            let want = format!("{} 0 obj", i + 1);
            assert_eq!(
                &bytes[offset..offset + want.len()],
                want.as_bytes(),
                "offset {offset} should start object {}",
                i + 1
            );
        }
    }
}
