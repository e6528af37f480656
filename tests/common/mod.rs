//! Builds small `.pptx` packages for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
const REL_NOTES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";
const REL_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

pub const EMU_PER_INCH: f64 = 914_400.0;

pub fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

fn xfrm(tag: &str, left: f64, top: f64, width: f64, height: f64) -> String {
    format!(
        r#"<{tag}><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></{tag}>"#,
        emu(left),
        emu(top),
        emu(width),
        emu(height),
    )
}

/// `p:sp` text box at the given position (inches).
pub fn text_box(id: u32, text: &str, pos: (f64, f64, f64, f64)) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr><p:txBody><a:bodyPr/><a:p><a:r><a:rPr lang="en-US" sz="1800" b="1"><a:solidFill><a:srgbClr val="1f3864"/></a:solidFill><a:latin typeface="Calibri"/></a:rPr><a:t>{text}</a:t></a:r></a:p></p:txBody></p:sp>"#,
        xfrm("a:xfrm", pos.0, pos.1, pos.2, pos.3)
    )
}

/// Title placeholder.
pub fn title(id: u32, text: &str) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Title {id}"/><p:cNvSpPr/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:p><a:r><a:t>{text}</a:t></a:r></a:p></p:txBody></p:sp>"#
    )
}

/// Placeholder `p:sp` of `ph_type`, positioned only when `pos` is given.
/// Slides, layouts and masters all use this form.
pub fn placeholder(
    id: u32,
    ph_type: &str,
    idx: Option<u32>,
    text: &str,
    pos: Option<(f64, f64, f64, f64)>,
) -> String {
    let idx = idx.map(|i| format!(r#" idx="{i}""#)).unwrap_or_default();
    let xfrm = pos
        .map(|p| xfrm("a:xfrm", p.0, p.1, p.2, p.3))
        .unwrap_or_default();
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Placeholder {id}"/><p:cNvSpPr/><p:nvPr><p:ph type="{ph_type}"{idx}/></p:nvPr></p:nvSpPr><p:spPr>{xfrm}</p:spPr><p:txBody><a:bodyPr/><a:p><a:r><a:t>{text}</a:t></a:r></a:p></p:txBody></p:sp>"#
    )
}

/// Filled preset auto-shape without text.
pub fn auto_shape(id: u32, preset: &str, fill: &str, pos: (f64, f64, f64, f64)) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Shape {id}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst="{preset}"><a:avLst/></a:prstGeom><a:solidFill><a:srgbClr val="{fill}"/></a:solidFill></p:spPr></p:sp>"#,
        xfrm("a:xfrm", pos.0, pos.1, pos.2, pos.3)
    )
}

/// `p:pic` embedding relationship `r_id`.
pub fn picture(id: u32, r_id: &str, pos: (f64, f64, f64, f64)) -> String {
    format!(
        r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Picture {id}"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="{r_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#,
        xfrm("a:xfrm", pos.0, pos.1, pos.2, pos.3)
    )
}

/// `p:grpSp` wrapping `children`.
pub fn group(id: u32, children: &[String]) -> String {
    format!(
        r#"<p:grpSp><p:nvGrpSpPr><p:cNvPr id="{id}" name="Group {id}"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>{}</p:grpSp>"#,
        children.concat()
    )
}

#[derive(Default)]
pub struct SlideFixture {
    pub shapes: Vec<String>,
    /// (relationship id, content type extension, bytes)
    pub images: Vec<(String, &'static str, Vec<u8>)>,
    pub notes: Option<String>,
    /// Raw slide XML replacing the generated one
    pub raw_xml: Option<String>,
}

impl SlideFixture {
    pub fn new(shapes: Vec<String>) -> Self {
        Self {
            shapes,
            ..Default::default()
        }
    }

    pub fn image(mut self, r_id: &str, ext: &'static str, bytes: &[u8]) -> Self {
        self.images.push((r_id.to_string(), ext, bytes.to_vec()));
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

#[derive(Default)]
pub struct DeckBuilder {
    pub slides: Vec<SlideFixture>,
    pub core_xml: Option<String>,
    /// Shapes of the single slide layout every slide uses
    pub layout: Option<Vec<String>>,
    /// Shapes of the master behind the layout
    pub master: Option<Vec<String>>,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slide(mut self, slide: SlideFixture) -> Self {
        self.slides.push(slide);
        self
    }

    pub fn layout(mut self, shapes: Vec<String>) -> Self {
        self.layout = Some(shapes);
        self
    }

    pub fn master(mut self, shapes: Vec<String>) -> Self {
        self.master = Some(shapes);
        self
    }

    pub fn core_properties(mut self, author: &str, title: &str) -> Self {
        self.core_xml = Some(format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>{title}</dc:title><dc:creator>{author}</dc:creator><cp:category>Reports</cp:category><dcterms:created xsi:type="dcterms:W3CDTF">2024-02-01T09:30:00Z</dcterms:created></cp:coreProperties>"#
        ));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        let mut put = |name: &str, data: &[u8]| {
            zip.start_file(name, options.clone()).unwrap();
            zip.write_all(data).unwrap();
        };

        let mut overrides = String::from(
            r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#,
        );
        let mut root_rels = String::from(
            r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>"#,
        );
        if let Some(core) = &self.core_xml {
            overrides.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
            root_rels.push_str(r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#);
            put("docProps/core.xml", core.as_bytes());
        }

        if let Some(layout) = &self.layout {
            overrides.push_str(r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#);
            put(
                "ppt/slideLayouts/slideLayout1.xml",
                shape_part("p:sldLayout", layout).as_bytes(),
            );
            let mut layout_rels = String::new();
            if let Some(master) = &self.master {
                overrides.push_str(r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#);
                put(
                    "ppt/slideMasters/slideMaster1.xml",
                    shape_part("p:sldMaster", master).as_bytes(),
                );
                layout_rels.push_str(&format!(
                    r#"<Relationship Id="rId1" Type="{REL_MASTER}" Target="../slideMasters/slideMaster1.xml"/>"#
                ));
            }
            put(
                "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
                rels(&layout_rels).as_bytes(),
            );
        }

        let mut sld_ids = String::new();
        let mut pres_rels = String::new();
        for (idx, slide) in self.slides.iter().enumerate() {
            let n = idx + 1;
            sld_ids.push_str(&format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 255 + n, n));
            pres_rels.push_str(&format!(
                r#"<Relationship Id="rId{n}" Type="{REL_SLIDE}" Target="slides/slide{n}.xml"/>"#
            ));
            overrides.push_str(&format!(
                r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
            ));

            let xml = slide.raw_xml.clone().unwrap_or_else(|| {
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld {NS}><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{}</p:spTree></p:cSld></p:sld>"#,
                    slide.shapes.concat()
                )
            });
            put(&format!("ppt/slides/slide{n}.xml"), xml.as_bytes());

            let mut slide_rels = String::new();
            if self.layout.is_some() {
                slide_rels.push_str(&format!(
                    r#"<Relationship Id="rIdLayout" Type="{REL_LAYOUT}" Target="../slideLayouts/slideLayout1.xml"/>"#
                ));
            }
            for (img_idx, (r_id, ext, bytes)) in slide.images.iter().enumerate() {
                let media = format!("image{}_{}.{}", n, img_idx + 1, ext);
                slide_rels.push_str(&format!(
                    r#"<Relationship Id="{r_id}" Type="{REL_IMAGE}" Target="../media/{media}"/>"#
                ));
                put(&format!("ppt/media/{media}"), bytes);
            }
            if let Some(notes) = &slide.notes {
                slide_rels.push_str(&format!(
                    r#"<Relationship Id="rIdNotes" Type="{REL_NOTES}" Target="../notesSlides/notesSlide{n}.xml"/>"#
                ));
                overrides.push_str(&format!(
                    r#"<Override PartName="/ppt/notesSlides/notesSlide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml"/>"#
                ));
                let notes_xml = format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:notes {NS}><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/><p:sp><p:nvSpPr><p:cNvPr id="2" name="Slide Image"/><p:cNvSpPr/><p:nvPr><p:ph type="sldImg"/></p:nvPr></p:nvSpPr><p:spPr/></p:sp><p:sp><p:nvSpPr><p:cNvPr id="3" name="Notes"/><p:cNvSpPr/><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:p><a:r><a:t>{notes}</a:t></a:r></a:p></p:txBody></p:sp></p:spTree></p:cSld></p:notes>"#
                );
                put(&format!("ppt/notesSlides/notesSlide{n}.xml"), notes_xml.as_bytes());
            }
            put(
                &format!("ppt/slides/_rels/slide{n}.xml.rels"),
                rels(&slide_rels).as_bytes(),
            );
        }

        let presentation = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:presentation {NS}><p:sldIdLst>{sld_ids}</p:sldIdLst><p:sldSz cx="9144000" cy="6858000"/></p:presentation>"#
        );
        put("ppt/presentation.xml", presentation.as_bytes());
        put("ppt/_rels/presentation.xml.rels", rels(&pres_rels).as_bytes());
        put("_rels/.rels", rels(&root_rels).as_bytes());

        let content_types = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Default Extension="png" ContentType="image/png"/><Default Extension="jpeg" ContentType="image/jpeg"/><Default Extension="gif" ContentType="image/gif"/>{overrides}</Types>"#
        );
        put("[Content_Types].xml", content_types.as_bytes());

        zip.finish().unwrap().into_inner()
    }

    /// Write the package to `dir/name` and return the path.
    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }
}

/// Layout or master part holding `shapes` in its shape tree.
fn shape_part(root: &str, shapes: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><{root} {NS}><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{}</p:spTree></p:cSld></{root}>"#,
        shapes.concat()
    )
}

fn rels(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{body}</Relationships>"#
    )
}

pub const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3, 4];
pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 5, 6, 7, 8];
