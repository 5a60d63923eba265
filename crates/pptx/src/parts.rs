//! Package-level parts: content types, relationships, document
//! properties, the presentation part, and the master/layout/theme that
//! every blank slide hangs off.

use crate::document::{DocumentProperties, Presentation};
use crate::xml::{XmlBuilder, NS_A, NS_P, NS_R};
use deck_core::theme;
use deck_core::Result;

pub(crate) const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
pub(crate) const PACKAGE_RELS_PATH: &str = "_rels/.rels";
pub(crate) const CORE_PROPS_PATH: &str = "docProps/core.xml";
pub(crate) const APP_PROPS_PATH: &str = "docProps/app.xml";
pub(crate) const PRESENTATION_PATH: &str = "ppt/presentation.xml";
pub(crate) const PRESENTATION_RELS_PATH: &str = "ppt/_rels/presentation.xml.rels";
pub(crate) const PRES_PROPS_PATH: &str = "ppt/presProps.xml";
pub(crate) const TABLE_STYLES_PATH: &str = "ppt/tableStyles.xml";
pub(crate) const SLIDE_MASTER_PATH: &str = "ppt/slideMasters/slideMaster1.xml";
pub(crate) const SLIDE_MASTER_RELS_PATH: &str = "ppt/slideMasters/_rels/slideMaster1.xml.rels";
pub(crate) const SLIDE_LAYOUT_PATH: &str = "ppt/slideLayouts/slideLayout1.xml";
pub(crate) const SLIDE_LAYOUT_RELS_PATH: &str = "ppt/slideLayouts/_rels/slideLayout1.xml.rels";
pub(crate) const THEME_PATH: &str = "ppt/theme/theme1.xml";

const NS_PACKAGE_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_APP_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_PRES_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
const REL_TABLE_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";

const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
const CT_PRES_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
const CT_TABLE_STYLES: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
const CT_CORE_PROPS: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_APP_PROPS: &str = "application/vnd.openxmlformats-officedocument.extended-properties+xml";

/// Relationship ids below this are taken by master, theme, and props.
const FIRST_SLIDE_REL: usize = 5;

/// Zip path of the n-th slide (1-based).
pub(crate) fn slide_path(number: usize) -> String {
    format!("ppt/slides/slide{}.xml", number)
}

pub(crate) fn slide_rels_path(number: usize) -> String {
    format!("ppt/slides/_rels/slide{}.xml.rels", number)
}

/// Relationship id of the n-th slide (1-based) in the presentation part.
pub(crate) fn slide_rel_id(number: usize) -> String {
    format!("rId{}", FIRST_SLIDE_REL + number - 1)
}

pub(crate) fn content_types_xml(slide_count: usize) -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    xml.empty(
        "Default",
        &[
            ("Extension", "rels"),
            ("ContentType", "application/vnd.openxmlformats-package.relationships+xml"),
        ],
    )?;
    xml.empty("Default", &[("Extension", "xml"), ("ContentType", "application/xml")])?;

    let fixed = [
        (PRESENTATION_PATH, CT_PRESENTATION),
        (SLIDE_MASTER_PATH, CT_SLIDE_MASTER),
        (SLIDE_LAYOUT_PATH, CT_SLIDE_LAYOUT),
        (THEME_PATH, CT_THEME),
        (PRES_PROPS_PATH, CT_PRES_PROPS),
        (TABLE_STYLES_PATH, CT_TABLE_STYLES),
        (CORE_PROPS_PATH, CT_CORE_PROPS),
        (APP_PROPS_PATH, CT_APP_PROPS),
    ];
    for (path, content_type) in fixed {
        let part_name = format!("/{}", path);
        xml.empty("Override", &[("PartName", part_name.as_str()), ("ContentType", content_type)])?;
    }
    for number in 1..=slide_count {
        let part_name = format!("/{}", slide_path(number));
        xml.empty("Override", &[("PartName", part_name.as_str()), ("ContentType", CT_SLIDE)])?;
    }

    xml.end("Types")?;
    xml.finish()
}

/// Write a relationships part from `(id, type, target)` triples.
fn relationships_xml(rels: &[(&str, &str, &str)]) -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start("Relationships", &[("xmlns", NS_PACKAGE_RELS)])?;
    for &(id, rel_type, target) in rels {
        xml.empty("Relationship", &[("Id", id), ("Type", rel_type), ("Target", target)])?;
    }
    xml.end("Relationships")?;
    xml.finish()
}

pub(crate) fn package_rels_xml() -> Result<String> {
    relationships_xml(&[
        ("rId1", REL_OFFICE_DOCUMENT, PRESENTATION_PATH),
        ("rId2", REL_CORE_PROPS, CORE_PROPS_PATH),
        ("rId3", REL_APP_PROPS, APP_PROPS_PATH),
    ])
}

pub(crate) fn presentation_rels_xml(slide_count: usize) -> Result<String> {
    let slide_rels: Vec<(String, String)> = (1..=slide_count)
        .map(|n| (slide_rel_id(n), format!("slides/slide{}.xml", n)))
        .collect();

    let mut rels: Vec<(&str, &str, &str)> = vec![
        ("rId1", REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
        ("rId2", REL_THEME, "theme/theme1.xml"),
        ("rId3", REL_PRES_PROPS, "presProps.xml"),
        ("rId4", REL_TABLE_STYLES, "tableStyles.xml"),
    ];
    for (id, target) in &slide_rels {
        rels.push((id.as_str(), REL_SLIDE, target.as_str()));
    }
    relationships_xml(&rels)
}

pub(crate) fn slide_master_rels_xml() -> Result<String> {
    relationships_xml(&[
        ("rId1", REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
        ("rId2", REL_THEME, "../theme/theme1.xml"),
    ])
}

pub(crate) fn slide_layout_rels_xml() -> Result<String> {
    relationships_xml(&[("rId1", REL_SLIDE_MASTER, "../slideMasters/slideMaster1.xml")])
}

pub(crate) fn slide_rels_xml() -> Result<String> {
    relationships_xml(&[("rId1", REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml")])
}

pub(crate) fn presentation_xml(pres: &Presentation) -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start(
        "p:presentation",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P), ("saveSubsetFonts", "1")],
    )?;

    xml.start("p:sldMasterIdLst", &[])?;
    xml.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
    xml.end("p:sldMasterIdLst")?;

    if !pres.slides().is_empty() {
        xml.start("p:sldIdLst", &[])?;
        for (index, slide) in pres.slides().iter().enumerate() {
            let id = slide.id().to_string();
            let rel_id = slide_rel_id(index + 1);
            xml.empty("p:sldId", &[("id", id.as_str()), ("r:id", rel_id.as_str())])?;
        }
        xml.end("p:sldIdLst")?;
    }

    let cx = pres.slide_width().get().to_string();
    let cy = pres.slide_height().get().to_string();
    xml.empty("p:sldSz", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    xml.empty("p:notesSz", &[("cx", "6858000"), ("cy", "9144000")])?;
    xml.end("p:presentation")?;
    xml.finish()
}

pub(crate) fn core_props_xml(props: &DocumentProperties) -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start(
        "cp:coreProperties",
        &[
            ("xmlns:cp", "http://schemas.openxmlformats.org/package/2006/metadata/core-properties"),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    xml.text_element("dc:title", &[], &props.title)?;
    xml.text_element("dc:subject", &[], &props.subject)?;
    xml.text_element("dc:creator", &[], &props.author)?;
    xml.text_element("cp:lastModifiedBy", &[], &props.author)?;
    xml.text_element("cp:revision", &[], "1")?;
    xml.end("cp:coreProperties")?;
    xml.finish()
}

pub(crate) fn app_props_xml(slide_count: usize) -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start(
        "Properties",
        &[
            ("xmlns", "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties"),
            ("xmlns:vt", "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes"),
        ],
    )?;
    xml.text_element("Application", &[], env!("CARGO_PKG_NAME"))?;
    xml.text_element("PresentationFormat", &[], "On-screen Show (4:3)")?;
    xml.text_element("Slides", &[], &slide_count.to_string())?;
    xml.end("Properties")?;
    xml.finish()
}

pub(crate) fn pres_props_xml() -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.empty(
        "p:presentationPr",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;
    xml.finish()
}

pub(crate) fn table_styles_xml() -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.empty(
        "a:tblStyleLst",
        &[("xmlns:a", NS_A), ("def", "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}")],
    )?;
    xml.finish()
}

/// Empty group properties every shape tree starts with.
pub(crate) fn write_group_header(xml: &mut XmlBuilder) -> Result<()> {
    xml.start("p:nvGrpSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    xml.empty("p:cNvGrpSpPr", &[])?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvGrpSpPr")?;

    xml.start("p:grpSpPr", &[])?;
    xml.start("a:xfrm", &[])?;
    xml.empty("a:off", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:ext", &[("cx", "0"), ("cy", "0")])?;
    xml.empty("a:chOff", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:chExt", &[("cx", "0"), ("cy", "0")])?;
    xml.end("a:xfrm")?;
    xml.end("p:grpSpPr")
}

/// Paragraph defaults for text boxes at one outline level.
fn write_other_style_level(xml: &mut XmlBuilder, tag: &str, margin: &str) -> Result<()> {
    xml.start(tag, &[("marL", margin), ("algn", "l"), ("defTabSz", "914400")])?;
    xml.start("a:defRPr", &[("sz", "1800"), ("kern", "1200")])?;
    xml.start("a:solidFill", &[])?;
    xml.empty("a:schemeClr", &[("val", "tx1")])?;
    xml.end("a:solidFill")?;
    xml.empty("a:latin", &[("typeface", "+mn-lt")])?;
    xml.end("a:defRPr")?;
    xml.end(tag)
}

pub(crate) fn slide_master_xml() -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start("p:sldMaster", &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)])?;

    xml.start("p:cSld", &[])?;
    xml.start("p:bg", &[])?;
    xml.start("p:bgRef", &[("idx", "1001")])?;
    xml.empty("a:schemeClr", &[("val", "bg1")])?;
    xml.end("p:bgRef")?;
    xml.end("p:bg")?;
    xml.start("p:spTree", &[])?;
    write_group_header(&mut xml)?;
    xml.end("p:spTree")?;
    xml.end("p:cSld")?;

    xml.empty(
        "p:clrMap",
        &[
            ("bg1", "lt1"),
            ("tx1", "dk1"),
            ("bg2", "lt2"),
            ("tx2", "dk2"),
            ("accent1", "accent1"),
            ("accent2", "accent2"),
            ("accent3", "accent3"),
            ("accent4", "accent4"),
            ("accent5", "accent5"),
            ("accent6", "accent6"),
            ("hlink", "hlink"),
            ("folHlink", "folHlink"),
        ],
    )?;

    xml.start("p:sldLayoutIdLst", &[])?;
    xml.empty("p:sldLayoutId", &[("id", "2147483649"), ("r:id", "rId1")])?;
    xml.end("p:sldLayoutIdLst")?;

    xml.start("p:txStyles", &[])?;
    xml.start("p:titleStyle", &[])?;
    xml.start("a:lvl1pPr", &[("algn", "l")])?;
    xml.empty("a:defRPr", &[("sz", "4400")])?;
    xml.end("a:lvl1pPr")?;
    xml.end("p:titleStyle")?;
    xml.start("p:bodyStyle", &[])?;
    xml.start("a:lvl1pPr", &[("marL", "228600"), ("indent", "-228600")])?;
    xml.empty("a:defRPr", &[("sz", "2800")])?;
    xml.end("a:lvl1pPr")?;
    xml.end("p:bodyStyle")?;
    xml.start("p:otherStyle", &[])?;
    write_other_style_level(&mut xml, "a:lvl1pPr", "0")?;
    write_other_style_level(&mut xml, "a:lvl2pPr", "457200")?;
    xml.end("p:otherStyle")?;
    xml.end("p:txStyles")?;

    xml.end("p:sldMaster")?;
    xml.finish()
}

pub(crate) fn slide_layout_xml() -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start(
        "p:sldLayout",
        &[
            ("xmlns:a", NS_A),
            ("xmlns:r", NS_R),
            ("xmlns:p", NS_P),
            ("type", "blank"),
            ("preserve", "1"),
        ],
    )?;
    xml.start("p:cSld", &[("name", "Blank")])?;
    xml.start("p:spTree", &[])?;
    write_group_header(&mut xml)?;
    xml.end("p:spTree")?;
    xml.end("p:cSld")?;
    xml.start("p:clrMapOvr", &[])?;
    xml.empty("a:masterClrMapping", &[])?;
    xml.end("p:clrMapOvr")?;
    xml.end("p:sldLayout")?;
    xml.finish()
}

/// Theme with the deck palette as its color scheme.
pub(crate) fn theme_xml() -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start("a:theme", &[("xmlns:a", NS_A), ("name", "MyWelly")])?;
    xml.start("a:themeElements", &[])?;

    xml.start("a:clrScheme", &[("name", "MyWelly Green")])?;
    xml.start("a:dk1", &[])?;
    xml.empty("a:sysClr", &[("val", "windowText"), ("lastClr", "000000")])?;
    xml.end("a:dk1")?;
    xml.start("a:lt1", &[])?;
    xml.empty("a:sysClr", &[("val", "window"), ("lastClr", "FFFFFF")])?;
    xml.end("a:lt1")?;
    let scheme = [
        ("a:dk2", theme::DARK_GREEN),
        ("a:lt2", theme::LIGHT_GRAY),
        ("a:accent1", theme::PRIMARY_GREEN),
        ("a:accent2", theme::LIGHT_GREEN),
        ("a:accent3", theme::ACCENT_GREEN),
        ("a:accent4", theme::DARK_GREEN),
        ("a:accent5", theme::DARK_GRAY),
        ("a:accent6", theme::CODE_BACKGROUND),
    ];
    for (tag, color) in scheme {
        xml.start(tag, &[])?;
        xml.empty("a:srgbClr", &[("val", color.hex().as_str())])?;
        xml.end(tag)?;
    }
    for (tag, hex) in [("a:hlink", "0563C1"), ("a:folHlink", "954F72")] {
        xml.start(tag, &[])?;
        xml.empty("a:srgbClr", &[("val", hex)])?;
        xml.end(tag)?;
    }
    xml.end("a:clrScheme")?;

    xml.start("a:fontScheme", &[("name", "Office")])?;
    for (tag, face) in [("a:majorFont", "Calibri Light"), ("a:minorFont", "Calibri")] {
        xml.start(tag, &[])?;
        xml.empty("a:latin", &[("typeface", face)])?;
        xml.empty("a:ea", &[("typeface", "")])?;
        xml.empty("a:cs", &[("typeface", "")])?;
        xml.end(tag)?;
    }
    xml.end("a:fontScheme")?;

    xml.start("a:fmtScheme", &[("name", "Office")])?;
    xml.start("a:fillStyleLst", &[])?;
    for _ in 0..3 {
        write_placeholder_fill(&mut xml)?;
    }
    xml.end("a:fillStyleLst")?;
    xml.start("a:lnStyleLst", &[])?;
    for width in ["6350", "12700", "19050"] {
        xml.start("a:ln", &[("w", width)])?;
        write_placeholder_fill(&mut xml)?;
        xml.end("a:ln")?;
    }
    xml.end("a:lnStyleLst")?;
    xml.start("a:effectStyleLst", &[])?;
    for _ in 0..3 {
        xml.start("a:effectStyle", &[])?;
        xml.empty("a:effectLst", &[])?;
        xml.end("a:effectStyle")?;
    }
    xml.end("a:effectStyleLst")?;
    xml.start("a:bgFillStyleLst", &[])?;
    for _ in 0..3 {
        write_placeholder_fill(&mut xml)?;
    }
    xml.end("a:bgFillStyleLst")?;
    xml.end("a:fmtScheme")?;

    xml.end("a:themeElements")?;
    xml.empty("a:objectDefaults", &[])?;
    xml.empty("a:extraClrSchemeLst", &[])?;
    xml.end("a:theme")?;
    xml.finish()
}

fn write_placeholder_fill(xml: &mut XmlBuilder) -> Result<()> {
    xml.start("a:solidFill", &[])?;
    xml.empty("a:schemeClr", &[("val", "phClr")])?;
    xml.end("a:solidFill")
}
