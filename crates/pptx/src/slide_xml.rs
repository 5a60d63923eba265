//! Serialization of a single slide part.

use crate::document::{Fill, Outline, Paragraph, Shape, ShapeKind, Slide};
use crate::parts::write_group_header;
use crate::xml::{XmlBuilder, NS_A, NS_P, NS_R};
use deck_core::{Result, Rgb};

/// Generate `ppt/slides/slideN.xml` for a slide.
pub(crate) fn slide_xml(slide: &Slide) -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start("p:sld", &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)])?;
    xml.start("p:cSld", &[])?;

    if let Some(fill) = slide.background() {
        xml.start("p:bg", &[])?;
        xml.start("p:bgPr", &[])?;
        write_fill(&mut xml, fill)?;
        xml.empty("a:effectLst", &[])?;
        xml.end("p:bgPr")?;
        xml.end("p:bg")?;
    }

    xml.start("p:spTree", &[])?;
    write_group_header(&mut xml)?;
    for shape in slide.shapes() {
        write_shape(&mut xml, shape)?;
    }
    xml.end("p:spTree")?;

    xml.end("p:cSld")?;
    xml.start("p:clrMapOvr", &[])?;
    xml.empty("a:masterClrMapping", &[])?;
    xml.end("p:clrMapOvr")?;
    xml.end("p:sld")?;
    xml.finish()
}

fn write_shape(xml: &mut XmlBuilder, shape: &Shape) -> Result<()> {
    let is_text_box = shape.kind() == ShapeKind::TextBox;
    let id = shape.id().to_string();

    xml.start("p:sp", &[])?;

    xml.start("p:nvSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", id.as_str()), ("name", shape.name())])?;
    if is_text_box {
        xml.empty("p:cNvSpPr", &[("txBox", "1")])?;
    } else {
        xml.empty("p:cNvSpPr", &[])?;
    }
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvSpPr")?;

    let frame = shape.frame();
    let (x, y) = (frame.x.get().to_string(), frame.y.get().to_string());
    let (cx, cy) = (frame.cx.get().to_string(), frame.cy.get().to_string());
    xml.start("p:spPr", &[])?;
    xml.start("a:xfrm", &[])?;
    xml.empty("a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
    xml.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    xml.end("a:xfrm")?;
    xml.start("a:prstGeom", &[("prst", shape.kind().preset())])?;
    xml.empty("a:avLst", &[])?;
    xml.end("a:prstGeom")?;
    write_fill(xml, shape.fill())?;
    write_outline(xml, shape.outline())?;
    xml.end("p:spPr")?;

    write_text_body(xml, shape, is_text_box)?;

    xml.end("p:sp")
}

fn write_fill(xml: &mut XmlBuilder, fill: &Fill) -> Result<()> {
    match fill {
        Fill::None => xml.empty("a:noFill", &[]),
        Fill::Solid(color) => write_solid_fill(xml, *color),
        Fill::Gradient(gradient) => {
            xml.start("a:gradFill", &[("rotWithShape", "1")])?;
            xml.start("a:gsLst", &[])?;
            for (pos, color) in [("0", gradient.start), ("100000", gradient.end)] {
                xml.start("a:gs", &[("pos", pos)])?;
                xml.empty("a:srgbClr", &[("val", color.hex().as_str())])?;
                xml.end("a:gs")?;
            }
            xml.end("a:gsLst")?;
            let angle = gradient.ooxml_angle().to_string();
            xml.empty("a:lin", &[("ang", angle.as_str()), ("scaled", "0")])?;
            xml.end("a:gradFill")
        }
    }
}

fn write_solid_fill(xml: &mut XmlBuilder, color: Rgb) -> Result<()> {
    xml.start("a:solidFill", &[])?;
    xml.empty("a:srgbClr", &[("val", color.hex().as_str())])?;
    xml.end("a:solidFill")
}

fn write_outline(xml: &mut XmlBuilder, outline: &Outline) -> Result<()> {
    match outline {
        Outline::Default => Ok(()),
        Outline::Hidden => {
            xml.start("a:ln", &[])?;
            xml.empty("a:noFill", &[])?;
            xml.end("a:ln")
        }
        Outline::Solid { color, width } => {
            let w = width.get().to_string();
            xml.start("a:ln", &[("w", w.as_str())])?;
            write_solid_fill(xml, *color)?;
            xml.end("a:ln")
        }
    }
}

fn write_text_body(xml: &mut XmlBuilder, shape: &Shape, is_text_box: bool) -> Result<()> {
    let frame = shape.text_frame();
    let wrap = if frame.word_wrap { "square" } else { "none" };

    xml.start("p:txBody", &[])?;
    if is_text_box {
        xml.start("a:bodyPr", &[("wrap", wrap), ("rtlCol", "0")])?;
        xml.empty("a:spAutoFit", &[])?;
        xml.end("a:bodyPr")?;
    } else {
        xml.empty("a:bodyPr", &[("rtlCol", "0"), ("anchor", "ctr")])?;
    }
    xml.empty("a:lstStyle", &[])?;

    if frame.is_empty() {
        // A text body needs at least one paragraph.
        xml.start("a:p", &[])?;
        xml.empty("a:endParaRPr", &[("lang", "en-US")])?;
        xml.end("a:p")?;
    }
    for paragraph in frame.paragraphs() {
        write_paragraph(xml, paragraph)?;
    }

    xml.end("p:txBody")
}

fn write_paragraph(xml: &mut XmlBuilder, paragraph: &Paragraph) -> Result<()> {
    xml.start("a:p", &[])?;

    let level = paragraph.level.to_string();
    let mut ppr: Vec<(&str, &str)> = Vec::new();
    if paragraph.level > 0 {
        ppr.push(("lvl", level.as_str()));
    }
    if let Some(alignment) = paragraph.alignment {
        ppr.push(("algn", alignment.ooxml()));
    }
    if !ppr.is_empty() {
        xml.empty("a:pPr", &ppr)?;
    }

    if !paragraph.text.is_empty() {
        xml.start("a:r", &[])?;
        write_run_properties(xml, "a:rPr", paragraph)?;
        xml.text_element("a:t", &[], &paragraph.text)?;
        xml.end("a:r")?;
    }
    write_run_properties(xml, "a:endParaRPr", paragraph)?;

    xml.end("a:p")
}

fn write_run_properties(xml: &mut XmlBuilder, tag: &str, paragraph: &Paragraph) -> Result<()> {
    let font = &paragraph.font;
    let size = font.size.map(|s| s.hundredths().to_string());

    let mut attrs: Vec<(&str, &str)> = vec![("lang", "en-US")];
    if let Some(size) = size.as_deref() {
        attrs.push(("sz", size));
    }
    if let Some(bold) = font.bold {
        attrs.push(("b", if bold { "1" } else { "0" }));
    }
    attrs.push(("dirty", "0"));

    if font.color.is_none() && font.name.is_none() {
        return xml.empty(tag, &attrs);
    }

    xml.start(tag, &attrs)?;
    if let Some(color) = font.color {
        write_solid_fill(xml, color)?;
    }
    if let Some(name) = font.name.as_deref() {
        xml.empty("a:latin", &[("typeface", name)])?;
        xml.empty("a:cs", &[("typeface", name)])?;
    }
    xml.end(tag)
}
